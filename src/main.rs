use anyhow::{bail, Result};
use event_portal_client::config::Config;
use event_portal_client::i18n::{Language, TableValidator};
use tracing::{error, info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("event_portal_client=info".parse()?)
                .add_directive("locale_check=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let translator = config.translator()?;

    info!(
        "Checking {} locale tables (default '{}')",
        translator.languages().len(),
        translator.default_language()
    );

    let report = TableValidator::validate(&translator);
    for warning in &report.warnings {
        warn!("{}", warning);
    }
    for problem in &report.errors {
        error!("{}", problem);
    }

    // Optional lookup: locale-check <key> [lang]
    let mut args = std::env::args().skip(1);
    if let Some(key) = args.next() {
        let language = match args.next() {
            Some(code) => Language::from_code(&code)?,
            None => translator.default_language(),
        };
        println!("{}", translator.resolve_str(&key, language));
    }

    if report.has_errors() {
        bail!("{} locale errors found", report.errors.len());
    }

    info!("Locale tables are consistent");
    Ok(())
}
