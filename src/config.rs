use crate::i18n::{Language, Translator};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `<code>.json` locale documents. Built-in tables are
    /// used when unset.
    pub locales_dir: Option<PathBuf>,

    /// Language used when a lookup names none
    pub default_language: Language,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            locales_dir: std::env::var("LOCALES_DIR")
                .ok()
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),

            default_language: match std::env::var("DEFAULT_LANGUAGE") {
                Ok(code) => Language::from_code(code.trim())
                    .with_context(|| format!("DEFAULT_LANGUAGE '{}' is not supported", code))?,
                Err(_) => Language::default(),
            },
        })
    }

    /// Build the translator this configuration describes.
    pub fn translator(&self) -> Result<Translator> {
        match &self.locales_dir {
            Some(dir) => Translator::from_dir(dir, self.default_language)
                .with_context(|| format!("Failed to load locales from {:?}", dir)),
            None => Ok(Translator::builtin()
                .context("Failed to load built-in locales")?
                .with_default_language(self.default_language)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_dir: None,
            default_language: Language::default(),
        }
    }
}
