use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring translations.
///
/// Resolution itself never fails: a missing translation falls back to the
/// key. These variants cover programming and deployment mistakes only.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Unknown language code: '{0}'")]
    UnsupportedLanguage(String),

    #[error("Language '{0}' is not enabled")]
    LanguageDisabled(String),

    #[error("Invalid translation table '{source_name}': {reason}")]
    InvalidTable { source_name: String, reason: String },

    #[error("Failed to parse translation table '{source_name}'")]
    Json {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read translation table {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, I18nError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_message() {
        let err = I18nError::UnsupportedLanguage("fr".to_string());
        assert_eq!(err.to_string(), "Unknown language code: 'fr'");
    }

    #[test]
    fn test_invalid_table_message_names_source() {
        let err = I18nError::InvalidTable {
            source_name: "pl.json".to_string(),
            reason: "expected a JSON object".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("pl.json"));
        assert!(message.contains("expected a JSON object"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = I18nError::Io {
            path: PathBuf::from("/missing/en.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("en.json"));
    }
}
