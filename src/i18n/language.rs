//! Language tag: a validated member of the registry's closed set.

use crate::error::{I18nError, Result};
use crate::i18n::{LanguageConfig, LanguageRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported display language.
///
/// Only codes present and enabled in the [`LanguageRegistry`] can be turned
/// into a `Language`, so holding one means its table lookup is well defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language {
    /// ISO 639-1 language code (e.g., "pl", "en")
    code: &'static str,
}

impl Language {
    pub const POLISH: Language = Language { code: "pl" };

    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered and enabled
    /// * `Err(I18nError::UnsupportedLanguage)` for unknown codes
    /// * `Err(I18nError::LanguageDisabled)` for registered but disabled codes
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => Err(I18nError::LanguageDisabled(code.to_string())),
            None => Err(I18nError::UnsupportedLanguage(code.to_string())),
        }
    }

    /// Every enabled language, in registry order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    /// The ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full registry entry for this language.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for values built through `from_code`, `default` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be registered")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl Default for Language {
    fn default() -> Self {
        Language {
            code: LanguageRegistry::get().default_language().code,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        Language::from_code(s)
    }
}

impl TryFrom<String> for Language {
    type Error = I18nError;

    fn try_from(value: String) -> Result<Self> {
        Language::from_code(&value)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.code.to_string()
    }
}
