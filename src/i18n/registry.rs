//! Language registry: the closed set of display locales the client supports.
//!
//! Language metadata is fixed at compile time, so the registry is an
//! immutable process-wide singleton initialized through `OnceLock`. Which
//! language a given `Translator` defaults to is decided by whoever builds it.

use std::sync::OnceLock;

/// Metadata for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "pl", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "Polish", "English")
    pub name: &'static str,

    /// Native name of the language (e.g., "Polski", "English")
    pub native_name: &'static str,

    /// Whether this is the fallback default language (exactly one is true)
    pub is_default: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Registry of all supported languages.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in registration order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all languages (including disabled ones).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if the built-in language list does not mark exactly one
    /// default language.
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.as_slice() {
            [single] => *single,
            [] => panic!("No default language found in registry"),
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// Supported languages. Polish is the default, as every table is authored in
/// Polish first.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "pl",
            name: "Polish",
            native_name: "Polski",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_polish() {
        let config = LanguageRegistry::get()
            .get_by_code("pl")
            .expect("Polish should be registered");
        assert_eq!(config.name, "Polish");
        assert_eq!(config.native_name, "Polski");
        assert!(config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LanguageRegistry::get()
            .get_by_code("en")
            .expect("English should be registered");
        assert_eq!(config.name, "English");
        assert!(!config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("de").is_none());
    }

    #[test]
    fn test_get_by_code_is_case_sensitive() {
        assert!(LanguageRegistry::get().get_by_code("PL").is_none());
    }

    #[test]
    fn test_list_enabled_contains_polish_and_english() {
        let enabled = LanguageRegistry::get().list_enabled();
        let codes: Vec<_> = enabled.iter().map(|lang| lang.code).collect();
        assert_eq!(codes, vec!["pl", "en"]);
    }

    #[test]
    fn test_list_all_matches_enabled() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.list_all().len(), registry.list_enabled().len());
    }

    #[test]
    fn test_exactly_one_default() {
        let registry = LanguageRegistry::get();
        let defaults = registry
            .list_all()
            .into_iter()
            .filter(|lang| lang.is_default)
            .count();
        assert_eq!(defaults, 1);
        assert_eq!(registry.default_language().code, "pl");
    }

    #[test]
    fn test_is_enabled() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_enabled("pl"));
        assert!(registry.is_enabled("en"));
        assert!(!registry.is_enabled("de"));
    }
}
