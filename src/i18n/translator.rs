//! Translation resolver.
//!
//! A `Translator` is built once at application startup and handed to whatever
//! renders text. It owns one table per language plus the language used when
//! callers do not name one.

use crate::error::Result;
use crate::i18n::{Language, MessageKey, MetricsReport, TranslationMetrics, TranslationTable};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

const BUILTIN_TABLES: &[(&str, &str)] = &[
    ("pl", include_str!("../../locales/pl.json")),
    ("en", include_str!("../../locales/en.json")),
];

#[derive(Debug)]
pub struct Translator {
    tables: HashMap<Language, TranslationTable>,
    default_language: Language,
    metrics: TranslationMetrics,
}

impl Translator {
    /// A translator with no tables. Every lookup falls back to the key until
    /// tables are added with [`Translator::with_table`].
    pub fn new(default_language: Language) -> Self {
        Self {
            tables: HashMap::new(),
            default_language,
            metrics: TranslationMetrics::new(),
        }
    }

    /// A translator over the locale documents compiled into the crate,
    /// defaulting to the registry's default language.
    pub fn builtin() -> Result<Self> {
        let mut translator = Self::new(Language::default());
        for (code, content) in BUILTIN_TABLES {
            let language = Language::from_code(code)?;
            let table = TranslationTable::from_json_str(&format!("{}.json", code), content)?;
            translator.tables.insert(language, table);
        }
        Ok(translator)
    }

    /// Load `<code>.json` from `dir` for every enabled language.
    ///
    /// Every enabled language must have a document; a missing one is an
    /// error rather than a silent all-fallback table.
    pub fn from_dir(dir: &Path, default_language: Language) -> Result<Self> {
        let mut translator = Self::new(default_language);
        for language in Language::all() {
            let path = dir.join(format!("{}.json", language.code()));
            let table = TranslationTable::from_path(&path)?;
            info!(
                "Loaded {} translations for '{}' from {:?}",
                table.len(),
                language,
                path
            );
            translator.tables.insert(language, table);
        }
        Ok(translator)
    }

    /// Add or replace the table for `language`.
    pub fn with_table(mut self, language: Language, table: TranslationTable) -> Self {
        debug!("Registered {} translations for '{}'", table.len(), language);
        self.tables.insert(language, table);
        self
    }

    pub fn with_default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    /// Resolve `key` in the default language.
    pub fn resolve(&self, key: MessageKey) -> String {
        self.resolve_in(key, self.default_language)
    }

    /// Resolve `key` in `language`, falling back to the key itself.
    pub fn resolve_in(&self, key: MessageKey, language: Language) -> String {
        self.resolve_str(key.as_str(), language)
    }

    /// Resolve a raw string key in `language`.
    ///
    /// Returns the key unchanged when the language has no table, the table
    /// has no entry, or the entry is an empty string.
    pub fn resolve_str(&self, key: &str, language: Language) -> String {
        match self.lookup(key, language) {
            Some(text) => {
                self.metrics.record_hit();
                text.to_string()
            }
            None => {
                self.metrics.record_fallback();
                key.to_string()
            }
        }
    }

    fn lookup(&self, key: &str, language: Language) -> Option<&str> {
        self.tables
            .get(&language)
            .and_then(|table| table.get(key))
            .filter(|text| !text.is_empty())
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    pub fn table(&self, language: Language) -> Option<&TranslationTable> {
        self.tables.get(&language)
    }

    /// The table of the default language, which defines the valid key set.
    pub fn reference_table(&self) -> Option<&TranslationTable> {
        self.table(self.default_language)
    }

    /// Languages that have a table, in registry order.
    pub fn languages(&self) -> Vec<Language> {
        Language::all()
            .into_iter()
            .filter(|language| self.tables.contains_key(language))
            .collect()
    }

    pub fn metrics(&self) -> MetricsReport {
        self.metrics.report()
    }
}
