//! Flat key -> string translation tables loaded from JSON locale documents.

use crate::error::{I18nError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Translations for a single language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a locale document.
    ///
    /// The document must be a single JSON object whose values are all
    /// strings. `source_name` only labels errors (usually the file name).
    pub fn from_json_str(source_name: &str, content: &str) -> Result<Self> {
        let json: Value = serde_json::from_str(content).map_err(|source| I18nError::Json {
            source_name: source_name.to_string(),
            source,
        })?;

        let Value::Object(map) = json else {
            return Err(I18nError::InvalidTable {
                source_name: source_name.to_string(),
                reason: "expected a JSON object at the top level".to_string(),
            });
        };

        let mut entries = HashMap::with_capacity(map.len());
        for (key, value) in map {
            match value {
                Value::String(text) => {
                    entries.insert(key, text);
                }
                other => {
                    return Err(I18nError::InvalidTable {
                        source_name: source_name.to_string(),
                        reason: format!("value for key '{}' is not a string: {}", key, other),
                    });
                }
            }
        }

        Ok(Self { entries })
    }

    /// Read and parse a locale document from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| I18nError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&path.to_string_lossy(), &content)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Keys in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for TranslationTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
