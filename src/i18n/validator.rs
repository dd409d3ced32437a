//! Key-set parity checks across translation tables.
//!
//! Tables are expected to share the reference table's keys, but nothing at
//! lookup time enforces it. Running the validator at startup or in CI turns
//! drift between locale documents into a report instead of raw keys on screen.

use crate::i18n::{MessageKey, Translator};
use std::collections::BTreeSet;

/// Validation report containing errors and warnings about a set of tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that will show raw keys to users
    pub errors: Vec<String>,

    /// Suspicious but harmless differences
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TableValidator;

impl TableValidator {
    /// Compare every table of `translator` against its reference table.
    ///
    /// Reports, in a stable order:
    /// - errors for compiled-in keys missing from the reference table
    /// - errors for reference keys missing from another table
    /// - warnings for keys that exist only outside the reference table
    /// - warnings for empty values, which resolve to the raw key
    pub fn validate(translator: &Translator) -> ValidationReport {
        let mut report = ValidationReport::new();
        let reference_language = translator.default_language();

        let Some(reference) = translator.reference_table() else {
            report.errors.push(format!(
                "No table loaded for default language '{}'",
                reference_language
            ));
            return report;
        };

        let reference_keys: BTreeSet<&str> = reference.keys().collect();

        for key in MessageKey::ALL {
            if !reference_keys.contains(key.as_str()) {
                report.errors.push(format!(
                    "Key '{}' is used in code but missing from reference table '{}'",
                    key, reference_language
                ));
            }
        }

        for language in translator.languages() {
            let Some(table) = translator.table(language) else {
                continue;
            };
            let keys: BTreeSet<&str> = table.keys().collect();

            if language != reference_language {
                for missing in reference_keys.difference(&keys) {
                    report.errors.push(format!(
                        "Key '{}' missing from '{}'",
                        missing, language
                    ));
                }
                for extra in keys.difference(&reference_keys) {
                    report.warnings.push(format!(
                        "Key '{}' in '{}' is not in reference table '{}'",
                        extra, language, reference_language
                    ));
                }
            }

            for key in &keys {
                if table.get(key).is_some_and(str::is_empty) {
                    report.warnings.push(format!(
                        "Key '{}' in '{}' has an empty value and will show the raw key",
                        key, language
                    ));
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Language, TranslationTable};

    fn full_table() -> TranslationTable {
        MessageKey::ALL
            .iter()
            .map(|key| (key.as_str(), format!("text for {}", key)))
            .collect()
    }

    #[test]
    fn test_builtin_tables_are_clean() {
        let translator = Translator::builtin().unwrap();
        let report = TableValidator::validate(&translator);
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_missing_reference_table() {
        let translator = Translator::new(Language::POLISH);
        let report = TableValidator::validate(&translator);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("No table loaded"));
    }

    #[test]
    fn test_missing_key_in_other_table() {
        let english: TranslationTable = MessageKey::ALL
            .iter()
            .filter(|key| **key != MessageKey::Logout)
            .map(|key| (key.as_str(), "text"))
            .collect();

        let translator = Translator::new(Language::POLISH)
            .with_table(Language::POLISH, full_table())
            .with_table(Language::ENGLISH, english);

        let report = TableValidator::validate(&translator);
        assert_eq!(report.errors, vec!["Key 'logout' missing from 'en'".to_string()]);
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_extra_key_is_warning() {
        let mut english = full_table();
        english.insert("legacy_banner", "Old banner");

        let translator = Translator::new(Language::POLISH)
            .with_table(Language::POLISH, full_table())
            .with_table(Language::ENGLISH, english);

        let report = TableValidator::validate(&translator);
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("legacy_banner"));
    }

    #[test]
    fn test_empty_value_is_warning() {
        let mut polish = full_table();
        polish.insert("save", "");

        let translator = Translator::new(Language::POLISH).with_table(Language::POLISH, polish);

        let report = TableValidator::validate(&translator);
        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("empty value"));
    }

    #[test]
    fn test_code_key_missing_from_reference() {
        let polish: TranslationTable = [("save", "Zapisz")].into_iter().collect();
        let translator = Translator::new(Language::POLISH).with_table(Language::POLISH, polish);

        let report = TableValidator::validate(&translator);
        assert_eq!(report.errors.len(), MessageKey::ALL.len() - 1);
        assert!(report
            .errors
            .iter()
            .all(|error| error.contains("used in code")));
    }

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_warning() {
        let mut report = ValidationReport::new();
        report.warnings.push("Test warning".to_string());
        assert!(!report.is_clean());
        assert!(report.has_warnings());
    }
}
