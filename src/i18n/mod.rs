//! Internationalization (i18n) module.
//!
//! Flat key lookup over per-language JSON tables with a visible fallback to
//! the key itself. There is no pluralization, interpolation or locale
//! negotiation: a string is either in the table or the key is shown.
//!
//! # Architecture
//!
//! - `registry`: the closed set of supported languages and their metadata
//! - `language`: validated `Language` tag
//! - `key`: compile-time `MessageKey` enum of content keys
//! - `table`: `TranslationTable` parsed from a locale document
//! - `translator`: `Translator`, the resolver built at startup
//! - `validator`: key-set parity checks between tables
//! - `metrics`: hit/fallback counters per translator
//!
//! # Example
//!
//! ```rust
//! use event_portal_client::i18n::{Language, MessageKey, Translator};
//!
//! let translator = Translator::builtin()?;
//! assert_eq!(translator.resolve(MessageKey::Login), "Zaloguj się");
//! assert_eq!(translator.resolve_in(MessageKey::Login, Language::ENGLISH), "Log in");
//! # Ok::<(), event_portal_client::error::I18nError>(())
//! ```

mod key;
mod language;
mod metrics;
mod registry;
mod table;
mod translator;
mod validator;

pub use key::MessageKey;
pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use table::TranslationTable;
pub use translator::Translator;
pub use validator::{TableValidator, ValidationReport};
