//! Internationalization (i18n) module for the bilingual site.
//!
//! All language-related logic, the translation trees, and the per-session
//! language context live here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages and their metadata
//! - `language`: Validated `Language` type (English / Persian)
//! - `table`: Typed translation trees parsed from the embedded locale files
//! - `context`: Session-scoped active language and the key-path resolver
//! - `validator`: Parity check between the canonical tree and the others
//! - `metrics`: Resolution hit / fallback counters
//!
//! # Example
//!
//! ```rust,ignore
//! use sib_site::i18n::{Language, LanguageContext, ResolutionMetrics, TranslationTable};
//!
//! let table = Arc::new(TranslationTable::embedded()?);
//! let cx = LanguageContext::new(table, Arc::new(ResolutionMetrics::new()), Language::ENGLISH);
//!
//! assert_eq!(cx.resolve("quick.hedging.title"), "Hedging Solutions");
//! cx.set_active_language(Language::PERSIAN);
//! assert_eq!(cx.resolve("quick.hedging.title"), "راهکارهای پوشش ریسک");
//! ```

mod context;
mod language;
mod metrics;
mod registry;
mod table;
mod validator;

pub use context::LanguageContext;
pub use language::Language;
pub use metrics::{MetricsReport, ResolutionMetrics};
pub use registry::{LanguageConfig, LanguageRegistry, TextDirection};
pub use table::{LookupError, TranslationNode, TranslationTable};
pub use validator::{TranslationValidator, ValidationReport};
