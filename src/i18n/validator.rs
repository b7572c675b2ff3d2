//! Translation completeness validation module.
//!
//! Compares every language's tree against the canonical tree so that a
//! missing translation shows up in a report instead of as a raw key path on
//! a rendered page.

use crate::contact::is_email;
use crate::i18n::{Language, LanguageRegistry, TranslationNode, TranslationTable};
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Structural problems: missing paths, shape or length mismatches
    pub errors: Vec<String>,

    /// Leaves that look untranslated
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation tree parity.
pub struct TranslationValidator;

static URL_REGEX: OnceLock<Regex> = OnceLock::new();
static LETTER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Check every enabled language in `table` against the canonical one.
    ///
    /// Messages are prefixed with the language code being checked.
    pub fn check_table(table: &TranslationTable) -> ValidationReport {
        let mut report = ValidationReport::new();
        let canonical = Language::canonical();

        let Some(canonical_root) = table.root(canonical) else {
            report
                .errors
                .push(format!("[{}] canonical language has no translations", canonical));
            return report;
        };

        let languages = LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .filter_map(|config| Language::from_code(config.code).ok());

        for language in languages {
            if language.is_canonical() {
                continue;
            }

            let Some(root) = table.root(language) else {
                report
                    .errors
                    .push(format!("[{}] language has no translations", language));
                continue;
            };

            let mut parity = Self::check_parity(canonical_root, root);
            for message in parity.errors.iter_mut().chain(parity.warnings.iter_mut()) {
                *message = format!("[{}] {}", language, message);
            }
            report.merge(parity);
        }

        report
    }

    /// Compare two trees path by path.
    ///
    /// Errors:
    /// - a path present in one tree but not the other
    /// - a path that is a string in one tree and a group or list in the other
    /// - lists of different lengths
    ///
    /// Warnings:
    /// - non-empty leaves whose text is identical in both trees, unless the
    ///   text is language-neutral (emails, URLs, text without letters)
    pub fn check_parity(canonical: &TranslationNode, other: &TranslationNode) -> ValidationReport {
        let mut report = ValidationReport::new();
        Self::compare("", canonical, other, &mut report);
        report
    }

    fn compare(path: &str, canonical: &TranslationNode, other: &TranslationNode, report: &mut ValidationReport) {
        let display = if path.is_empty() { "<root>" } else { path };

        match (canonical, other) {
            (TranslationNode::Leaf(a), TranslationNode::Leaf(b)) => {
                if a == b && !Self::is_language_neutral(a) {
                    report
                        .warnings
                        .push(format!("'{}' is identical in both languages: {:?}", display, a));
                }
            }
            (TranslationNode::List(a), TranslationNode::List(b)) => {
                if a.len() != b.len() {
                    report.errors.push(format!(
                        "'{}' has {} items in the canonical language but {}",
                        display,
                        a.len(),
                        b.len()
                    ));
                }
                for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
                    Self::compare(&join(path, &i.to_string()), x, y, report);
                }
            }
            (TranslationNode::Branch(a), TranslationNode::Branch(b)) => {
                for (key, x) in a {
                    match b.get(key) {
                        Some(y) => Self::compare(&join(path, key), x, y, report),
                        None => report
                            .errors
                            .push(format!("'{}' is missing", join(path, key))),
                    }
                }
                for key in b.keys().filter(|key| !a.contains_key(*key)) {
                    report.errors.push(format!(
                        "'{}' is not in the canonical language",
                        join(path, key)
                    ));
                }
            }
            (a, b) => report.errors.push(format!(
                "'{}' is a {} in the canonical language but a {}",
                display,
                kind(a),
                kind(b)
            )),
        }
    }

    /// Text that needs no translation: empty, an email, a URL, or no letters at all.
    fn is_language_neutral(text: &str) -> bool {
        let url = URL_REGEX.get_or_init(|| Regex::new(r"^https?://\S+$").unwrap());
        let letter = LETTER_REGEX.get_or_init(|| Regex::new(r"\p{L}").unwrap());

        let text = text.trim();
        text.is_empty() || is_email(text) || url.is_match(text) || !letter.is_match(text)
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn kind(node: &TranslationNode) -> &'static str {
    match node {
        TranslationNode::Leaf(_) => "string",
        TranslationNode::List(_) => "list",
        TranslationNode::Branch(_) => "group",
    }
}
