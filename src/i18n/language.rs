//! Language type: validated language selector.
//!
//! A `Language` can only be constructed for codes present and enabled in the
//! registry, so the two-value domain of the active language is enforced at
//! construction time rather than at every use.

use crate::i18n::{LanguageConfig, LanguageRegistry, TextDirection};
use anyhow::{bail, Result};
use std::fmt;

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "fa")
    code: &'static str,
}

impl Language {
    /// English, the canonical language.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Persian, rendered right-to-left.
    pub const PERSIAN: Language = Language { code: "fa" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    ///
    /// # Example
    /// ```ignore
    /// let persian = Language::from_code("fa")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the canonical language (the one fresh sessions start in).
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This should
    /// never happen if the Language was constructed properly (via `from_code`
    /// or constants).
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Label shown in the language switcher.
    pub fn short_label(&self) -> &'static str {
        self.config().short_label
    }

    pub fn direction(&self) -> TextDirection {
        self.config().direction
    }

    pub fn is_rtl(&self) -> bool {
        self.direction() == TextDirection::Rtl
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    /// Replace ASCII digits with the language's native digits.
    ///
    /// Persian uses the Extended Arabic-Indic digits (U+06F0..U+06F9); every
    /// other character, including separators such as `%` and `-`, is kept.
    pub fn localize_digits(&self, text: &str) -> String {
        if *self != Language::PERSIAN {
            return text.to_string();
        }

        text.chars()
            .map(|c| match c.to_digit(10) {
                Some(d) if c.is_ascii_digit() => char::from_u32(0x06F0 + d).unwrap_or(c),
                _ => c,
            })
            .collect()
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
