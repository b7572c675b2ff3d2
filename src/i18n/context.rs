//! Language context: the active language of one session plus read access to
//! the shared translation table.
//!
//! The active language lives in a `watch` channel. Setting it replaces the
//! value in place, so every clone of the context and every subscriber sees
//! the new language as soon as `set_active_language` returns.

use crate::i18n::{Language, LookupError, ResolutionMetrics, TextDirection, TranslationNode, TranslationTable};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Session-scoped language state with a key-path resolver.
///
/// Cloning is cheap and yields a handle onto the same state.
#[derive(Debug, Clone)]
pub struct LanguageContext {
    table: Arc<TranslationTable>,
    metrics: Arc<ResolutionMetrics>,
    active: Arc<watch::Sender<Language>>,
}

impl LanguageContext {
    pub fn new(
        table: Arc<TranslationTable>,
        metrics: Arc<ResolutionMetrics>,
        initial: Language,
    ) -> Self {
        let (active, _) = watch::channel(initial);
        Self {
            table,
            metrics,
            active: Arc::new(active),
        }
    }

    pub fn get_active_language(&self) -> Language {
        *self.active.borrow()
    }

    /// Replace the active language and notify subscribers.
    pub fn set_active_language(&self, language: Language) {
        let previous = self.active.send_replace(language);
        debug!(from = %previous, to = %language, "Active language changed");
    }

    /// Receive a notification every time the active language is set.
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.active.subscribe()
    }

    pub fn direction(&self) -> TextDirection {
        self.get_active_language().direction()
    }

    /// Resolve a dot-delimited key path in the active language.
    ///
    /// Never fails: a path that is missing, or that names a group rather
    /// than a string, comes back unchanged and a warning is logged.
    pub fn resolve(&self, key_path: &str) -> String {
        let language = self.get_active_language();

        let outcome = match self.table.root(language) {
            Some(root) => root.lookup(key_path),
            None => Err(LookupError::Missing {
                segment: language.code().to_string(),
            }),
        };

        match outcome {
            Ok(text) => {
                self.metrics.record_resolved();
                text.to_string()
            }
            Err(LookupError::NotALeaf) => {
                warn!(key = key_path, language = %language, "Translation key does not resolve to a string");
                self.metrics.record_fallback();
                key_path.to_string()
            }
            Err(LookupError::Missing { segment }) => {
                warn!(key = key_path, language = %language, segment = %segment, "Translation key not found");
                self.metrics.record_fallback();
                key_path.to_string()
            }
        }
    }

    /// Resolve a key path and localize any ASCII digits in the result.
    pub fn resolve_digits(&self, key_path: &str) -> String {
        let language = self.get_active_language();
        language.localize_digits(&self.resolve(key_path))
    }

    /// Number of items in the list named by `key_path` (0 if it isn't a list).
    pub fn list_len(&self, key_path: &str) -> usize {
        let language = self.get_active_language();
        match self.table.root(language).map(|root| root.node_at(key_path)) {
            Some(Ok(TranslationNode::List(items))) => items.len(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn context() -> LanguageContext {
        let table = TranslationTable::embedded().expect("embedded locales should parse");
        LanguageContext::new(
            Arc::new(table),
            Arc::new(ResolutionMetrics::new()),
            Language::ENGLISH,
        )
    }

    fn context_with(en: &str, fa: &str) -> (LanguageContext, Arc<ResolutionMetrics>) {
        let mut table = TranslationTable::new();
        table.load_json(Language::ENGLISH, en).unwrap();
        table.load_json(Language::PERSIAN, fa).unwrap();
        let metrics = Arc::new(ResolutionMetrics::new());
        let cx = LanguageContext::new(Arc::new(table), Arc::clone(&metrics), Language::ENGLISH);
        (cx, metrics)
    }

    // ==================== Active Language Tests ====================

    #[test]
    fn test_default_language_is_initial() {
        assert_eq!(context().get_active_language(), Language::ENGLISH);
    }

    #[test]
    fn test_set_then_get_roundtrip() {
        let cx = context();
        for language in [Language::PERSIAN, Language::ENGLISH] {
            cx.set_active_language(language);
            assert_eq!(cx.get_active_language(), language);
        }
    }

    #[test]
    fn test_clones_share_state() {
        let cx = context();
        let other = cx.clone();

        other.set_active_language(Language::PERSIAN);
        assert_eq!(cx.get_active_language(), Language::PERSIAN);
        assert_eq!(cx.direction(), TextDirection::Rtl);
    }

    #[test]
    fn test_subscribers_see_change_synchronously() {
        let cx = context();
        let mut rx = cx.subscribe();
        assert!(!rx.has_changed().unwrap());

        cx.set_active_language(Language::PERSIAN);

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Language::PERSIAN);
    }

    // ==================== Resolve Tests ====================

    #[test]
    fn test_resolve_quick_hedging_title_in_both_languages() {
        let cx = context();
        assert_eq!(cx.resolve("quick.hedging.title"), "Hedging Solutions");

        cx.set_active_language(Language::PERSIAN);
        assert_eq!(cx.resolve("quick.hedging.title"), "راهکارهای پوشش ریسک");
    }

    #[test]
    fn test_resolve_missing_key_returns_path() {
        let cx = context();
        assert_eq!(cx.resolve("nav.doesNotExist"), "nav.doesNotExist");

        cx.set_active_language(Language::PERSIAN);
        assert_eq!(cx.resolve("nav.doesNotExist"), "nav.doesNotExist");
    }

    #[test]
    fn test_resolve_branch_returns_path() {
        let cx = context();
        assert_eq!(cx.resolve("quick.hedging"), "quick.hedging");
        assert_eq!(cx.resolve("hedging.benefits.list"), "hedging.benefits.list");
    }

    #[test]
    fn test_resolve_list_item() {
        let cx = context();
        assert_eq!(
            cx.resolve("hedging.process.steps.0.title"),
            "Needs Analysis & Risk Assessment"
        );
    }

    #[test]
    fn test_path_only_in_one_language_falls_back_in_other() {
        let (cx, metrics) = context_with(
            r#"{ "only": { "english": "Here" } }"#,
            r#"{ "only": {} }"#,
        );
        assert_eq!(cx.resolve("only.english"), "Here");

        cx.set_active_language(Language::PERSIAN);
        assert_eq!(cx.resolve("only.english"), "only.english");
        assert_eq!(cx.resolve("only.english"), "only.english");

        assert_eq!(metrics.resolved(), 1);
        assert_eq!(metrics.fallbacks(), 2);
    }

    #[test]
    fn test_missing_language_tree_falls_back() {
        let mut table = TranslationTable::new();
        table.load_json(Language::ENGLISH, r#"{ "a": "b" }"#).unwrap();
        let cx = LanguageContext::new(
            Arc::new(table),
            Arc::new(ResolutionMetrics::new()),
            Language::PERSIAN,
        );

        assert_eq!(cx.resolve("a"), "a");
    }

    #[test]
    fn test_resolve_digits() {
        let cx = context();
        let key = "portfolioPage.strategies.items.0.targetReturn";
        assert_eq!(cx.resolve_digits(key), "4-6%");

        cx.set_active_language(Language::PERSIAN);
        assert_eq!(cx.resolve_digits(key), "۴-۶%");
    }

    #[test]
    fn test_list_len() {
        let cx = context();
        assert_eq!(cx.list_len("hedging.process.steps"), 4);
        assert_eq!(cx.list_len("hedging.benefits.list"), 5);
        assert_eq!(cx.list_len("hedging.process.title"), 0);
        assert_eq!(cx.list_len("no.such.list"), 0);
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_resolve_is_idempotent(path in "[a-zA-Z0-9.]{0,24}", persian in any::<bool>()) {
            let cx = context();
            if persian {
                cx.set_active_language(Language::PERSIAN);
            }
            prop_assert_eq!(cx.resolve(&path), cx.resolve(&path));
        }

        #[test]
        fn prop_unknown_top_level_keys_echo(key in "zz[a-z]{1,10}(\\.[a-z]{1,8}){0,3}") {
            let cx = context();
            prop_assert_eq!(cx.resolve(&key), key.clone());
            cx.set_active_language(Language::PERSIAN);
            prop_assert_eq!(cx.resolve(&key), key);
        }
    }

    #[test]
    fn test_switching_language_keeps_path_validity() {
        let cx = context();
        let table = TranslationTable::embedded().unwrap();
        let english = table.root(Language::ENGLISH).unwrap();

        for (path, text) in english.leaves() {
            cx.set_active_language(Language::ENGLISH);
            assert_eq!(cx.resolve(&path), text);

            cx.set_active_language(Language::PERSIAN);
            assert_ne!(cx.resolve(&path), path, "'{}' has no Persian translation", path);
        }
    }
}
