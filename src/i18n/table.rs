//! Translation table: one tree of localized strings per language.
//!
//! Each tree is a strongly-typed set of tagged nodes (`Branch`, `List`,
//! `Leaf`) parsed from the locale JSON files embedded at compile time.
//! Lookups walk a dot-delimited key path; numeric segments index lists.

use crate::i18n::{Language, LanguageRegistry};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Locale sources compiled into the binary, keyed by language code.
const EMBEDDED_LOCALES: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.json")),
    ("fa", include_str!("../../locales/fa.json")),
];

/// A node of a translation tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TranslationNode {
    /// A final localized string
    Leaf(String),
    /// An ordered dataset (e.g. process steps, list items)
    List(Vec<TranslationNode>),
    /// A named group of child nodes
    Branch(BTreeMap<String, TranslationNode>),
}

/// Why a key path did not resolve to a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("segment '{segment}' not found")]
    Missing { segment: String },

    #[error("path does not resolve to a string")]
    NotALeaf,
}

impl TranslationNode {
    /// Get a direct child by key (branches) or index (lists).
    ///
    /// List indices must be canonical decimal integers: `"01"` and `"+1"`
    /// are treated as missing keys.
    pub fn child(&self, segment: &str) -> Option<&TranslationNode> {
        match self {
            TranslationNode::Branch(children) => children.get(segment),
            TranslationNode::List(items) => parse_index(segment).and_then(|i| items.get(i)),
            TranslationNode::Leaf(_) => None,
        }
    }

    /// Walk a dot-delimited key path and return the node it names.
    pub fn node_at(&self, key_path: &str) -> Result<&TranslationNode, LookupError> {
        let mut node = self;
        for segment in key_path.split('.') {
            node = node.child(segment).ok_or_else(|| LookupError::Missing {
                segment: segment.to_string(),
            })?;
        }
        Ok(node)
    }

    /// Walk a dot-delimited key path and return the leaf string it names.
    pub fn lookup(&self, key_path: &str) -> Result<&str, LookupError> {
        match self.node_at(key_path)? {
            TranslationNode::Leaf(text) => Ok(text),
            _ => Err(LookupError::NotALeaf),
        }
    }

    /// Every leaf below this node as `(key_path, text)` pairs, in key order.
    pub fn leaves(&self) -> Vec<(String, &str)> {
        let mut out = Vec::new();
        collect_leaves(self, String::new(), &mut out);
        out
    }
}

fn parse_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));

    if canonical {
        segment.parse().ok()
    } else {
        None
    }
}

fn collect_leaves<'a>(node: &'a TranslationNode, prefix: String, out: &mut Vec<(String, &'a str)>) {
    let join = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", prefix, key)
        }
    };

    match node {
        TranslationNode::Leaf(text) => out.push((prefix.clone(), text.as_str())),
        TranslationNode::List(items) => {
            for (i, item) in items.iter().enumerate() {
                collect_leaves(item, join(&i.to_string()), out);
            }
        }
        TranslationNode::Branch(children) => {
            for (key, child) in children {
                collect_leaves(child, join(key), out);
            }
        }
    }
}

/// Translation trees for every loaded language.
///
/// Immutable once built; sessions share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    roots: HashMap<&'static str, TranslationNode>,
}

impl TranslationTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the locale files compiled into the binary.
    ///
    /// Every enabled language in the registry must have an embedded locale.
    pub fn embedded() -> Result<Self> {
        let mut table = Self::new();

        for config in LanguageRegistry::get().list_enabled() {
            let source = EMBEDDED_LOCALES
                .iter()
                .find(|(code, _)| *code == config.code)
                .map(|(_, source)| *source)
                .with_context(|| format!("No embedded locale for language '{}'", config.code))?;

            let language = Language::from_code(config.code)?;
            table.load_json(language, source)?;
        }

        Ok(table)
    }

    /// Parse a locale JSON document and install it as the tree for `language`.
    ///
    /// The document root must be an object.
    pub fn load_json(&mut self, language: Language, source: &str) -> Result<()> {
        let root: TranslationNode = serde_json::from_str(source)
            .with_context(|| format!("Failed to parse locale for '{}'", language.code()))?;

        if !matches!(root, TranslationNode::Branch(_)) {
            anyhow::bail!("Locale for '{}' must be a JSON object", language.code());
        }

        self.insert(language, root);
        Ok(())
    }

    /// Install (or replace) the tree for a language.
    pub fn insert(&mut self, language: Language, root: TranslationNode) {
        self.roots.insert(language.code(), root);
    }

    /// The tree for a language, if one was loaded.
    pub fn root(&self, language: Language) -> Option<&TranslationNode> {
        self.roots.get(language.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TranslationNode {
        serde_json::from_str(
            r#"{
                "nav": { "home": "Home" },
                "steps": [ { "title": "First" }, { "title": "Second" } ],
                "list": [ "a", "b" ]
            }"#,
        )
        .expect("sample should parse")
    }

    // ==================== Deserialization Tests ====================

    #[test]
    fn test_untagged_variants() {
        let root = sample();
        assert!(matches!(root, TranslationNode::Branch(_)));
        assert!(matches!(root.child("steps"), Some(TranslationNode::List(_))));
        assert!(matches!(
            root.node_at("nav.home"),
            Ok(TranslationNode::Leaf(_))
        ));
    }

    #[test]
    fn test_numbers_are_rejected() {
        let result: Result<TranslationNode, _> = serde_json::from_str(r#"{ "count": 3 }"#);
        assert!(result.is_err());
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_lookup_leaf() {
        assert_eq!(sample().lookup("nav.home"), Ok("Home"));
    }

    #[test]
    fn test_lookup_list_index() {
        let root = sample();
        assert_eq!(root.lookup("steps.1.title"), Ok("Second"));
        assert_eq!(root.lookup("list.0"), Ok("a"));
    }

    #[test]
    fn test_lookup_missing_segment() {
        assert_eq!(
            sample().lookup("nav.doesNotExist"),
            Err(LookupError::Missing {
                segment: "doesNotExist".to_string()
            })
        );
    }

    #[test]
    fn test_lookup_through_leaf_fails() {
        assert_eq!(
            sample().lookup("nav.home.extra"),
            Err(LookupError::Missing {
                segment: "extra".to_string()
            })
        );
    }

    #[test]
    fn test_lookup_branch_is_not_a_leaf() {
        assert_eq!(sample().lookup("nav"), Err(LookupError::NotALeaf));
        assert_eq!(sample().lookup("steps"), Err(LookupError::NotALeaf));
    }

    #[test]
    fn test_lookup_rejects_non_canonical_indices() {
        let root = sample();
        assert!(root.lookup("list.01").is_err());
        assert!(root.lookup("list.+1").is_err());
        assert!(root.lookup("list.-1").is_err());
        assert!(root.lookup("list.2").is_err());
    }

    #[test]
    fn test_lookup_empty_and_malformed_paths() {
        let root = sample();
        assert!(root.lookup("").is_err());
        assert!(root.lookup("nav.").is_err());
        assert!(root.lookup(".nav.home").is_err());
        assert!(root.lookup("nav..home").is_err());
    }

    // ==================== Leaves Tests ====================

    #[test]
    fn test_leaves_are_flattened_with_paths() {
        let root = sample();
        let leaves = root.leaves();
        let paths: Vec<_> = leaves.iter().map(|(path, _)| path.as_str()).collect();

        assert_eq!(
            paths,
            vec!["list.0", "list.1", "nav.home", "steps.0.title", "steps.1.title"]
        );
        for (path, text) in &leaves {
            assert_eq!(root.lookup(path), Ok(*text));
        }
    }

    // ==================== Table Tests ====================

    #[test]
    fn test_embedded_table_loads_both_languages() {
        let table = TranslationTable::embedded().expect("embedded locales should parse");
        assert!(table.root(Language::ENGLISH).is_some());
        assert!(table.root(Language::PERSIAN).is_some());
    }

    #[test]
    fn test_load_json_rejects_non_object_root() {
        let mut table = TranslationTable::new();
        assert!(table.load_json(Language::ENGLISH, r#"["a"]"#).is_err());
        assert!(table.load_json(Language::ENGLISH, "not json").is_err());
        assert!(table.root(Language::ENGLISH).is_none());
    }

    #[test]
    fn test_insert_replaces_tree() {
        let mut table = TranslationTable::new();
        table
            .load_json(Language::PERSIAN, r#"{ "a": "1" }"#)
            .unwrap();
        table
            .load_json(Language::PERSIAN, r#"{ "a": "2" }"#)
            .unwrap();

        let root = table.root(Language::PERSIAN).unwrap();
        assert_eq!(root.lookup("a"), Ok("2"));
    }
}
