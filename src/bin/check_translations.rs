//! Translation check binary - compares every locale against the canonical one
//!
//! Usage:
//!   cargo run --bin check-translations                    # Check the embedded locales
//!   cargo run --bin check-translations -- locales         # Check <dir>/<code>.json on disk
//!   cargo run --bin check-translations -- --deny-warnings # Also fail on warnings
//!
//! Exits with status 1 when errors (or, with --deny-warnings, warnings) are found.

use anyhow::{Context, Result};
use sib_site::i18n::{Language, LanguageRegistry, TranslationTable, TranslationValidator};
use std::path::Path;

fn load_dir(dir: &Path) -> Result<TranslationTable> {
    let mut table = TranslationTable::new();

    for config in LanguageRegistry::get().list_all() {
        if !config.enabled {
            println!("  (skipping disabled language {})", config.code);
            continue;
        }

        let path = dir.join(format!("{}.json", config.code));
        if !path.exists() {
            println!("  (no locale file at {})", path.display());
            continue;
        }

        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        table.load_json(Language::from_code(config.code)?, &source)?;
    }

    Ok(table)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let deny_warnings = args.iter().any(|arg| arg == "--deny-warnings");
    let dir = args.iter().find(|arg| !arg.starts_with("--"));

    let table = match dir {
        Some(dir) => {
            println!("Checking locale files in {}", dir);
            load_dir(Path::new(dir))?
        }
        None => {
            println!("Checking embedded locales");
            TranslationTable::embedded()?
        }
    };

    let report = TranslationValidator::check_table(&table);

    println!("\n========================================");
    println!("  TRANSLATION CHECK");
    println!("========================================");
    for config in LanguageRegistry::get().list_enabled() {
        let language = Language::from_code(config.code)?;
        let role = if language.is_canonical() { "canonical" } else { "checked" };
        let loaded = if table.root(language).is_some() { "" } else { " (missing)" };
        println!("  {} [{}] {}{}", language.name(), language, role, loaded);
    }
    println!("----------------------------------------");
    for error in &report.errors {
        println!("  ✗ {}", error);
    }
    for warning in &report.warnings {
        println!("  ! {}", warning);
    }
    println!("----------------------------------------");
    println!("  Errors:   {}", report.errors.len());
    println!("  Warnings: {}", report.warnings.len());
    println!("========================================\n");

    if report.is_clean() {
        println!("All locales match the canonical language.\n");
    } else if report.has_errors() || (deny_warnings && report.has_warnings()) {
        std::process::exit(1);
    }

    Ok(())
}
