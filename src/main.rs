use anyhow::Result;
use sib_site::config::Config;
use sib_site::i18n::{TranslationTable, TranslationValidator};
use sib_site::server;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sib_site=info".parse()?)
        )
        .init();

    info!("Starting Sib site");

    let config = Config::from_env()?;
    let table = TranslationTable::embedded()?;

    let report = TranslationValidator::check_table(&table);
    for warning in &report.warnings {
        warn!("Translation: {}", warning);
    }
    for error in &report.errors {
        warn!("Translation error: {}", error);
    }
    if report.has_errors() && config.strict_translations {
        anyhow::bail!(
            "{} translation error(s) with STRICT_TRANSLATIONS enabled",
            report.errors.len()
        );
    }
    if report.is_clean() {
        info!("Translations checked: all locales match");
    } else {
        info!(
            "Translations checked: {} error(s), {} warning(s)",
            report.errors.len(),
            report.warnings.len()
        );
    }

    info!(
        "Default language: {} ({}), session TTL: {} min",
        config.default_language.name(),
        config.default_language,
        config.session_ttl_minutes
    );

    server::serve(config, table).await
}
