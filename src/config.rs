use crate::i18n::Language;
use anyhow::{Context, Result};
use chrono::Duration;

const DEFAULT_SESSION_TTL_MINUTES: i64 = 60;

/// Longest accepted session TTL: one year.
pub const MAX_SESSION_TTL_MINUTES: i64 = 525_600;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Sessions
    pub default_language: Language,
    pub session_ttl_minutes: i64,

    // Admin endpoints
    pub admin_api_key: Option<String>,

    // Translations
    pub strict_translations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_language = match std::env::var("DEFAULT_LANGUAGE") {
            Ok(code) => Language::from_code(code.trim())
                .with_context(|| format!("DEFAULT_LANGUAGE '{}' is not supported", code))?,
            Err(_) => Language::canonical(),
        };

        Ok(Self {
            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            // Sessions
            default_language,
            session_ttl_minutes: std::env::var("SESSION_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|minutes: &i64| (1..=MAX_SESSION_TTL_MINUTES).contains(minutes))
                .unwrap_or(DEFAULT_SESSION_TTL_MINUTES),

            // Admin endpoints (disabled check when unset or empty)
            admin_api_key: std::env::var("ADMIN_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),

            // Translations
            strict_translations: std::env::var("STRICT_TRANSLATIONS")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }

    /// Idle time after which a session is dropped.
    pub fn session_ttl(&self) -> Duration {
        Duration::try_minutes(self.session_ttl_minutes)
            .unwrap_or_else(|| Duration::minutes(DEFAULT_SESSION_TTL_MINUTES))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "PORT",
        "DEFAULT_LANGUAGE",
        "SESSION_TTL_MINUTES",
        "ADMIN_API_KEY",
        "STRICT_TRANSLATIONS",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.default_language, Language::ENGLISH);
        assert_eq!(config.session_ttl_minutes, 60);
        assert_eq!(config.admin_api_key, None);
        assert!(!config.strict_translations);
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("PORT", "3000");
        std::env::set_var("DEFAULT_LANGUAGE", "fa");
        std::env::set_var("SESSION_TTL_MINUTES", "15");
        std::env::set_var("ADMIN_API_KEY", "secret");
        std::env::set_var("STRICT_TRANSLATIONS", "true");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.port, 3000);
        assert_eq!(config.default_language, Language::PERSIAN);
        assert_eq!(config.session_ttl_minutes, 15);
        assert_eq!(config.admin_api_key.as_deref(), Some("secret"));
        assert!(config.strict_translations);
    }

    #[test]
    #[serial]
    fn test_invalid_numbers_fall_back_to_defaults() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        std::env::set_var("SESSION_TTL_MINUTES", "0");
        std::env::set_var("ADMIN_API_KEY", "");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.port, 8080);
        assert_eq!(config.session_ttl_minutes, 60);
        assert_eq!(config.admin_api_key, None);
    }

    #[test]
    #[serial]
    fn test_session_ttl_out_of_range_falls_back_to_default() {
        for value in ["9223372036854775807", "525601", "-5"] {
            clear_env();
            std::env::set_var("SESSION_TTL_MINUTES", value);

            let config = Config::from_env().unwrap();
            clear_env();

            assert_eq!(config.session_ttl_minutes, 60, "{} should be rejected", value);
            assert_eq!(config.session_ttl(), Duration::minutes(60));
        }
    }

    #[test]
    #[serial]
    fn test_session_ttl_upper_bound_is_accepted() {
        clear_env();
        std::env::set_var("SESSION_TTL_MINUTES", "525600");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.session_ttl_minutes, MAX_SESSION_TTL_MINUTES);
        assert_eq!(config.session_ttl(), Duration::days(365));
    }

    #[test]
    fn test_session_ttl_never_panics_on_hand_built_config() {
        let config = Config {
            port: 0,
            default_language: Language::ENGLISH,
            session_ttl_minutes: i64::MAX,
            admin_api_key: None,
            strict_translations: false,
        };

        assert_eq!(config.session_ttl(), Duration::minutes(60));
    }

    #[test]
    #[serial]
    fn test_unsupported_default_language_is_error() {
        clear_env();
        std::env::set_var("DEFAULT_LANGUAGE", "de");

        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
    }
}
