use serde::Deserialize;
use std::path::Path;

use rust_decimal::Decimal;

use crate::domain::odds::OddsFormat;
use crate::error::{ConfigError, Result};

/// Application configuration: form defaults and logging.
///
/// The config file is optional. When it is absent the built-in defaults
/// apply, which match the pre-filled values of the stake form.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub defaults: FormDefaults,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Pre-filled values for the stake form and the `stake` command.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormDefaults {
    #[serde(default = "FormDefaults::default_bankroll")]
    pub bankroll: Decimal,
    #[serde(default)]
    pub odds_format: OddsFormat,
    #[serde(default = "FormDefaults::default_odds")]
    pub odds: Decimal,
    #[serde(default = "FormDefaults::default_win_probability")]
    pub win_probability: Decimal,
}

impl FormDefaults {
    fn default_bankroll() -> Decimal {
        Decimal::ONE_THOUSAND
    }

    fn default_odds() -> Decimal {
        Decimal::from(200)
    }

    fn default_win_probability() -> Decimal {
        Decimal::from(55)
    }
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            bankroll: Self::default_bankroll(),
            odds_format: OddsFormat::American,
            odds: Self::default_odds(),
            win_probability: Self::default_win_probability(),
        }
    }
}

/// Logging output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".into()
    }

    fn default_format() -> String {
        "pretty".into()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            format: Self::default_format(),
        }
    }
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["pretty", "json"];

impl Config {
    /// Load and validate a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::from_toml(&content)
    }

    /// Load a config file if it exists, otherwise fall back to defaults.
    ///
    /// A file that exists but fails to parse or validate is still an error;
    /// only absence is forgiven.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate config TOML.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            source,
            src: content.to_string(),
        })?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.defaults.bankroll <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "defaults.bankroll",
                reason: format!("must be positive, got {}", self.defaults.bankroll),
            }
            .into());
        }

        if self.defaults.win_probability < Decimal::ZERO
            || self.defaults.win_probability > Decimal::ONE_HUNDRED
        {
            return Err(ConfigError::InvalidValue {
                field: "defaults.win_probability",
                reason: format!(
                    "must be between 0 and 100, got {}",
                    self.defaults.win_probability
                ),
            }
            .into());
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: format!(
                    "expected one of {}, got {:?}",
                    LOG_LEVELS.join(", "),
                    self.logging.level
                ),
            }
            .into());
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!(
                    "expected one of {}, got {:?}",
                    LOG_FORMATS.join(", "),
                    self.logging.format
                ),
            }
            .into());
        }

        Ok(())
    }

    /// Initialize the tracing subscriber from the logging settings.
    ///
    /// `RUST_LOG` takes precedence over the configured level. Repeated calls
    /// (tests) are harmless.
    pub fn init_logging(&self) {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&self.logging.level));

        let builder = tracing_subscriber::fmt().with_env_filter(filter);

        let _ = if self.logging.format == "json" {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: FormDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_match_the_stake_form() {
        let config = Config::default();
        assert_eq!(config.defaults.bankroll, dec!(1000));
        assert_eq!(config.defaults.odds, dec!(200));
        assert_eq!(config.defaults.odds_format, OddsFormat::American);
        assert_eq!(config.defaults.win_probability, dec!(55));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn parses_full_config() {
        let config = Config::from_toml(
            r#"
            [defaults]
            bankroll = 250.0
            odds_format = "decimal"
            odds = 2.5
            win_probability = 48.0

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.defaults.bankroll, dec!(250));
        assert_eq!(config.defaults.odds_format, OddsFormat::Decimal);
        assert_eq!(config.defaults.odds, dec!(2.5));
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let config = Config::from_toml(
            r#"
            [defaults]
            bankroll = 500.0
            "#,
        )
        .unwrap();

        assert_eq!(config.defaults.bankroll, dec!(500));
        assert_eq!(config.defaults.odds, dec!(200));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.defaults.bankroll, dec!(1000));
    }

    #[test]
    fn rejects_non_positive_bankroll() {
        let err = Config::from_toml("[defaults]\nbankroll = 0.0\n").unwrap_err();
        assert!(err.to_string().contains("defaults.bankroll"));
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let err = Config::from_toml("[defaults]\nwin_probability = 120.0\n").unwrap_err();
        assert!(err.to_string().contains("defaults.win_probability"));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = Config::from_toml("[logging]\nlevel = \"loud\"\n").unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = Config::from_toml("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(err.to_string().contains("logging.format"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = Config::from_toml("[network]\nws_url = \"wss://example\"\n").unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn load_or_default_forgives_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.defaults.bankroll, dec!(1000));
    }

    #[test]
    fn load_or_default_still_rejects_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nformat = \"xml\"\n").unwrap();

        assert!(Config::load_or_default(&path).is_err());
    }
}
