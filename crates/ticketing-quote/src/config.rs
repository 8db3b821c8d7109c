//! # Pricing Configuration
//!
//! Configuration for the quote service.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TICKETING_CURRENCY=NGN                                             │
//! │     TICKETING_REJECT_UNKNOWN_CODES=false                               │
//! │     TICKETING_LOG_LEVEL=debug                                          │
//! │                                                                         │
//! │  2. TOML Config File (--config PATH)                                   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     USD, reject unknown codes, info logging                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [pricing]
//! currency = "NGN"
//! reject_unknown_codes = true
//!
//! [logging]
//! level = "debug"
//! json = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{QuoteError, QuoteResult};

/// Log levels accepted in `[logging] level`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

// =============================================================================
// Pricing Settings
// =============================================================================

/// Pricing behavior settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingSettings {
    /// ISO 4217 code echoed in quotes. All amounts are minor units of it.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Fail the quote when the promo code is not in the catalog.
    /// When false, the order is priced without a discount.
    #[serde(default = "default_true")]
    pub reject_unknown_codes: bool,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for PricingSettings {
    fn default() -> Self {
        PricingSettings {
            currency: default_currency(),
            reject_unknown_codes: default_true(),
        }
    }
}

// =============================================================================
// Logging Settings
// =============================================================================

/// Logging output settings. `RUST_LOG` overrides `level` when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit newline-delimited JSON instead of human-readable lines.
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: default_log_level(),
            json: false,
        }
    }
}

// =============================================================================
// Pricing Config
// =============================================================================

/// Full configuration for the quote service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub pricing: PricingSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl PricingConfig {
    /// Loads configuration: file (if given and present), then environment,
    /// then validation.
    ///
    /// Runs before tracing is initialised, so problems surface as errors
    /// rather than log events.
    pub fn load(config_path: Option<&Path>) -> QuoteResult<Self> {
        let mut config = match config_path {
            Some(path) if path.exists() => Self::from_toml(&std::fs::read_to_string(path)?)?,
            _ => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document. Missing sections fall back to defaults.
    pub fn from_toml(contents: &str) -> QuoteResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Checks values that serde cannot.
    pub fn validate(&self) -> QuoteResult<()> {
        let currency = &self.pricing.currency;
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(QuoteError::InvalidConfig(format!(
                "currency must be a 3-letter uppercase ISO 4217 code, got: '{}'",
                currency
            )));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(QuoteError::InvalidConfig(format!(
                "Unknown log level: '{}'. Valid options: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Applies `TICKETING_*` overrides from `lookup`.
    ///
    /// `load` passes the process environment; tests pass a map.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> QuoteResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(currency) = lookup("TICKETING_CURRENCY") {
            self.pricing.currency = currency.trim().to_ascii_uppercase();
        }

        if let Some(reject) = lookup("TICKETING_REJECT_UNKNOWN_CODES") {
            self.pricing.reject_unknown_codes = match reject.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => {
                    return Err(QuoteError::InvalidConfig(format!(
                        "TICKETING_REJECT_UNKNOWN_CODES must be true/false, got: '{}'",
                        reject
                    )))
                }
            };
        }

        if let Some(level) = lookup("TICKETING_LOG_LEVEL") {
            self.logging.level = level.trim().to_lowercase();
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = PricingConfig::default();
        assert_eq!(config.pricing.currency, "USD");
        assert!(config.pricing.reject_unknown_codes);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = PricingConfig::from_toml(
            r#"
            [pricing]
            currency = "NGN"
            "#,
        )
        .unwrap();
        assert_eq!(config.pricing.currency, "NGN");
        assert!(config.pricing.reject_unknown_codes);
        assert_eq!(config.logging, LoggingSettings::default());
    }

    #[test]
    fn test_from_toml_invalid() {
        let err = PricingConfig::from_toml("[pricing]\ncurrency = 5").unwrap_err();
        assert!(matches!(err, QuoteError::ConfigParse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = PricingConfig::default();
        config.apply_env_overrides(env(&[
            ("TICKETING_CURRENCY", " ngn "),
            ("TICKETING_REJECT_UNKNOWN_CODES", "false"),
            ("TICKETING_LOG_LEVEL", "DEBUG"),
        ]))
        .unwrap();
        assert_eq!(config.pricing.currency, "NGN");
        assert!(!config.pricing.reject_unknown_codes);
        assert_eq!(config.logging.level, "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_override_rejects_unknown_bool() {
        let mut config = PricingConfig::default();
        let err = config
            .apply_env_overrides(env(&[("TICKETING_REJECT_UNKNOWN_CODES", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, QuoteError::InvalidConfig(ref msg) if msg.contains("maybe")));
        assert!(config.pricing.reject_unknown_codes);
    }

    #[test]
    fn test_env_override_accepts_bool_spellings() {
        for (value, expected) in [("YES", true), ("0", false), (" no ", false), ("1", true)] {
            let mut config = PricingConfig::default();
            config
                .apply_env_overrides(env(&[("TICKETING_REJECT_UNKNOWN_CODES", value)]))
                .unwrap();
            assert_eq!(config.pricing.reject_unknown_codes, expected, "{}", value);
        }
    }

    #[test]
    fn test_validation() {
        let mut config = PricingConfig::default();
        config.pricing.currency = "usd".to_string();
        assert!(config.validate().is_err());

        config.pricing.currency = "EURO".to_string();
        assert!(config.validate().is_err());

        config.pricing.currency = "EUR".to_string();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip_sections() {
        let toml_str = toml::to_string_pretty(&PricingConfig::default()).unwrap();
        assert!(toml_str.contains("[pricing]"));
        assert!(toml_str.contains("[logging]"));
    }
}
