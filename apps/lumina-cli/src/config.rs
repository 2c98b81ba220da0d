//! # CLI Configuration
//!
//! Settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--tax-rate`)
//! 2. Environment variables (`LUMINA_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after startup.

use lumina_core::validation::parse_tax_percentage;
use lumina_core::{TaxRate, ValidationError, DEFAULT_GST_RATE};

/// Environment variable holding the GST percentage, e.g. `18`.
pub const ENV_GST_RATE: &str = "LUMINA_GST_RATE";

/// Environment variable holding the currency symbol for plain-text output.
pub const ENV_CURRENCY_SYMBOL: &str = "LUMINA_CURRENCY_SYMBOL";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// GST applied to every invoice.
    pub tax_rate: TaxRate,

    /// Printed before amounts in plain-text output.
    pub currency_symbol: String,
}

impl Default for CliConfig {
    /// - GST: 18%
    /// - Currency symbol: "Rs" (as on the printed invoice)
    fn default() -> Self {
        CliConfig {
            tax_rate: DEFAULT_GST_RATE,
            currency_symbol: "Rs".to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CliConfig::default();

        if let Some(rate) = lookup(ENV_GST_RATE) {
            config.tax_rate = parse_rate(ENV_GST_RATE, &rate)?;
        }

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            let symbol = symbol.trim();
            if !symbol.is_empty() {
                config.currency_symbol = symbol.to_string();
            }
        }

        Ok(config)
    }

    /// Replaces the tax rate with a `--tax-rate` flag value.
    pub fn with_tax_rate_override(mut self, flag: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(rate) = flag {
            self.tax_rate = parse_rate("--tax-rate", rate)?;
        }
        Ok(self)
    }
}

fn parse_rate(source: &str, value: &str) -> Result<TaxRate, ConfigError> {
    parse_tax_percentage(value).map_err(|reason| ConfigError::InvalidValue {
        source_name: source.to_string(),
        reason,
    })
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {source_name}: {reason}")]
    InvalidValue {
        source_name: String,
        reason: ValidationError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CliConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.tax_rate.bps(), 1800);
        assert_eq!(config.currency_symbol, "Rs");
    }

    #[test]
    fn test_env_overrides() {
        let config = CliConfig::from_lookup(lookup_from(&[
            (ENV_GST_RATE, "12"),
            (ENV_CURRENCY_SYMBOL, "₹"),
        ]))
        .unwrap();
        assert_eq!(config.tax_rate.bps(), 1200);
        assert_eq!(config.currency_symbol, "₹");
    }

    #[test]
    fn test_blank_symbol_keeps_default() {
        let config = CliConfig::from_lookup(lookup_from(&[(ENV_CURRENCY_SYMBOL, "  ")])).unwrap();
        assert_eq!(config.currency_symbol, "Rs");
    }

    #[test]
    fn test_invalid_rate_is_rejected() {
        let err = CliConfig::from_lookup(lookup_from(&[(ENV_GST_RATE, "abc")])).unwrap_err();
        assert!(err.to_string().starts_with("Invalid value for LUMINA_GST_RATE"));

        let err = CliConfig::from_lookup(lookup_from(&[(ENV_GST_RATE, "250")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                reason: ValidationError::OutOfRange { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_flag_override() {
        let config = CliConfig::default()
            .with_tax_rate_override(Some("5"))
            .unwrap();
        assert_eq!(config.tax_rate.bps(), 500);

        let unchanged = CliConfig::default().with_tax_rate_override(None).unwrap();
        assert_eq!(unchanged.tax_rate, DEFAULT_GST_RATE);

        assert!(CliConfig::default()
            .with_tax_rate_override(Some("-2"))
            .is_err());
    }
}
