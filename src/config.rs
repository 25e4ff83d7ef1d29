//! Site configuration
//!
//! Loaded from an optional JSON file, then overridden by environment variables:
//! - `MORTGAGE_CONFIG` - path to a JSON config file
//! - `MORTGAGE_CURRENCY` - currency code shown after loan figures
//! - `MORTGAGE_PRODUCT_FILE` - JSON file holding the showcased product
//!
//! The 40% eligibility threshold is fixed policy and deliberately not here.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::product::{FileProductSource, ProductSource, UnconfiguredProductSource};

pub const CONFIG_PATH_VAR: &str = "MORTGAGE_CONFIG";
pub const CURRENCY_VAR: &str = "MORTGAGE_CURRENCY";
pub const PRODUCT_FILE_VAR: &str = "MORTGAGE_PRODUCT_FILE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Currency code appended to formatted loan amounts
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Product catalog entry to showcase; none means the product panel fails
    #[serde(default)]
    pub product_file: Option<PathBuf>,
}

fn default_currency() -> String {
    "INR".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            product_file: None,
        }
    }
}

impl SiteConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Config file named by `MORTGAGE_CONFIG` (if any), then env overrides
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };
        if let Some(currency) = lookup(CURRENCY_VAR) {
            config.currency = currency;
        }
        if let Some(path) = lookup(PRODUCT_FILE_VAR) {
            config.product_file = Some(PathBuf::from(path));
        }
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.currency.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "currency",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Product source implied by this config
    pub fn product_source(&self) -> Box<dyn ProductSource> {
        match &self.product_file {
            Some(path) => Box::new(FileProductSource::new(path)),
            None => Box::new(UnconfiguredProductSource),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.currency, "INR");
        assert!(config.product_file.is_none());
    }

    #[test]
    fn test_json_fields() {
        let config =
            SiteConfig::from_json_str(r#"{"currency": "USD", "productFile": "/srv/product.json"}"#).unwrap();
        assert_eq!(config.currency, "USD");
        assert_eq!(config.product_file, Some(PathBuf::from("/srv/product.json")));
    }

    #[test]
    fn test_empty_currency_rejected() {
        let err = SiteConfig::from_json_str(r#"{"currency": "  "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "currency", .. }));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> =
            [(CURRENCY_VAR, "AED"), (PRODUCT_FILE_VAR, "/tmp/p.json")].into_iter().collect();
        let config = SiteConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.currency, "AED");
        assert_eq!(config.product_file, Some(PathBuf::from("/tmp/p.json")));
    }

    #[test]
    fn test_missing_config_file() {
        let result = SiteConfig::from_lookup(|k| {
            (k == CONFIG_PATH_VAR).then(|| "/nonexistent/mortgage.json".to_string())
        });
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
