//! Runtime configuration, read from a YAML file.
//!
//! ```yaml
//! log_filter: "info,actor_framework=debug"
//! actor_buffer: 64
//! restaurant_defaults:
//!   delivery_fee: 3.49
//!   minimum_order: 20.00
//! ```
//!
//! Every key is optional.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::{error::Error, fs};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RestaurantDefaults {
    pub delivery_fee: Decimal,
    pub minimum_order: Decimal,
}

impl Default for RestaurantDefaults {
    fn default() -> Self {
        Self {
            delivery_fee: Decimal::new(299, 2),
            minimum_order: Decimal::new(1500, 2),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MarketplaceConfig {
    /// Default `EnvFilter` directive; `RUST_LOG` takes precedence.
    pub log_filter: String,
    /// Channel capacity of every resource actor.
    pub actor_buffer: usize,
    pub restaurant_defaults: RestaurantDefaults,
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            actor_buffer: 32,
            restaurant_defaults: RestaurantDefaults::default(),
        }
    }
}

impl MarketplaceConfig {
    pub fn load(config_path: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let contents = fs::read_to_string(config_path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let config = serde_yml::from_str(contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = MarketplaceConfig::from_yaml_str("actor_buffer: 8\n").unwrap();
        assert_eq!(config.actor_buffer, 8);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.restaurant_defaults, RestaurantDefaults::default());
    }

    #[test]
    fn test_restaurant_defaults_parse_as_decimal() {
        let yaml = "restaurant_defaults:\n  delivery_fee: \"3.49\"\n";
        let config = MarketplaceConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.restaurant_defaults.delivery_fee, Decimal::new(349, 2));
        assert_eq!(config.restaurant_defaults.minimum_order, Decimal::new(1500, 2));
    }

    #[test]
    fn test_load_reports_missing_file() {
        assert!(MarketplaceConfig::load("/nonexistent/marketplace.yaml").is_err());
    }
}
