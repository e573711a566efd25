//! Environment configuration for the in-memory backends.

use thiserror::Error;

/// Default first order id issued by [`InMemoryFulfillment`](crate::InMemoryFulfillment).
pub const DEFAULT_ORDER_ID_START: i64 = 1;

/// Default order number prefix (`ORD-000001`).
pub const DEFAULT_ORDER_NUMBER_PREFIX: &str = "ORD";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be an integer, got {value:?}")]
    NotAnInteger { name: &'static str, value: String },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: i64 },

    #[error("{name} must not be empty")]
    Empty { name: &'static str },
}

/// Settings for the in-memory fulfillment backend.
///
/// | variable | default |
/// |---|---|
/// | `ORDER_ID_START` | `1` |
/// | `ORDER_NUMBER_PREFIX` | `ORD` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfraConfig {
    pub order_id_start: i64,
    pub order_number_prefix: String,
}

impl Default for InfraConfig {
    fn default() -> Self {
        Self {
            order_id_start: DEFAULT_ORDER_ID_START,
            order_number_prefix: DEFAULT_ORDER_NUMBER_PREFIX.to_string(),
        }
    }
}

impl InfraConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup` (unset variables fall back to defaults).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup("ORDER_ID_START") {
            let value = raw.trim().parse::<i64>().map_err(|_| ConfigError::NotAnInteger {
                name: "ORDER_ID_START",
                value: raw.clone(),
            })?;
            if value <= 0 {
                return Err(ConfigError::NotPositive {
                    name: "ORDER_ID_START",
                    value,
                });
            }
            config.order_id_start = value;
        }

        if let Some(raw) = lookup("ORDER_NUMBER_PREFIX") {
            let prefix = raw.trim();
            if prefix.is_empty() {
                return Err(ConfigError::Empty {
                    name: "ORDER_NUMBER_PREFIX",
                });
            }
            config.order_number_prefix = prefix.to_string();
        }

        Ok(config)
    }
}
