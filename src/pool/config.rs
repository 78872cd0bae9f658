//! Pool configuration.

use super::error::PoolError;
use serde::{Deserialize, Serialize};

/// Capacity used when a configuration does not name one.
pub const DEFAULT_CAPACITY: usize = 3;

/// Settings fixed at pool construction.
///
/// Missing fields fall back to [`PoolConfig::default`].
///
/// # Example
///
/// ```rust
/// use waypoint::pool::PoolConfig;
///
/// let config = PoolConfig::from_json(r#"{ "name": "printers" }"#).unwrap();
/// assert_eq!(config.name, "printers");
/// assert_eq!(config.capacity, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Name used in errors and log events
    pub name: String,
    /// Number of resources, fixed for the pool's lifetime
    pub capacity: usize,
}

impl PoolConfig {
    pub fn new(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, PoolError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PoolError> {
        if self.capacity == 0 {
            return Err(PoolError::InvalidCapacity {
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_holds_three_resources() {
        let config = PoolConfig::default();
        assert_eq!(config.name, "default");
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_json_reads_all_fields() {
        let config = PoolConfig::from_json(r#"{ "name": "gpus", "capacity": 8 }"#).unwrap();
        assert_eq!(config, PoolConfig::new("gpus", 8));
    }

    #[test]
    fn from_json_rejects_zero_capacity() {
        let result = PoolConfig::from_json(r#"{ "capacity": 0 }"#);
        assert!(matches!(
            result,
            Err(PoolError::InvalidCapacity { capacity: 0 })
        ));
    }

    #[test]
    fn from_json_reports_malformed_input() {
        let result = PoolConfig::from_json(r#"{ "capacity": "many" }"#);
        assert!(matches!(result, Err(PoolError::Config(_))));
    }
}
