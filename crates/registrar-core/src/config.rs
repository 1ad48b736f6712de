//! Configuration for the registrar
//!
//! TigerStyle: Explicit defaults, validation, reasonable limits.

use crate::constants::*;
use crate::error::{RegistrarError, RegistrarResult};
use crate::telemetry::TelemetryConfig;
use serde::{Deserialize, Serialize};

/// Main configuration for a registrar instance
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrarConfig {
    /// Store backend configuration
    #[serde(default)]
    pub store: StoreConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl RegistrarConfig {
    /// Validate the configuration
    pub fn validate(&self) -> RegistrarResult<()> {
        self.store.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}

/// Store backend type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// In-memory dual index (contents lost on drop)
    #[default]
    Memory,
}

/// Store backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Storage backend type
    #[serde(default)]
    pub backend: StoreBackend,

    /// Capacity hint for both indexes
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

fn default_initial_capacity() -> usize {
    STORE_INITIAL_CAPACITY_DEFAULT
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Memory,
            initial_capacity: default_initial_capacity(),
        }
    }
}

impl StoreConfig {
    fn validate(&self) -> RegistrarResult<()> {
        if self.initial_capacity > STORE_INITIAL_CAPACITY_MAX {
            return Err(RegistrarError::InvalidConfiguration {
                field: "store.initial_capacity".into(),
                reason: format!(
                    "{} exceeds limit {}",
                    self.initial_capacity, STORE_INITIAL_CAPACITY_MAX
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RegistrarConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.store.backend, StoreBackend::Memory);
    }

    #[test]
    fn test_capacity_over_limit() {
        let mut config = RegistrarConfig::default();
        config.store.initial_capacity = STORE_INITIAL_CAPACITY_MAX + 1;
        assert!(matches!(
            config.validate(),
            Err(RegistrarError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_deserialize_partial() {
        let json = r#"{"store": {"backend": "memory", "initial_capacity": 64}}"#;
        let config: RegistrarConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.store.initial_capacity, 64);
        assert_eq!(config.telemetry.log_level, TELEMETRY_LOG_LEVEL_DEFAULT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_unknown_backend() {
        let json = r#"{"store": {"backend": "foundationdb"}}"#;
        assert!(serde_json::from_str::<RegistrarConfig>(json).is_err());
    }
}
