//! Logging infrastructure
//!
//! Installs a `tracing` subscriber with an env filter and an optional
//! stdout layer. Library code only emits events; binaries and tests that
//! embed the registrar decide whether to install a subscriber.

use crate::constants::{TELEMETRY_LOG_LEVEL_DEFAULT, TELEMETRY_SERVICE_NAME_DEFAULT};
use crate::error::{RegistrarError, RegistrarResult};
use serde::{Deserialize, Serialize};

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Service name attached to the startup event
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// Log level filter, used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Whether to output logs to stdout
    #[serde(default = "default_stdout_enabled")]
    pub stdout_enabled: bool,
}

fn default_service_name() -> String {
    TELEMETRY_SERVICE_NAME_DEFAULT.to_string()
}

fn default_log_level() -> String {
    TELEMETRY_LOG_LEVEL_DEFAULT.to_string()
}

fn default_stdout_enabled() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_level: default_log_level(),
            stdout_enabled: default_stdout_enabled(),
        }
    }
}

impl TelemetryConfig {
    /// Create a new configuration with the given service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Set the log level filter
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Disable stdout logging
    pub fn without_stdout(mut self) -> Self {
        self.stdout_enabled = false;
        self
    }

    /// Create from environment variables
    ///
    /// Reads:
    /// - `REGISTRAR_SERVICE_NAME`: Service name (default: "registrar")
    /// - `RUST_LOG`: Log level filter (default: "info")
    pub fn from_env() -> Self {
        let service_name = std::env::var("REGISTRAR_SERVICE_NAME")
            .unwrap_or_else(|_| TELEMETRY_SERVICE_NAME_DEFAULT.to_string());

        let log_level =
            std::env::var("RUST_LOG").unwrap_or_else(|_| TELEMETRY_LOG_LEVEL_DEFAULT.to_string());

        Self {
            service_name,
            log_level,
            stdout_enabled: true,
        }
    }

    pub(crate) fn validate(&self) -> RegistrarResult<()> {
        if self.service_name.is_empty() {
            return Err(RegistrarError::InvalidConfiguration {
                field: "telemetry.service_name".into(),
                reason: "cannot be empty".into(),
            });
        }
        if let Err(e) = tracing_subscriber::EnvFilter::try_new(&self.log_level) {
            return Err(RegistrarError::InvalidConfiguration {
                field: "telemetry.log_level".into(),
                reason: e.to_string(),
            });
        }
        Ok(())
    }
}

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `config.log_level`. Fails with
/// `Internal` if a global subscriber is already installed.
///
/// # Example
///
/// ```rust,ignore
/// use registrar_core::telemetry::{init_telemetry, TelemetryConfig};
///
/// let _guard = init_telemetry(TelemetryConfig::new("my-service"))?;
/// ```
pub fn init_telemetry(config: TelemetryConfig) -> RegistrarResult<TelemetryGuard> {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| RegistrarError::InvalidConfiguration {
            field: "telemetry.log_level".into(),
            reason: e.to_string(),
        })?;

    let fmt_layer = if config.stdout_enabled {
        Some(tracing_subscriber::fmt::layer())
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| {
            RegistrarError::internal(format!("failed to initialize tracing subscriber: {}", e))
        })?;

    tracing::info!(service = %config.service_name, "Telemetry initialized");

    Ok(TelemetryGuard {
        service_name: config.service_name,
    })
}

/// Guard returned by [`init_telemetry`]
///
/// Dropping it does nothing: the stdout subscriber needs no shutdown. It
/// only records which service the subscriber was installed for.
#[derive(Debug)]
pub struct TelemetryGuard {
    service_name: String,
}

impl TelemetryGuard {
    /// Service name the subscriber was installed for
    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telemetry_config_default() {
        let config = TelemetryConfig::default();
        assert_eq!(config.service_name, "registrar");
        assert_eq!(config.log_level, "info");
        assert!(config.stdout_enabled);
    }

    #[test]
    fn test_telemetry_config_builder() {
        let config = TelemetryConfig::new("test-service")
            .with_log_level("debug")
            .without_stdout();

        assert_eq!(config.service_name, "test-service");
        assert_eq!(config.log_level, "debug");
        assert!(!config.stdout_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_telemetry_config_invalid() {
        let config = TelemetryConfig::new("");
        assert!(config.validate().is_err());

        let config = TelemetryConfig::default().with_log_level("registrar=notalevel");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_init_telemetry_twice_fails() {
        let config = TelemetryConfig::new("test-service").without_stdout();
        // Another test may already own the global subscriber; only the
        // second call is asserted.
        if let Ok(guard) = init_telemetry(config.clone()) {
            assert_eq!(guard.service_name(), "test-service");
            drop(guard);
        }
        let second = init_telemetry(config);
        assert!(matches!(second, Err(RegistrarError::Internal { .. })));
    }
}
