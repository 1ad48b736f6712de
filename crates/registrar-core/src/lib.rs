//! Registrar Core
//!
//! Errors, constants, configuration and telemetry shared by the registrar
//! crates.
//!
//! # TigerStyle
//!
//! - Explicit limits with big-endian naming (e.g., `STORE_INITIAL_CAPACITY_MAX`)
//! - Errors are returned, never panics

pub mod config;
pub mod constants;
pub mod error;
pub mod telemetry;

pub use config::{RegistrarConfig, StoreBackend, StoreConfig};
pub use constants::*;
pub use error::{RegistrarError, RegistrarResult};
pub use telemetry::{init_telemetry, TelemetryConfig, TelemetryGuard};
