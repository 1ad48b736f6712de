//! TigerStyle constants for the registrar
//!
//! All limits are explicit, use big-endian naming (most significant first),
//! and include units in the name.

// =============================================================================
// Store Limits
// =============================================================================

/// Default pre-sized capacity of the store indexes (grow on demand)
pub const STORE_INITIAL_CAPACITY_DEFAULT: usize = 0;

/// Maximum pre-sized capacity of the store indexes
pub const STORE_INITIAL_CAPACITY_MAX: usize = 1_000_000;

// =============================================================================
// Telemetry
// =============================================================================

/// Default service name reported by telemetry
pub const TELEMETRY_SERVICE_NAME_DEFAULT: &str = "registrar";

/// Default log level filter
pub const TELEMETRY_LOG_LEVEL_DEFAULT: &str = "info";

// Compile-time assertions
const _: () = {
    assert!(STORE_INITIAL_CAPACITY_DEFAULT <= STORE_INITIAL_CAPACITY_MAX);
    assert!(STORE_INITIAL_CAPACITY_MAX > 0);
};
