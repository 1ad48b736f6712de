//! Error types for the registrar
//!
//! TigerStyle: Explicit error variants with context, using thiserror.

use thiserror::Error;

/// Result type alias for registrar operations
pub type RegistrarResult<T> = std::result::Result<T, RegistrarError>;

/// Registrar error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrarError {
    // =========================================================================
    // Reservation Errors
    // =========================================================================
    /// Name is already reserved, possibly to the same key
    #[error("name is reserved: {name} (held by key {key})")]
    NameReserved { name: String, key: String },

    /// Key has no current reservations
    #[error("provided key does not exist: {key}")]
    NoSuchKey { key: String },

    // =========================================================================
    // Backend Errors
    // =========================================================================
    /// Store backend operation failed
    #[error("storage error: {reason}")]
    Storage { reason: String },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("invalid configuration: {field}, reason: {reason}")]
    InvalidConfiguration { field: String, reason: String },

    // =========================================================================
    // Internal Errors
    // =========================================================================
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl RegistrarError {
    /// Create a name reserved error
    pub fn name_reserved(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self::NameReserved {
            name: name.into(),
            key: key.into(),
        }
    }

    /// Create a no such key error
    pub fn no_such_key(key: impl Into<String>) -> Self {
        Self::NoSuchKey { key: key.into() }
    }

    /// Create a storage error
    pub fn storage(reason: impl Into<String>) -> Self {
        Self::Storage {
            reason: reason.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this error indicates a retriable condition
    ///
    /// Reservation conflicts are not retriable: the name stays taken until
    /// its holder releases it.
    pub fn is_retriable(&self) -> bool {
        matches!(self, Self::Storage { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegistrarError::name_reserved("web", "container-1");
        let msg = err.to_string();
        assert!(msg.contains("web"));
        assert!(msg.contains("container-1"));

        let err = RegistrarError::no_such_key("container-2");
        assert!(err.to_string().contains("container-2"));
    }

    #[test]
    fn test_error_retriable() {
        assert!(RegistrarError::storage("timeout").is_retriable());
        assert!(!RegistrarError::name_reserved("a", "b").is_retriable());
        assert!(!RegistrarError::no_such_key("b").is_retriable());
    }
}
