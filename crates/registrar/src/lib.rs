//! Registrar
//!
//! Name reservation for keyed resources.
//!
//! # Overview
//!
//! A key can hold any number of names, but each name is reserved to at most
//! one key at a time. The registry provides:
//! - Atomic reservation with global name uniqueness
//! - Idempotent release of single names and deletion of whole keys
//! - Snapshot reads of one key or the whole registry
//! - Pluggable storage backends behind a single lock (Memory today)
//!
//! # Example
//!
//! ```
//! use registrar::{NameRegistry, Registrar, RegistrarError};
//!
//! let registrar = Registrar::new();
//! registrar.reserve("web", "container-1").unwrap();
//! assert!(matches!(
//!     registrar.reserve("web", "container-2"),
//!     Err(RegistrarError::NameReserved { .. })
//! ));
//! assert_eq!(registrar.get("container-1").unwrap(), vec!["web".to_string()]);
//! ```

pub mod registrar;
pub mod store;

pub use registrar::{MemoryRegistrar, NameRegistry, Registrar};
pub use registrar_core::{RegistrarConfig, RegistrarError, RegistrarResult};
pub use store::{MemoryStore, NameStore};
