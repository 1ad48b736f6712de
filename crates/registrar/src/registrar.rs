//! Registry trait and implementations
//!
//! TigerStyle: Explicit trait with global name uniqueness guarantee.

use crate::store::{MemoryStore, NameStore};
use registrar_core::{RegistrarConfig, RegistrarError, RegistrarResult, StoreBackend};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, instrument, warn};

// =============================================================================
// NameRegistry Trait
// =============================================================================

/// Name reservation registry
///
/// Maps keys to one or more names. Keys can hold many names, but a name is
/// reserved to at most one key at any time.
///
/// # Guarantees
/// - Uniqueness: a name is bound to at most one key
/// - Atomicity: every operation applies fully or not at all, and no caller
///   observes a partially updated registry
/// - Snapshots: returned collections are copies, never live views
///
/// # TigerStyle
/// - Errors are returned, never panics
/// - Cleanup operations (release, delete) succeed on absent targets
pub trait NameRegistry: Send + Sync {
    /// Reserve `name` for `key`
    ///
    /// The key is created if it has no reservations yet.
    ///
    /// # Errors
    /// Returns `NameReserved` if the name is already reserved, including to
    /// the same key. A repeated identical reservation is an error, not a
    /// no-op.
    fn reserve(&self, name: &str, key: &str) -> RegistrarResult<()>;

    /// Release a reserved name
    ///
    /// Once released, the name can be reserved again. Releasing a name that
    /// is not reserved succeeds.
    fn release(&self, name: &str) -> RegistrarResult<()>;

    /// Remove all reservations for `key`
    ///
    /// All names reserved to the key are released. Deleting an unknown key
    /// succeeds.
    fn delete(&self, key: &str) -> RegistrarResult<()>;

    /// Names reserved for `key`, in reservation order
    ///
    /// # Errors
    /// Returns `NoSuchKey` if the key has no reservations.
    fn get(&self, key: &str) -> RegistrarResult<Vec<String>>;

    /// All keys and the names reserved to them
    fn list(&self) -> RegistrarResult<HashMap<String, Vec<String>>>;

    /// Whether `name` is currently reserved to any key
    ///
    /// The answer may be stale by the time the caller acts on it; a
    /// following `reserve` can still fail with `NameReserved`.
    fn is_reserved(&self, name: &str) -> RegistrarResult<bool>;

    /// The key `name` is currently reserved under
    fn key_of(&self, name: &str) -> RegistrarResult<Option<String>>;
}

// =============================================================================
// Registrar
// =============================================================================

/// Lock-guarded registry over a [`NameStore`]
///
/// A single mutex covers the whole store. Reads take the same exclusive
/// lock as writes, so every operation sees a consistent pair of indexes.
#[derive(Debug)]
pub struct Registrar<S: NameStore = MemoryStore> {
    store: Mutex<S>,
}

/// Registrar backed by the in-memory store
pub type MemoryRegistrar = Registrar<MemoryStore>;

impl Registrar<MemoryStore> {
    /// Create a new empty in-memory registrar
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }

    /// Create a registrar from validated configuration
    pub fn from_config(config: &RegistrarConfig) -> RegistrarResult<Self> {
        config.validate()?;

        let store = match config.store.backend {
            StoreBackend::Memory => MemoryStore::with_capacity(config.store.initial_capacity),
        };

        debug!(
            backend = ?config.store.backend,
            initial_capacity = config.store.initial_capacity,
            "Created registrar"
        );
        Ok(Self::with_store(store))
    }
}

impl Default for Registrar<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: NameStore> Registrar<S> {
    /// Create a registrar over an existing store
    pub fn with_store(store: S) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Consume the registrar and return its store
    pub fn into_store(self) -> S {
        self.store
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Acquire the store lock
    ///
    /// Stores never panic between index updates, so a poisoned guard still
    /// protects consistent data and is recovered rather than propagated.
    fn lock(&self) -> MutexGuard<'_, S> {
        self.store.lock().unwrap_or_else(|poisoned| {
            warn!("registrar lock poisoned by a panicking holder, recovering");
            poisoned.into_inner()
        })
    }
}

impl<S: NameStore> NameRegistry for Registrar<S> {
    #[instrument(skip(self), level = "debug")]
    fn reserve(&self, name: &str, key: &str) -> RegistrarResult<()> {
        let mut store = self.lock();

        if let Some(holder) = store.key_of(name)? {
            debug!(holder = %holder, "Name already reserved");
            return Err(RegistrarError::name_reserved(name, holder));
        }

        store.insert(key, name)?;
        debug!("Reserved name");
        Ok(())
    }

    #[instrument(skip(self), level = "debug")]
    fn release(&self, name: &str) -> RegistrarResult<()> {
        let mut store = self.lock();

        match store.remove_name(name)? {
            Some(key) => debug!(key = %key, "Released name"),
            None => debug!("Name not reserved, nothing to release"),
        }
        Ok(())
    }

    #[instrument(skip(self), level = "debug")]
    fn delete(&self, key: &str) -> RegistrarResult<()> {
        let mut store = self.lock();

        let removed = store.remove_key(key)?;
        debug!(released = removed.len(), "Deleted key");
        Ok(())
    }

    fn get(&self, key: &str) -> RegistrarResult<Vec<String>> {
        let store = self.lock();
        store
            .names(key)?
            .ok_or_else(|| RegistrarError::no_such_key(key))
    }

    fn list(&self) -> RegistrarResult<HashMap<String, Vec<String>>> {
        let store = self.lock();
        store.snapshot()
    }

    fn is_reserved(&self, name: &str) -> RegistrarResult<bool> {
        let store = self.lock();
        Ok(store.key_of(name)?.is_some())
    }

    fn key_of(&self, name: &str) -> RegistrarResult<Option<String>> {
        let store = self.lock();
        store.key_of(name)
    }
}
