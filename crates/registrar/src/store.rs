//! Name Store Backend Abstraction
//!
//! Separates storage mechanics (the two indexes) from the registrar's
//! locking and uniqueness rules, so a persistent backend can be added
//! without touching `Registrar`.
//!
//! TigerStyle: Explicit trait bounds, explicit error handling.

use registrar_core::{RegistrarResult, STORE_INITIAL_CAPACITY_MAX};
use std::collections::HashMap;

// =============================================================================
// NameStore Trait
// =============================================================================

/// Backend holding the forward index (key -> names) and reverse index
/// (name -> key)
///
/// A store performs no locking and no uniqueness checks: the owning
/// `Registrar` serializes every call and never inserts a name that
/// `key_of` reports as present.
///
/// Implementations must leave both indexes consistent whenever a method
/// returns, and must not panic between updating one index and the other.
pub trait NameStore: Send {
    /// Names reserved under `key` in reservation order, or `None` if the key
    /// has no reservations
    fn names(&self, key: &str) -> RegistrarResult<Option<Vec<String>>>;

    /// The key `name` is reserved under, if any
    fn key_of(&self, name: &str) -> RegistrarResult<Option<String>>;

    /// Append `name` to `key`'s list and index it
    ///
    /// Precondition: `name` is not present in the store.
    fn insert(&mut self, key: &str, name: &str) -> RegistrarResult<()>;

    /// Remove `name`, dropping its key once the key's list is empty
    ///
    /// Returns the key the name was reserved under, or `None` if it was
    /// not reserved.
    fn remove_name(&mut self, name: &str) -> RegistrarResult<Option<String>>;

    /// Remove `key` and all of its names
    ///
    /// Returns the removed names (empty if the key was absent).
    fn remove_key(&mut self, key: &str) -> RegistrarResult<Vec<String>>;

    /// Copy of the full forward index
    fn snapshot(&self) -> RegistrarResult<HashMap<String, Vec<String>>>;
}

// =============================================================================
// MemoryStore
// =============================================================================

/// In-memory dual index
///
/// Suitable for single-process use. All state is lost on drop.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Forward index: key -> names in reservation order
    names_by_key: HashMap<String, Vec<String>>,
    /// Reverse index: name -> key
    key_by_name: HashMap<String, String>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with both indexes pre-sized
    ///
    /// # Panics
    /// Panics if `capacity` exceeds `STORE_INITIAL_CAPACITY_MAX`. Use
    /// `Registrar::from_config` to get an error instead.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity <= STORE_INITIAL_CAPACITY_MAX,
            "capacity {} exceeds limit {}",
            capacity,
            STORE_INITIAL_CAPACITY_MAX
        );

        Self {
            names_by_key: HashMap::with_capacity(capacity),
            key_by_name: HashMap::with_capacity(capacity),
        }
    }

    /// Number of reserved names
    pub fn name_count(&self) -> usize {
        self.key_by_name.len()
    }

    /// Number of keys with at least one reservation
    pub fn key_count(&self) -> usize {
        self.names_by_key.len()
    }

    /// Whether the store holds no reservations
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.names_by_key.is_empty(), self.key_by_name.is_empty());
        self.key_by_name.is_empty()
    }
}

impl NameStore for MemoryStore {
    fn names(&self, key: &str) -> RegistrarResult<Option<Vec<String>>> {
        Ok(self.names_by_key.get(key).cloned())
    }

    fn key_of(&self, name: &str) -> RegistrarResult<Option<String>> {
        Ok(self.key_by_name.get(name).cloned())
    }

    fn insert(&mut self, key: &str, name: &str) -> RegistrarResult<()> {
        debug_assert!(
            !self.key_by_name.contains_key(name),
            "name {} is already indexed",
            name
        );

        self.names_by_key
            .entry(key.to_string())
            .or_default()
            .push(name.to_string());
        self.key_by_name.insert(name.to_string(), key.to_string());
        Ok(())
    }

    fn remove_name(&mut self, name: &str) -> RegistrarResult<Option<String>> {
        let Some(key) = self.key_by_name.remove(name) else {
            return Ok(None);
        };

        if let Some(names) = self.names_by_key.get_mut(&key) {
            // Only one entry can match: names are unique across the store
            if let Some(pos) = names.iter().position(|n| n == name) {
                names.remove(pos);
            }
            if names.is_empty() {
                self.names_by_key.remove(&key);
            }
        }

        Ok(Some(key))
    }

    fn remove_key(&mut self, key: &str) -> RegistrarResult<Vec<String>> {
        let names = self.names_by_key.remove(key).unwrap_or_default();
        for name in &names {
            self.key_by_name.remove(name);
        }
        Ok(names)
    }

    fn snapshot(&self) -> RegistrarResult<HashMap<String, Vec<String>>> {
        Ok(self.names_by_key.clone())
    }
}
