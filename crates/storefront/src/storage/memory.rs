//! In-memory store for tests and ephemeral sessions.

use std::collections::HashMap;

use super::{KeyValueStore, StorageError};

/// `HashMap`-backed [`KeyValueStore`].
///
/// Nothing survives the process; useful as a test double and for running
/// the engine without touching disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, text: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), text.to_owned());
        Ok(())
    }
}
