use std::{collections::HashMap, sync::RwLock};

use error_stack::report;

use crate::{
    errors::{CustomResult, StorageError},
    storage::KeyValueStore,
};

/// Process-local store, contents are lost on drop.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> CustomResult<Option<String>, StorageError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| report!(StorageError::LockPoisoned))?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> CustomResult<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| report!(StorageError::LockPoisoned))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
