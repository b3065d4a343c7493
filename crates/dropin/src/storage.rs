//!
//! Key-value storage for small preferences such as the last used payment method type.
//!

use std::sync::Arc;

use dropin_env::{logger, StorageBackend, StorageSettings};

use crate::errors::{CustomResult, StorageError};

mod file;
mod memory;

pub use self::{file::FileStore, memory::InMemoryStore};

/// A string-to-string preference store.
///
/// Implementations provide their own atomicity for a single `put`.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> CustomResult<Option<String>, StorageError>;

    fn put(&self, key: &str, value: &str) -> CustomResult<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> CustomResult<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> CustomResult<(), StorageError> {
        (**self).put(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> CustomResult<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> CustomResult<(), StorageError> {
        (**self).put(key, value)
    }
}

/// Build the store selected by `settings`.
pub fn from_settings(settings: &StorageSettings) -> Arc<dyn KeyValueStore> {
    match settings.backend {
        StorageBackend::Memory => {
            logger::debug!("using in-memory preference store");
            Arc::new(InMemoryStore::new())
        }
        StorageBackend::File => {
            let path = settings.resolved_path();
            logger::debug!(path = %path.display(), "using file preference store");
            Arc::new(FileStore::new(path))
        }
    }
}
