use std::{
    collections::{BTreeMap, HashMap},
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

use error_stack::{report, ResultExt};
use once_cell::sync::Lazy;
use tempfile::NamedTempFile;

use crate::{
    errors::{CustomResult, StorageError},
    storage::KeyValueStore,
};

type Preferences = BTreeMap<String, String>;

/// One writer lock per preferences file, shared by every [`FileStore`] opened on it.
static WRITE_LOCKS: Lazy<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> = Lazy::new(Default::default);

fn write_lock_for(path: &Path) -> Arc<Mutex<()>> {
    let mut locks = WRITE_LOCKS.lock().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(locks.entry(path.to_path_buf()).or_default())
}

/// Preferences kept as a single JSON object on disk.
///
/// A missing file reads as empty. Writes go through a uniquely named sibling temp file and a
/// rename, so readers never observe a half written document. Stores opened on the same path
/// within a process serialize their writes.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let path = std::path::absolute(&path).unwrap_or(path);
        let write_lock = write_lock_for(&path);

        Self { path, write_lock }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> CustomResult<Preferences, StorageError> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                return Ok(Preferences::new())
            }
            Err(error) => {
                return Err(report!(error)
                    .change_context(StorageError::ReadFailed)
                    .attach_printable(format!("path: {}", self.path.display())))
            }
        };

        serde_json::from_slice(&contents)
            .change_context(StorageError::DeserializationFailed)
            .attach_printable_lazy(|| format!("path: {}", self.path.display()))
    }

    fn store(&self, preferences: &Preferences) -> CustomResult<(), StorageError> {
        let contents = serde_json::to_vec_pretty(preferences)
            .change_context(StorageError::SerializationFailed)?;

        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).change_context(StorageError::WriteFailed)?;

        let mut temp_file =
            NamedTempFile::new_in(parent).change_context(StorageError::WriteFailed)?;
        temp_file
            .write_all(&contents)
            .change_context(StorageError::WriteFailed)?;
        temp_file
            .persist(&self.path)
            .change_context(StorageError::WriteFailed)
            .attach_printable_lazy(|| format!("path: {}", self.path.display()))?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> CustomResult<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn put(&self, key: &str, value: &str) -> CustomResult<(), StorageError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| report!(StorageError::LockPoisoned))?;

        let mut preferences = self.load()?;
        preferences.insert(key.to_owned(), value.to_owned());
        self.store(&preferences)
    }
}
