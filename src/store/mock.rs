use crate::error::{Result, SemverError};
use crate::store::FileStore;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// In-memory [FileStore] for testing without touching the disk
#[derive(Debug, Default)]
pub struct MemoryFileStore {
    files: Mutex<BTreeMap<PathBuf, String>>,
    read_only: Mutex<BTreeSet<PathBuf>>,
}

impl MemoryFileStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        lock(&self.files).insert(path.into(), contents.into());
    }

    /// Make writes to `path` fail with permission denied
    pub fn set_read_only(&self, path: impl Into<PathBuf>) {
        lock(&self.read_only).insert(path.into());
    }

    /// Current content of a file, if present
    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        lock(&self.files).get(path.as_ref()).cloned()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl FileStore for MemoryFileStore {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.get(path).ok_or_else(|| SemverError::FileRead {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        if lock(&self.read_only).contains(path) {
            return Err(SemverError::FileWrite {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only file"),
            });
        }
        self.insert(path, contents);
        Ok(())
    }
}
