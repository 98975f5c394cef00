use crate::error::{Result, SemverError};
use crate::store::FileStore;
use std::fs;
use std::path::Path;

/// [FileStore] backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileStore;

impl LocalFileStore {
    pub fn new() -> Self {
        LocalFileStore
    }
}

impl FileStore for LocalFileStore {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| SemverError::FileRead {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents).map_err(|source| SemverError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}
