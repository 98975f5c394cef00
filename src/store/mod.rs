//! Filesystem abstraction layer
//!
//! The synchronization engine reads and rewrites tracked files through the
//! [FileStore] trait so that the same code runs against the real filesystem
//! and against an in-memory store in tests.
//!
//! - [local::LocalFileStore]: reads and writes with `std::fs`
//! - [mock::MemoryFileStore]: keeps file contents in memory
//!
//! ```rust
//! # use semver_bump::store::{FileStore, MemoryFileStore};
//! # use std::path::Path;
//! # fn example() -> semver_bump::Result<()> {
//! let store = MemoryFileStore::new();
//! store.insert("Chart.yaml", "version: 1.2.3\n");
//! let content = store.read_to_string(Path::new("Chart.yaml"))?;
//! store.write(Path::new("Chart.yaml"), &content.replace("1.2.3", "1.3.0"))?;
//! # Ok(())
//! # }
//! ```

pub mod local;
pub mod mock;

pub use local::LocalFileStore;
pub use mock::MemoryFileStore;

use crate::error::Result;
use std::path::Path;

/// Whole-file text access used by the sync engine
///
/// Implementations map their failures to [crate::error::SemverError::FileRead]
/// and [crate::error::SemverError::FileWrite] carrying the offending path.
pub trait FileStore: Send + Sync {
    /// Read the full content of `path` as UTF-8 text
    ///
    /// # Returns
    /// * `Ok(String)` - File content
    /// * `Err(FileRead)` - If the file is missing, unreadable or not UTF-8
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Replace the full content of `path`
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err(FileWrite)` - If the file cannot be written
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}
