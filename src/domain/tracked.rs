use crate::error::{Result, SemverError};
use regex::Regex;
use std::path::{Path, PathBuf};

/// A file that receives the synchronized version, paired with its locator
#[derive(Debug, Clone)]
pub struct TrackedFile {
    pub path: PathBuf,
    locator: Regex,
}

impl TrackedFile {
    /// Create a tracked file, compiling its locator pattern
    ///
    /// # Returns
    /// * `Ok(TrackedFile)` - Path and compiled locator
    /// * `Err(InvalidPattern)` - If the pattern is not a valid regex
    pub fn new(path: impl Into<PathBuf>, pattern: &str) -> Result<Self> {
        let locator = Regex::new(pattern).map_err(|source| SemverError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(TrackedFile {
            path: path.into(),
            locator,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn locator(&self) -> &Regex {
        &self.locator
    }

    /// The locator's source pattern
    pub fn pattern(&self) -> &str {
        self.locator.as_str()
    }
}

impl PartialEq for TrackedFile {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.pattern() == other.pattern()
    }
}

impl Eq for TrackedFile {}
