use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for semver-bump operations
#[derive(Error, Debug)]
pub enum SemverError {
    #[error("Invalid version format: '{input}' ({reason})")]
    InvalidVersionFormat { input: String, reason: String },

    #[error("Failed to read config {}: {reason}", path.display())]
    ConfigRead { path: PathBuf, reason: String },

    #[error("Failed to write config {}: {reason}", path.display())]
    ConfigWrite { path: PathBuf, reason: String },

    #[error("Failed to read tracked file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write tracked file {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Pattern '{pattern}' not found in {}", path.display())]
    PatternNotFound { path: PathBuf, pattern: String },

    #[error("Invalid locator pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

/// Convenience type alias for Results in semver-bump
pub type Result<T> = std::result::Result<T, SemverError>;

impl SemverError {
    /// Create a version format error for the given input
    pub fn version(input: impl Into<String>, reason: impl Into<String>) -> Self {
        SemverError::InvalidVersionFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a config read error with context
    pub fn config_read(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        SemverError::ConfigRead {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a config write error with context
    pub fn config_write(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        SemverError::ConfigWrite {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn pattern_not_found(path: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        SemverError::PatternNotFound {
            path: path.into(),
            pattern: pattern.into(),
        }
    }
}
