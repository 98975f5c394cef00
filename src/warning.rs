use std::fmt;
use std::path::PathBuf;

/// Non-fatal findings from a run that should be reported to the user
#[derive(Debug, Clone, PartialEq)]
pub enum SyncWarning {
    /// The locator matched but the previous version does not appear inside
    /// the match, so the file was left as it is
    StaleReference {
        path: PathBuf,
        pattern: String,
        previous: String,
    },
    /// The run resolved to the version that was already stored
    VersionUnchanged { version: String },
}

impl fmt::Display for SyncWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncWarning::StaleReference {
                path,
                pattern,
                previous,
            } => {
                write!(
                    f,
                    "'{}' not found in the text matched by '{}' in {}; file left unchanged",
                    previous,
                    pattern,
                    path.display()
                )
            }
            SyncWarning::VersionUnchanged { version } => {
                write!(f, "Version is unchanged at {}", version)
            }
        }
    }
}
