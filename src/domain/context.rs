use crate::domain::tracked::TrackedFile;
use crate::domain::version::{BumpFlags, SemanticVersion};
use crate::error::Result;

/// State of a single run: the version before any change, the version after,
/// and the files that must follow it
#[derive(Debug, Clone)]
pub struct RunContext {
    previous_version: String,
    current_version: SemanticVersion,
    tracked_files: Vec<TrackedFile>,
}

impl RunContext {
    /// Capture the stored version text before any change is applied
    ///
    /// `stored` is kept verbatim as the text to search for during sync.
    pub fn capture(stored: &str, tracked_files: Vec<TrackedFile>) -> Result<Self> {
        let current_version = SemanticVersion::parse(stored)?;

        Ok(RunContext {
            previous_version: stored.trim().to_string(),
            current_version,
            tracked_files,
        })
    }

    /// Apply a structured bump and tag overrides to the current version
    pub fn bump(&mut self, bump: BumpFlags, tag: &str, metadata: &str) -> Result<&SemanticVersion> {
        self.current_version = self.current_version.update(bump, tag, metadata)?;
        Ok(&self.current_version)
    }

    /// Replace the current version with an explicit literal
    pub fn override_version(&mut self, literal: &str) -> Result<&SemanticVersion> {
        self.current_version = SemanticVersion::parse(literal)?;
        Ok(&self.current_version)
    }

    pub fn previous_version(&self) -> &str {
        &self.previous_version
    }

    pub fn current_version(&self) -> &SemanticVersion {
        &self.current_version
    }

    pub fn tracked_files(&self) -> &[TrackedFile] {
        &self.tracked_files
    }

    /// True when the run changed the version text
    pub fn is_changed(&self) -> bool {
        self.previous_version != self.current_version.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_keeps_previous_text() {
        let mut ctx = RunContext::capture("1.2.3\n", Vec::new()).unwrap();
        ctx.bump(BumpFlags::new(false, true, false), "", "").unwrap();

        assert_eq!(ctx.previous_version(), "1.2.3");
        assert_eq!(ctx.current_version().to_string(), "1.3.0");
        assert!(ctx.is_changed());
    }

    #[test]
    fn test_capture_invalid_version() {
        assert!(RunContext::capture("1.2", Vec::new()).is_err());
    }

    #[test]
    fn test_successive_bumps_keep_first_snapshot() {
        let mut ctx = RunContext::capture("1.2.3", Vec::new()).unwrap();
        ctx.bump(BumpFlags::new(false, false, true), "", "").unwrap();
        ctx.bump(BumpFlags::new(false, false, true), "", "").unwrap();

        assert_eq!(ctx.previous_version(), "1.2.3");
        assert_eq!(ctx.current_version().to_string(), "1.2.5");
    }

    #[test]
    fn test_override_replaces_wholesale() {
        let mut ctx = RunContext::capture("1.2.3-beta+001", Vec::new()).unwrap();
        let next = ctx.override_version("4.0.0-rc.1").unwrap();

        assert_eq!(next.to_string(), "4.0.0-rc.1");
        assert_eq!(ctx.previous_version(), "1.2.3-beta+001");
    }

    #[test]
    fn test_unchanged_run() {
        let mut ctx = RunContext::capture("1.2.3", Vec::new()).unwrap();
        ctx.bump(BumpFlags::default(), "", "").unwrap();
        assert!(!ctx.is_changed());
    }

    #[test]
    fn test_failed_override_keeps_state() {
        let mut ctx = RunContext::capture("1.2.3", Vec::new()).unwrap();
        assert!(ctx.override_version("nope").is_err());
        assert_eq!(ctx.current_version().to_string(), "1.2.3");
    }
}
