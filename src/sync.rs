//! Propagates a version change into every tracked file
//!
//! Each file is handled in two steps: the locator pattern finds the span that
//! holds the version reference, then the previous version text is replaced
//! inside that span only. Text outside the span is never touched, so
//! unrelated version numbers elsewhere in a file survive.

use crate::domain::TrackedFile;
use crate::error::{Result, SemverError};
use crate::store::FileStore;
use crate::warning::SyncWarning;
use regex::Regex;
use std::ops::Range;
use std::path::PathBuf;

/// Result of rewriting one piece of content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// Full content after the replacement
    pub content: String,
    /// Byte range of the locator match in the original content
    pub span: Range<usize>,
    /// Number of replaced occurrences inside the span
    pub replacements: usize,
}

/// Locate the version reference and replace `previous` with `current` in it
///
/// Only standalone occurrences of `previous` are replaced: `1.2.3` inside
/// `1.2.30`, `11.2.3`, `1.2.3-rc1` or `1.2.3.4` is left alone.
///
/// # Returns
/// * `Some(Rewrite)` - The leftmost locator match was found; `replacements`
///   is zero when `previous` does not occur inside it
/// * `None` - The locator does not match the content
pub fn rewrite_version_reference(
    content: &str,
    locator: &Regex,
    previous: &str,
    current: &str,
) -> Option<Rewrite> {
    let found = locator.find(content)?;
    let span_text = found.as_str();

    let mut rewritten = String::with_capacity(content.len() + current.len());
    rewritten.push_str(&content[..found.start()]);

    let mut replacements = 0;
    let mut cursor = 0;
    for start in standalone_occurrences(span_text, previous) {
        rewritten.push_str(&span_text[cursor..start]);
        rewritten.push_str(current);
        cursor = start + previous.len();
        replacements += 1;
    }
    rewritten.push_str(&span_text[cursor..]);
    rewritten.push_str(&content[found.end()..]);

    Some(Rewrite {
        content: rewritten,
        span: found.range(),
        replacements,
    })
}

/// Byte offsets of `needle` in `text` that are not part of a longer version
fn standalone_occurrences<'a>(
    text: &'a str,
    needle: &'a str,
) -> impl Iterator<Item = usize> + 'a {
    text.match_indices(needle)
        .map(|(start, _)| start)
        .filter(move |&start| {
            !needle.is_empty()
                && starts_version(&text[..start])
                && ends_version(&text[start + needle.len()..])
        })
}

// A preceding digit or dot would make the match the tail of another version.
fn starts_version(before: &str) -> bool {
    !matches!(before.chars().next_back(), Some(c) if c.is_ascii_digit() || c == '.')
}

// A following '.' only continues the version when a digit comes next, so
// `1.2.3.svg` still ends at `3`.
fn ends_version(after: &str) -> bool {
    let mut chars = after.chars();
    match chars.next() {
        None => true,
        Some(c) if c.is_ascii_alphanumeric() || c == '-' || c == '+' => false,
        Some('.') => !chars.next().map_or(false, |c| c.is_ascii_digit()),
        Some(_) => true,
    }
}

/// What happened to a single tracked file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    /// The version reference was rewritten (or would be, in a dry run)
    Updated,
    /// The reference already holds the resolved version; nothing was written
    Unchanged,
    /// The previous version was not found inside the located span
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSync {
    pub path: PathBuf,
    pub pattern: String,
    pub status: SyncStatus,
    pub replacements: usize,
}

/// Outcome of a synchronization pass, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub previous: String,
    pub current: String,
    pub files: Vec<FileSync>,
    pub dry_run: bool,
}

impl SyncReport {
    pub fn updated(&self) -> impl Iterator<Item = &FileSync> {
        self.files
            .iter()
            .filter(|file| file.status == SyncStatus::Updated)
    }

    /// Warnings to surface to the user after the pass
    pub fn warnings(&self) -> Vec<SyncWarning> {
        let mut warnings = Vec::new();
        if self.previous == self.current {
            warnings.push(SyncWarning::VersionUnchanged {
                version: self.current.clone(),
            });
        }
        warnings.extend(
            self.files
                .iter()
                .filter(|file| file.status == SyncStatus::Stale)
                .map(|file| SyncWarning::StaleReference {
                    path: file.path.clone(),
                    pattern: file.pattern.clone(),
                    previous: self.previous.clone(),
                }),
        );
        warnings
    }
}

/// Rewrites tracked files through a [FileStore]
pub struct SyncEngine<'a, S: FileStore> {
    store: &'a S,
    dry_run: bool,
}

impl<'a, S: FileStore> SyncEngine<'a, S> {
    pub fn new(store: &'a S) -> Self {
        SyncEngine {
            store,
            dry_run: false,
        }
    }

    /// Compute every rewrite without writing anything
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Rewrite every tracked file, in order, from `previous` to `current`
    ///
    /// Stops at the first error. Files processed before the failure keep
    /// their new content; there is no rollback.
    ///
    /// # Returns
    /// * `Ok(SyncReport)` - Every file was processed
    /// * `Err(FileRead | PatternNotFound | FileWrite)` - First failure
    pub fn sync(&self, previous: &str, current: &str, files: &[TrackedFile]) -> Result<SyncReport> {
        let mut report = SyncReport {
            previous: previous.to_string(),
            current: current.to_string(),
            files: Vec::with_capacity(files.len()),
            dry_run: self.dry_run,
        };

        for file in files {
            report.files.push(self.sync_file(previous, current, file)?);
        }

        Ok(report)
    }

    fn sync_file(&self, previous: &str, current: &str, file: &TrackedFile) -> Result<FileSync> {
        let content = self.store.read_to_string(file.path())?;

        let rewrite = rewrite_version_reference(&content, file.locator(), previous, current)
            .ok_or_else(|| SemverError::pattern_not_found(file.path(), file.pattern()))?;

        let status = if rewrite.replacements == 0 {
            SyncStatus::Stale
        } else if rewrite.content == content {
            SyncStatus::Unchanged
        } else {
            SyncStatus::Updated
        };

        if status == SyncStatus::Updated && !self.dry_run {
            self.store.write(file.path(), &rewrite.content)?;
        }

        Ok(FileSync {
            path: file.path.clone(),
            pattern: file.pattern().to_string(),
            status,
            replacements: rewrite.replacements,
        })
    }
}
