//! Pure formatting functions for UI output.
//!
//! Everything here writes to stderr so that stdout carries only the resolved
//! version and can be captured by scripts.

use console::style;

use crate::domain::TrackedFile;
use crate::sync::{FileSync, SyncReport, SyncStatus};
use crate::warning::SyncWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal warning.
pub fn display_warning(warning: &SyncWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the proposed version change.
///
/// # Arguments
/// * `previous` - Version text stored before this run
/// * `current` - Version resolved by this run
pub fn display_version_change(previous: &str, current: &str) {
    eprintln!("\n{}", style("Version Change:").bold());
    eprintln!("  From: {}", style(previous).red());
    eprintln!("  To:   {}", style(current).green());
}

/// Describe one file's outcome, or `None` when a warning covers it.
pub fn format_file_outcome(file: &FileSync, dry_run: bool) -> Option<String> {
    let path = file.path.display();
    match (file.status, dry_run) {
        (SyncStatus::Updated, true) => Some(format!(
            "Would update {} ({} occurrence(s))",
            path, file.replacements
        )),
        (SyncStatus::Updated, false) => Some(format!("Updated {}", path)),
        (SyncStatus::Unchanged, _) => Some(format!("Unchanged {}", path)),
        (SyncStatus::Stale, _) => None,
    }
}

/// Display the per-file outcome of a sync pass, followed by its warnings.
pub fn display_sync_report(report: &SyncReport) {
    for file in &report.files {
        let Some(message) = format_file_outcome(file, report.dry_run) else {
            continue;
        };
        match file.status {
            SyncStatus::Updated if !report.dry_run => display_success(&message),
            _ => display_status(&message),
        }
    }

    for warning in report.warnings() {
        display_warning(&warning);
    }
}

/// Display the current version and the files tracking it.
pub fn display_tracked_files(version: &str, files: &[TrackedFile]) {
    eprintln!("{} {}", style("Current version:").bold(), version);
    eprintln!("{}", style("Tracked files:").bold());
    for file in files {
        eprintln!(
            "  - {} {}",
            file.path().display(),
            style(format!("/{}/", file.pattern())).cyan()
        );
    }
}
