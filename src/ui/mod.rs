//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, Write};

use anyhow::Result;
use console::style;

pub mod formatter;

pub use formatter::{
    display_error, display_status, display_success, display_sync_report, display_tracked_files,
    display_version_change, display_warning, format_file_outcome,
};

/// Prompts user to confirm an action with a yes/no prompt.
///
/// Displays the given prompt and accepts "y" or "yes" (case-insensitive) as confirmation.
/// Default is to decline.
///
/// # Arguments
/// * `prompt` - The question to ask
///
/// # Returns
/// * `Ok(true)` - If user answered yes
/// * `Ok(false)` - Otherwise
pub fn confirm_action(prompt: &str) -> Result<bool> {
    eprint!("\n{} {} ", prompt, style("(y/N):").dim());
    io::stderr().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(is_affirmative(&input))
}

fn is_affirmative(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
