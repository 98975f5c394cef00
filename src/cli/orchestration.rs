//! Main workflow orchestration logic
//!
//! Composes the version state and the sync engine for one run. Kept apart
//! from `main.rs` so the workflow can be driven programmatically without clap.

use std::path::{Path, PathBuf};

use crate::config::{self, Config};
use crate::domain::{BumpFlags, RunContext, SemanticVersion};
use crate::error::{Result, SemverError};
use crate::store::FileStore;
use crate::sync::{SyncEngine, SyncReport};

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args in a form that does not depend on clap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Literal version that replaces the stored one
    pub version: Option<String>,

    pub bump: BumpFlags,

    /// Prerelease override (without the leading '-')
    pub tag: Option<String>,

    /// Build metadata override (without the leading '+')
    pub metadata: Option<String>,

    /// Preview mode - compute rewrites without writing
    pub dry_run: bool,
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Version text stored before the run
    pub previous: String,

    /// Resolved version
    pub version: SemanticVersion,

    pub report: SyncReport,
}

/// Main bump workflow
///
/// 1. Capture the stored version before anything changes
/// 2. Apply the explicit override, or the structured bump and tag overrides
/// 3. Rewrite every tracked file, the config document last
///
/// # Arguments
///
/// * `args` - Override, bump flags, tag overrides and dry-run switch
/// * `config` - Loaded configuration
/// * `config_path` - Where `config` was read from
/// * `store` - File access used for the sync pass
///
/// # Returns
///
/// The resolved version and the per-file report, or the first fatal error
pub fn run_bump_workflow<S: FileStore>(
    args: &BumpWorkflowArgs,
    config: &Config,
    config_path: &Path,
    store: &S,
) -> Result<WorkflowResult> {
    let tracked = config.tracked_files(config_path)?;
    let mut ctx = RunContext::capture(&config.version, tracked)?;

    match &args.version {
        Some(literal) => {
            ctx.override_version(literal)?;
        }
        None => {
            ctx.bump(
                args.bump,
                args.tag.as_deref().unwrap_or(""),
                args.metadata.as_deref().unwrap_or(""),
            )?;
        }
    }

    let current = ctx.current_version().to_string();
    let report = SyncEngine::new(store)
        .dry_run(args.dry_run)
        .sync(ctx.previous_version(), &current, ctx.tracked_files())?;

    Ok(WorkflowResult {
        previous: ctx.previous_version().to_string(),
        version: ctx.current_version().clone(),
        report,
    })
}

/// Write a starter config, returning the path written
///
/// Existing files are only replaced when `overwrite` is set.
pub fn init_config(config_path: Option<&Path>, overwrite: bool) -> Result<PathBuf> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_FILE));

    if path.exists() && !overwrite {
        return Err(SemverError::config_write(&path, "file already exists"));
    }

    config::save_config(&path, &Config::default())?;
    Ok(path)
}
