use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use semver_bump::cli::orchestration::{self, BumpWorkflowArgs};
use semver_bump::config;
use semver_bump::domain::BumpFlags;
use semver_bump::store::LocalFileStore;
use semver_bump::ui;
use semver_bump::SemverError;

#[derive(clap::Parser)]
#[command(
    name = "semver-bump",
    about = "Bump a project's semantic version and sync it into tracked files"
)]
struct Args {
    #[arg(
        value_name = "VERSION",
        help = "Set this exact version instead of bumping",
        conflicts_with_all = ["major", "minor", "patch", "tag", "metadata"]
    )]
    new_version: Option<String>,

    #[arg(short = 'M', long, help = "Increment the major version")]
    major: bool,

    #[arg(short = 'm', long, help = "Increment the minor version")]
    minor: bool,

    #[arg(short, long, help = "Increment the patch version")]
    patch: bool,

    #[arg(short, long, help = "Prerelease tag, e.g. rc.1")]
    tag: Option<String>,

    #[arg(short = 'b', long, help = "Build metadata, e.g. sha.5114f85")]
    metadata: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(long, help = "Show the current version and tracked files and exit")]
    list: bool,

    #[arg(long, help = "Create a starter configuration file")]
    init: bool,

    #[arg(short, long, help = "Skip confirmation prompts")]
    force: bool,

    #[arg(short = 'V', long = "version", help = "Print version information")]
    show_version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.show_version {
        println!("semver-bump {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if args.init {
        return init(args.config.as_deref(), args.force);
    }

    let config_path = config::locate_config(args.config.as_deref()).unwrap_or_else(|e| fail(e));
    let config = config::load_config(&config_path).unwrap_or_else(|e| fail(e));

    if args.list {
        let files = config.tracked_files(&config_path).unwrap_or_else(|e| fail(e));
        ui::display_tracked_files(&config.version, &files);
        return Ok(());
    }

    let workflow_args = BumpWorkflowArgs {
        version: args.new_version,
        bump: BumpFlags::new(args.major, args.minor, args.patch),
        tag: args.tag,
        metadata: args.metadata,
        dry_run: args.dry_run,
    };

    if workflow_args.dry_run {
        ui::display_status("Dry run: no files will be written");
    }

    let result = orchestration::run_bump_workflow(
        &workflow_args,
        &config,
        &config_path,
        &LocalFileStore::new(),
    )
    .unwrap_or_else(|e| fail(e));

    let current = result.version.to_string();
    if result.previous != current {
        ui::display_version_change(&result.previous, &current);
    }
    ui::display_sync_report(&result.report);

    println!("{}", current);
    Ok(())
}

fn init(config_path: Option<&Path>, force: bool) -> Result<()> {
    let target = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_FILE));

    let overwrite = if target.exists() {
        if !force
            && !ui::confirm_action(&format!("{} already exists. Overwrite?", target.display()))?
        {
            eprintln!("Operation cancelled by user.");
            return Ok(());
        }
        true
    } else {
        false
    };

    let path = orchestration::init_config(Some(target.as_path()), overwrite)
        .unwrap_or_else(|e| fail(e));
    ui::display_success(&format!("Created {}", path.display()));
    Ok(())
}

fn fail(err: SemverError) -> ! {
    ui::display_error(&err.to_string());
    std::process::exit(1);
}
