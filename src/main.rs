use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;

use cut_release::cli::{parse_release_type, run_release_workflow, ReleaseWorkflowArgs};
use cut_release::config;
use cut_release::domain::ReleaseType;
use cut_release::git::Git2Repository;
use cut_release::project::ProjectFiles;
use cut_release::{ui, ReleaseError};

const PROGRAM: &str = "cut-release";

#[derive(clap::Parser)]
#[command(
    name = "cut-release",
    about = "Bump the project version in package.json, CMakeLists.txt and CHANGELOG.md"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Preview the new version without changing any file")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,

    #[arg(value_name = "RELEASE_TYPE", help = "One of major, minor or patch")]
    release_type: Vec<String>,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            ui::display_error(&e.kind().to_string());
            ui::display_usage(PROGRAM);
            std::process::exit(1);
        }
    };

    if args.version {
        println!("{} {}", PROGRAM, env!("CARGO_PKG_VERSION"));
        return;
    }

    let release_type = match parse_release_type(&args.release_type) {
        Ok(release_type) => release_type,
        Err(_) => {
            ui::display_usage(PROGRAM);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&args, release_type) {
        let dirty = e
            .downcast_ref::<ReleaseError>()
            .is_some_and(ReleaseError::is_dirty_working_tree);
        // The dirty-tree warning was already printed by the workflow.
        if !dirty {
            ui::display_error(&format!("{:#}", e));
        }
        std::process::exit(1);
    }
}

fn run(args: &Args, release_type: ReleaseType) -> Result<()> {
    let root = std::env::current_dir().context("Cannot determine the current directory")?;

    let config = config::load_config(&root, args.config.as_deref())?;
    let files = ProjectFiles::new(&root, &config);
    let repo = Git2Repository::discover(&root)?;
    let today = chrono::Local::now().date_naive();

    let workflow_args = ReleaseWorkflowArgs {
        release_type,
        dry_run: args.dry_run,
    };
    run_release_workflow(&workflow_args, &files, &repo, today)?;

    Ok(())
}
