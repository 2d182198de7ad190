//! Main release workflow
//!
//! Runs the fixed sequence of a release: refuse a dirty working tree, read
//! the current version, compute the next one, then update the manifest, the
//! build manifest and the changelog in that order. The first failure stops
//! the run; files already written stay written.
//!
//! The working directory, the date and the repository are all passed in, so
//! the workflow runs the same under test as from `main`.

use chrono::NaiveDate;

use crate::domain::{ReleaseType, Version};
use crate::error::{ReleaseError, Result};
use crate::git::Repository;
use crate::project::ProjectFiles;
use crate::ui;
use crate::warning::ReleaseWarning;

/// Arguments for the release workflow
///
/// Decoupled from the clap arguments so the workflow can be called
/// programmatically.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseWorkflowArgs {
    /// Which version component to increment
    pub release_type: ReleaseType,

    /// Compute and report the new version without writing files
    pub dry_run: bool,
}

/// Result of a successful release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Version found in the manifest before the run
    pub previous: Version,

    /// Version the files were updated to
    pub version: Version,

    /// Files that were left alone because their anchor was missing
    pub warnings: Vec<ReleaseWarning>,

    /// False for a dry run
    pub written: bool,
}

/// Validates the positional arguments: exactly one release type.
pub fn parse_release_type(args: &[String]) -> Result<ReleaseType> {
    match args {
        [single] => single.parse(),
        [] => Err(ReleaseError::invalid_argument("Missing release type")),
        _ => Err(ReleaseError::invalid_argument(format!(
            "Expected one release type, got {}: {}",
            args.len(),
            args.join(" ")
        ))),
    }
}

/// Main release workflow
///
/// # Arguments
///
/// * `args` - Release type and dry-run flag
/// * `files` - The project's release files
/// * `repo` - Working tree to check for pending changes
/// * `today` - Date stamped on the new changelog section
///
/// # Returns
///
/// The old and new versions plus any non-fatal warnings, or the first error.
pub fn run_release_workflow<R: Repository>(
    args: &ReleaseWorkflowArgs,
    files: &ProjectFiles,
    repo: &R,
    today: NaiveDate,
) -> Result<WorkflowResult> {
    let pending = repo.pending_changes()?;
    if !pending.is_empty() {
        ui::display_dirty_working_tree(&pending);
        return Err(ReleaseError::DirtyWorkingTree(pending.len()));
    }

    let previous = files.current_version()?;
    let version = previous.bump(args.release_type)?;

    ui::display_release_banner(args.release_type, &previous, &version);

    if args.dry_run {
        let changelog_action = if files.changelog_path().exists() {
            "would get"
        } else {
            "would be created with"
        };
        ui::display_dry_run(&[
            format!("{} would be set to {}", files.manifest_name(), version),
            format!(
                "{} would be set to {}",
                files.build_manifest_name(),
                version
            ),
            format!(
                "{} {} a [{}] section",
                files.changelog_name(),
                changelog_action,
                version
            ),
        ]);
        return Ok(WorkflowResult {
            previous,
            version,
            warnings: Vec::new(),
            written: false,
        });
    }

    let mut warnings = Vec::new();

    ui::display_status(&format!("Updating {}...", files.manifest_name()));
    files.write_manifest_version(&version)?;

    ui::display_status(&format!("Updating {}...", files.build_manifest_name()));
    if let Some(warning) = files.update_build_manifest(&version)? {
        ui::display_warning(&warning);
        warnings.push(warning);
    }

    ui::display_status(&format!("Updating {}...", files.changelog_name()));
    if let Some(warning) = files.update_changelog(&version, today)? {
        ui::display_warning(&warning);
        warnings.push(warning);
    }

    ui::display_next_steps(&version, files.changelog_name());

    Ok(WorkflowResult {
        previous,
        version,
        warnings,
        written: true,
    })
}
