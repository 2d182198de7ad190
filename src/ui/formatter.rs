//! Pure formatting functions for UI output.
//!
//! Everything here builds plain strings; colouring and printing happen in
//! the parent module.

use crate::domain::{ReleaseType, Version};

/// Width of the `=` rules around the release banner.
const BANNER_WIDTH: usize = 50;

pub fn usage_line(program: &str) -> String {
    format!("Usage: {} [major|minor|patch]", program)
}

/// Numbered descriptions of the accepted release types.
pub fn release_type_lines() -> Vec<String> {
    ReleaseType::ALL
        .iter()
        .enumerate()
        .map(|(i, release_type)| {
            format!(
                "  {}. {}: {}",
                i + 1,
                release_type,
                release_type.description()
            )
        })
        .collect()
}

pub fn banner_rule() -> String {
    "=".repeat(BANNER_WIDTH)
}

pub fn banner_title(release_type: ReleaseType) -> String {
    format!("  Creating {} release", release_type)
}

pub fn current_version_line(version: &Version) -> String {
    format!("Current version: {}", version)
}

pub fn new_version_line(version: &Version) -> String {
    format!("New version:     {}", version)
}

/// Manual follow-up steps printed after a successful release.
pub fn next_steps(version: &Version, changelog: &str) -> Vec<String> {
    [
        format!(
            "Review the changes in {} and add any missing items",
            changelog
        ),
        format!(
            "Commit the changes: git add -A && git commit -m \"chore: release v{}\"",
            version
        ),
        format!("Create a git tag: git tag v{}", version),
        "Build the release: ./scripts/build.sh".to_string(),
        "Install and test: ./scripts/install.sh".to_string(),
        "Build installer: ./scripts/build-installer.sh".to_string(),
        "Push changes: git push && git push --tags".to_string(),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, step)| format!("  {}. {}", i + 1, step))
    .collect()
}

/// Pending paths shown when the working tree is dirty, capped at `limit`.
pub fn pending_change_lines(pending: &[String], limit: usize) -> Vec<String> {
    let mut lines: Vec<String> = pending
        .iter()
        .take(limit)
        .map(|path| format!("  - {}", path))
        .collect();

    if pending.len() > limit {
        lines.push(format!("  ... and {} more", pending.len() - limit));
    }
    lines
}
