//! User interface module - coloured console output.
//!
//! Separates concerns:
//! - `formatter` - Pure text building
//! - This module - Styling and printing

use console::style;

use crate::domain::{ReleaseType, Version};
use crate::warning::ReleaseWarning;

pub mod formatter;

/// Pending paths listed before the rest is summarised.
const MAX_PENDING_SHOWN: usize = 10;

/// Print an error message with a red prefix.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a progress message with a blue arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").blue(), message);
}

pub fn display_warning(warning: &ReleaseWarning) {
    println!("{} {}", style("WARNING:").yellow().bold(), warning);
}

/// Usage text for a missing or unknown release type.
pub fn display_usage(program: &str) {
    println!("{}", style(formatter::usage_line(program)).red());
    println!();
    for line in formatter::release_type_lines() {
        println!("{}", style(line).yellow());
    }
}

/// Refusal to release from a dirty working tree.
pub fn display_dirty_working_tree(pending: &[String]) {
    println!(
        "{}",
        style("Warning: You have uncommitted changes!").yellow()
    );
    for line in formatter::pending_change_lines(pending, MAX_PENDING_SHOWN) {
        println!("{}", line);
    }
    println!(
        "{}",
        style("Please commit or stash them before creating a release.").yellow()
    );
}

pub fn display_release_banner(release_type: ReleaseType, current: &Version, new: &Version) {
    println!();
    println!("{}", style(formatter::banner_rule()).blue());
    println!("{}", style(formatter::banner_title(release_type)).bold());
    println!("{}", style(formatter::banner_rule()).blue());
    println!();
    println!("{}", style(formatter::current_version_line(current)).yellow());
    println!("{}", style(formatter::new_version_line(new)).green());
    println!();
}

pub fn display_next_steps(version: &Version, changelog: &str) {
    println!();
    println!("{}", style("Version updated successfully!").green());
    println!();
    println!("{}", style("Next steps:").bold());
    for step in formatter::next_steps(version, changelog) {
        println!("{}", style(step).yellow());
    }
    println!();
}

/// Changes a dry run would have made.
pub fn display_dry_run(planned: &[String]) {
    display_status("Dry run, no files were changed:");
    for change in planned {
        display_success(change);
    }
}
