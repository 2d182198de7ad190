use chrono::NaiveDate;

use crate::config::ChangelogConfig;
use crate::domain::Version;

/// Anchor the new release section is inserted after
pub const UNRELEASED_MARKER: &str = "## [Unreleased]";

/// Heading of a released section, e.g. `## [1.0.1] - 2024-05-01`
pub fn release_heading(version: &Version, date: NaiveDate) -> String {
    format!("## [{}] - {}", version, date.format("%Y-%m-%d"))
}

/// Contents of a freshly created changelog.
pub fn new_changelog(version: &Version, date: NaiveDate, config: &ChangelogConfig) -> String {
    format!(
        "# Changelog\n\n{}\n\n{}\n\n{}\n\n- {}\n",
        UNRELEASED_MARKER,
        config.placeholder,
        release_heading(version, date),
        config.initial_entry
    )
}

/// Opens a new release section directly below the first unreleased marker.
///
/// Whatever sat under the marker before ends up under the new release
/// heading. Returns `None` when the marker is missing.
pub fn insert_release(
    existing: &str,
    version: &Version,
    date: NaiveDate,
    config: &ChangelogConfig,
) -> Option<String> {
    if !existing.contains(UNRELEASED_MARKER) {
        return None;
    }

    let replacement = format!(
        "{}\n\n{}\n\n{}",
        UNRELEASED_MARKER,
        config.placeholder,
        release_heading(version, date)
    );
    Some(existing.replacen(UNRELEASED_MARKER, &replacement, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_release_heading() {
        assert_eq!(
            release_heading(&Version::new(1, 0, 1), date()),
            "## [1.0.1] - 2024-05-01"
        );
    }

    #[test]
    fn test_new_changelog_layout() {
        let text = new_changelog(&Version::new(1, 0, 1), date(), &ChangelogConfig::default());
        assert_eq!(
            text,
            "# Changelog\n\n## [Unreleased]\n\n<!-- Add new changes here -->\n\n## [1.0.1] - 2024-05-01\n\n- Initial release\n"
        );
    }

    #[test]
    fn test_insert_release_keeps_unreleased_content_below_new_heading() {
        let existing = "# Changelog\n\n## [Unreleased]\n\n- Fixed crash\n\n## [1.0.0] - 2024-01-01\n\n- Initial release\n";
        let updated = insert_release(
            existing,
            &Version::new(1, 0, 1),
            date(),
            &ChangelogConfig::default(),
        )
        .unwrap();

        assert_eq!(
            updated,
            "# Changelog\n\n## [Unreleased]\n\n<!-- Add new changes here -->\n\n## [1.0.1] - 2024-05-01\n\n- Fixed crash\n\n## [1.0.0] - 2024-01-01\n\n- Initial release\n"
        );
    }

    #[test]
    fn test_insert_release_only_touches_first_marker() {
        let existing = "## [Unreleased]\n\nnotes mention ## [Unreleased] too\n";
        let updated = insert_release(
            existing,
            &Version::new(2, 0, 0),
            date(),
            &ChangelogConfig::default(),
        )
        .unwrap();

        assert_eq!(updated.matches(UNRELEASED_MARKER).count(), 2);
        assert!(updated.ends_with("notes mention ## [Unreleased] too\n"));
    }

    #[test]
    fn test_insert_release_without_marker() {
        let existing = "# Changelog\n\n## [1.0.0] - 2024-01-01\n";
        assert_eq!(
            insert_release(existing, &Version::new(1, 0, 1), date(), &ChangelogConfig::default()),
            None
        );
    }

    #[test]
    fn test_custom_placeholder() {
        let config = ChangelogConfig {
            placeholder: "_nothing yet_".to_string(),
            initial_entry: "First cut".to_string(),
        };
        let text = new_changelog(&Version::new(0, 1, 0), date(), &config);
        assert!(text.contains("_nothing yet_"));
        assert!(text.ends_with("- First cut\n"));
    }
}
