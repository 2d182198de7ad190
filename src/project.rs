//! The release files of one project and the writes applied to them.

use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

use crate::config::{ChangelogConfig, ReleaseConfig};
use crate::domain::{changelog, cmake, Version};
use crate::error::Result;
use crate::manifest;
use crate::warning::ReleaseWarning;

/// Paths and settings for the files a release touches.
#[derive(Debug, Clone)]
pub struct ProjectFiles {
    root: PathBuf,
    manifest: String,
    build_manifest: String,
    changelog: String,
    cmake_project: String,
    changelog_text: ChangelogConfig,
}

impl ProjectFiles {
    /// Resolve the release files of the project rooted at `root`
    pub fn new(root: impl Into<PathBuf>, config: &ReleaseConfig) -> Self {
        ProjectFiles {
            root: root.into(),
            manifest: config.files.manifest.clone(),
            build_manifest: config.files.build_manifest.clone(),
            changelog: config.files.changelog.clone(),
            cmake_project: config.cmake.project.clone(),
            changelog_text: config.changelog.clone(),
        }
    }

    /// File names as configured, for display
    pub fn manifest_name(&self) -> &str {
        &self.manifest
    }

    pub fn build_manifest_name(&self) -> &str {
        &self.build_manifest
    }

    pub fn changelog_name(&self) -> &str {
        &self.changelog
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.manifest)
    }

    pub fn build_manifest_path(&self) -> PathBuf {
        self.root.join(&self.build_manifest)
    }

    pub fn changelog_path(&self) -> PathBuf {
        self.root.join(&self.changelog)
    }

    /// Version string currently recorded in the package manifest.
    pub fn read_manifest_version(&self) -> Result<String> {
        manifest::read_version(&self.manifest_path())
    }

    /// Parsed version currently recorded in the package manifest.
    pub fn current_version(&self) -> Result<Version> {
        Version::parse(&self.read_manifest_version()?)
    }

    pub fn write_manifest_version(&self, version: &Version) -> Result<()> {
        manifest::write_version(&self.manifest_path(), &version.to_string())
    }

    /// Rewrites the `project(... VERSION` call of the build manifest.
    ///
    /// The file is not written at all when the call is missing.
    pub fn update_build_manifest(&self, version: &Version) -> Result<Option<ReleaseWarning>> {
        let path = self.build_manifest_path();
        let text = fs::read_to_string(&path)?;

        match cmake::patch_project_version(&text, &self.cmake_project, version)? {
            Some(patched) => {
                fs::write(&path, patched)?;
                Ok(None)
            }
            None => Ok(Some(ReleaseWarning::ProjectVersionNotFound {
                file: self.build_manifest.clone(),
                project: self.cmake_project.clone(),
            })),
        }
    }

    /// Adds a dated release section to the changelog, creating the file if
    /// it does not exist yet.
    pub fn update_changelog(&self, version: &Version, date: NaiveDate) -> Result<Option<ReleaseWarning>> {
        let path = self.changelog_path();

        if !path.exists() {
            fs::write(&path, changelog::new_changelog(version, date, &self.changelog_text))?;
            return Ok(None);
        }

        let existing = fs::read_to_string(&path)?;
        match changelog::insert_release(&existing, version, date, &self.changelog_text) {
            Some(updated) => {
                fs::write(&path, updated)?;
                Ok(None)
            }
            None => Ok(Some(ReleaseWarning::UnreleasedMarkerNotFound {
                file: self.changelog.clone(),
            })),
        }
    }
}
