use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{ReleaseError, Result};

/// Name of the project-local configuration file.
pub const CONFIG_FILE_NAME: &str = "release.toml";

/// Represents the complete configuration for cut-release.
///
/// Every section is optional; the defaults describe a project with
/// `package.json`, `CMakeLists.txt` and `CHANGELOG.md` at its root.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct ReleaseConfig {
    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub cmake: CmakeConfig,

    #[serde(default)]
    pub changelog: ChangelogConfig,
}

fn default_manifest() -> String {
    "package.json".to_string()
}

fn default_build_manifest() -> String {
    "CMakeLists.txt".to_string()
}

fn default_changelog() -> String {
    "CHANGELOG.md".to_string()
}

/// File names, relative to the project root.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FilesConfig {
    #[serde(default = "default_manifest")]
    pub manifest: String,

    #[serde(default = "default_build_manifest")]
    pub build_manifest: String,

    #[serde(default = "default_changelog")]
    pub changelog: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            manifest: default_manifest(),
            build_manifest: default_build_manifest(),
            changelog: default_changelog(),
        }
    }
}

fn default_project() -> String {
    "DeliVerb".to_string()
}

/// Which `project(...)` call in the build manifest carries the version.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CmakeConfig {
    #[serde(default = "default_project")]
    pub project: String,
}

impl Default for CmakeConfig {
    fn default() -> Self {
        CmakeConfig {
            project: default_project(),
        }
    }
}

fn default_placeholder() -> String {
    "<!-- Add new changes here -->".to_string()
}

fn default_initial_entry() -> String {
    "Initial release".to_string()
}

/// Text written into the changelog.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    /// Line left under `## [Unreleased]` after a release
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Entry of the first release when the changelog is created
    #[serde(default = "default_initial_entry")]
    pub initial_entry: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            placeholder: default_placeholder(),
            initial_entry: default_initial_entry(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release.toml` in the project root
/// 3. Default configuration if no file found
///
/// # Returns
/// * `Ok(ReleaseConfig)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(root: &Path, config_path: Option<&Path>) -> Result<ReleaseConfig> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else {
        let local = root.join(CONFIG_FILE_NAME);
        if local.exists() {
            fs::read_to_string(local)?
        } else {
            return Ok(ReleaseConfig::default());
        }
    };

    let config: ReleaseConfig = toml::from_str(&config_str)
        .map_err(|e| ReleaseError::config(format!("Cannot parse configuration: {}", e)))?;

    if config.cmake.project.trim().is_empty() {
        return Err(ReleaseError::config("cmake.project must not be empty"));
    }

    Ok(config)
}
