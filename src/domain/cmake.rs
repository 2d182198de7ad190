use regex::{NoExpand, Regex};

use crate::domain::Version;
use crate::error::{ReleaseError, Result};

/// Rewrites the version of the first `project(<name> VERSION x.y.z` call.
///
/// Returns `Ok(None)` when no such call exists for `project`.
pub fn patch_project_version(text: &str, project: &str, version: &Version) -> Result<Option<String>> {
    let pattern = format!(r"project\({} VERSION [0-9]+\.[0-9]+\.[0-9]+", regex::escape(project));
    let re = Regex::new(&pattern)
        .map_err(|e| ReleaseError::config(format!("Invalid CMake project name '{}': {}", project, e)))?;

    if !re.is_match(text) {
        return Ok(None);
    }

    let replacement = format!("project({} VERSION {}", project, version);
    Ok(Some(re.replace(text, NoExpand(&replacement)).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CMAKE: &str = "cmake_minimum_required(VERSION 3.22)\nproject(DeliVerb VERSION 1.2.3 LANGUAGES CXX)\n\nadd_library(DeliVerb MODULE src/main.cpp)\n";

    #[test]
    fn test_patch_project_version() {
        let patched = patch_project_version(CMAKE, "DeliVerb", &Version::new(1, 2, 4))
            .unwrap()
            .unwrap();

        assert!(patched.contains("project(DeliVerb VERSION 1.2.4 LANGUAGES CXX)"));
        assert!(patched.starts_with("cmake_minimum_required(VERSION 3.22)\n"));
        assert!(patched.ends_with("add_library(DeliVerb MODULE src/main.cpp)\n"));
        assert_eq!(patched.len(), CMAKE.len());
    }

    #[test]
    fn test_other_project_name_is_not_touched() {
        let text = "project(Other VERSION 1.2.3)\n";
        assert_eq!(
            patch_project_version(text, "DeliVerb", &Version::new(2, 0, 0)).unwrap(),
            None
        );
    }

    #[test]
    fn test_missing_version_clause() {
        let text = "project(DeliVerb LANGUAGES CXX)\n";
        assert_eq!(
            patch_project_version(text, "DeliVerb", &Version::new(2, 0, 0)).unwrap(),
            None
        );
    }

    #[test]
    fn test_non_ascii_digits_are_not_a_version() {
        let text = "project(DeliVerb VERSION \u{661}.\u{662}.\u{663})\n";
        assert_eq!(
            patch_project_version(text, "DeliVerb", &Version::new(1, 0, 0)).unwrap(),
            None
        );
    }

    #[test]
    fn test_only_first_occurrence_is_rewritten() {
        let text = "project(DeliVerb VERSION 1.0.0)\n# project(DeliVerb VERSION 1.0.0)\n";
        let patched = patch_project_version(text, "DeliVerb", &Version::new(1, 1, 0))
            .unwrap()
            .unwrap();
        assert_eq!(
            patched,
            "project(DeliVerb VERSION 1.1.0)\n# project(DeliVerb VERSION 1.0.0)\n"
        );
    }

    #[test]
    fn test_project_name_with_regex_metacharacters() {
        let text = "project(My.Plugin+ VERSION 0.9.9)\n";
        let patched = patch_project_version(text, "My.Plugin+", &Version::new(1, 0, 0))
            .unwrap()
            .unwrap();
        assert_eq!(patched, "project(My.Plugin+ VERSION 1.0.0)\n");
    }

    #[test]
    fn test_project_name_with_dollar_sign_is_literal() {
        let text = "project($Name VERSION 0.1.0)\n";
        let patched = patch_project_version(text, "$Name", &Version::new(0, 2, 0))
            .unwrap()
            .unwrap();
        assert_eq!(patched, "project($Name VERSION 0.2.0)\n");
    }
}
