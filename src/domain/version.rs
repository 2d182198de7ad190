use crate::error::{ReleaseError, Result};
use std::fmt;
use std::str::FromStr;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string of the form `X.Y.Z`
    pub fn parse(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() != 3 {
            return Err(ReleaseError::parse(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                text
            )));
        }

        let component = |name: &str, raw: &str| {
            raw.parse::<u64>().map_err(|_| {
                ReleaseError::parse(format!("Invalid {} version: '{}'", name, raw))
            })
        };

        Ok(Version {
            major: component("major", parts[0])?,
            minor: component("minor", parts[1])?,
            patch: component("patch", parts[2])?,
        })
    }

    /// Bump version according to release type
    pub fn bump(&self, release_type: ReleaseType) -> Result<Self> {
        let next = |n: u64| {
            n.checked_add(1).ok_or_else(|| {
                ReleaseError::parse(format!("Version {} cannot be incremented", self))
            })
        };

        Ok(match release_type {
            ReleaseType::Major => Version::new(next(self.major)?, 0, 0),
            ReleaseType::Minor => Version::new(self.major, next(self.minor)?, 0),
            ReleaseType::Patch => Version::new(self.major, self.minor, next(self.patch)?),
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

/// Which version component a release increments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseType {
    Major,
    Minor,
    Patch,
}

impl ReleaseType {
    pub const ALL: [ReleaseType; 3] = [
        ReleaseType::Major,
        ReleaseType::Minor,
        ReleaseType::Patch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseType::Major => "major",
            ReleaseType::Minor => "minor",
            ReleaseType::Patch => "patch",
        }
    }

    /// One-line explanation used in the usage text
    pub fn description(&self) -> &'static str {
        match self {
            ReleaseType::Major => "Breaking changes (1.0.0 -> 2.0.0)",
            ReleaseType::Minor => "New features (1.0.0 -> 1.1.0)",
            ReleaseType::Patch => "Bug fixes (1.0.0 -> 1.0.1)",
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseType {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(ReleaseType::Major),
            "minor" => Ok(ReleaseType::Minor),
            "patch" => Ok(ReleaseType::Patch),
            other => Err(ReleaseError::invalid_argument(format!(
                "Invalid version type: {}",
                other
            ))),
        }
    }
}

/// Computes the next version string from a current version string and a
/// release type name.
///
/// # Example
/// ```ignore
/// assert_eq!(increment_version("1.2.3", "patch").unwrap(), "1.2.4");
/// assert_eq!(increment_version("2.0.0", "major").unwrap(), "3.0.0");
/// ```
pub fn increment_version(current: &str, release_type: &str) -> Result<String> {
    let release_type: ReleaseType = release_type.parse()?;
    let version = Version::parse(current)?;
    Ok(version.bump(release_type)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("1.2").is_err());
        assert!(Version::parse("1.2.3.4").is_err());
        assert!(Version::parse("v1.2.3").is_err());
        assert!(Version::parse("1.x.3").is_err());
        assert!(Version::parse("1.2.-3").is_err());
        assert!(Version::parse("").is_err());
    }

    #[test]
    fn test_version_parse_error_is_parse_variant() {
        let err = Version::parse("1.2").unwrap_err();
        assert!(matches!(err, ReleaseError::Parse(_)));
    }

    #[test]
    fn test_version_bump_major() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(ReleaseType::Major).unwrap(), Version::new(2, 0, 0));
    }

    #[test]
    fn test_version_bump_minor() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(ReleaseType::Minor).unwrap(), Version::new(1, 3, 0));
    }

    #[test]
    fn test_version_bump_patch() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(ReleaseType::Patch).unwrap(), Version::new(1, 2, 4));
    }

    #[test]
    fn test_version_bump_overflow() {
        let v = Version::new(1, 2, u64::MAX);
        assert!(v.bump(ReleaseType::Patch).is_err());
        assert_eq!(
            v.bump(ReleaseType::Minor).unwrap(),
            Version::new(1, 3, 0)
        );
    }

    #[test]
    fn test_bump_rules_hold_for_several_versions() {
        for (a, b, c) in [(0, 0, 0), (1, 2, 3), (9, 99, 999), (0, 10, 0)] {
            let v = Version::new(a, b, c);
            assert_eq!(v.bump(ReleaseType::Patch).unwrap(), Version::new(a, b, c + 1));
            assert_eq!(v.bump(ReleaseType::Minor).unwrap(), Version::new(a, b + 1, 0));
            assert_eq!(v.bump(ReleaseType::Major).unwrap(), Version::new(a + 1, 0, 0));
        }
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
    }

    #[test]
    fn test_release_type_from_str() {
        assert_eq!("major".parse::<ReleaseType>().unwrap(), ReleaseType::Major);
        assert_eq!("minor".parse::<ReleaseType>().unwrap(), ReleaseType::Minor);
        assert_eq!("patch".parse::<ReleaseType>().unwrap(), ReleaseType::Patch);
    }

    #[test]
    fn test_release_type_rejects_other_values() {
        for bad in ["foo", "", "Major", "PATCH", " patch"] {
            let err = bad.parse::<ReleaseType>().unwrap_err();
            assert!(matches!(err, ReleaseError::InvalidArgument(_)));
            assert!(err.to_string().contains(bad));
        }
    }

    #[test]
    fn test_increment_version_scenarios() {
        assert_eq!(increment_version("1.2.3", "patch").unwrap(), "1.2.4");
        assert_eq!(increment_version("2.0.0", "major").unwrap(), "3.0.0");
        assert_eq!(increment_version("1.2.3", "minor").unwrap(), "1.3.0");
    }

    #[test]
    fn test_increment_version_invalid_type() {
        let err = increment_version("1.2.3", "foo").unwrap_err();
        assert_eq!(err.to_string(), "Invalid argument: Invalid version type: foo");
    }
}
