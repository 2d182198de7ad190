use std::fmt;

/// Non-fatal conditions hit while updating release files.
/// The affected file is left as it was and the run continues.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseWarning {
    /// The build manifest has no `project(<name> VERSION x.y.z` call
    ProjectVersionNotFound { file: String, project: String },
    /// The changelog has no `## [Unreleased]` section to release from
    UnreleasedMarkerNotFound { file: String },
}

impl fmt::Display for ReleaseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseWarning::ProjectVersionNotFound { file, project } => {
                write!(
                    f,
                    "No 'project({} VERSION x.y.z' found in {}; file left unchanged",
                    project, file
                )
            }
            ReleaseWarning::UnreleasedMarkerNotFound { file } => {
                write!(
                    f,
                    "No '## [Unreleased]' section found in {}; file left unchanged",
                    file
                )
            }
        }
    }
}
