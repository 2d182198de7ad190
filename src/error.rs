use thiserror::Error;

/// Unified error type for cut-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Working tree has {0} uncommitted change(s)")]
    DirtyWorkingTree(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Git status failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in cut-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create an invalid argument error with context
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        ReleaseError::InvalidArgument(msg.into())
    }

    /// Create a parse error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        ReleaseError::Parse(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Whether this error means the run was refused because of pending changes
    pub fn is_dirty_working_tree(&self) -> bool {
        matches!(self, ReleaseError::DirtyWorkingTree(_))
    }
}
