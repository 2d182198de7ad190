use crate::error::{ReleaseError, Result};
use crate::git::Repository;

/// Mock repository for testing without a real working tree
#[derive(Default)]
pub struct MockRepository {
    pending: Vec<String>,
    failure: Option<String>,
}

impl MockRepository {
    /// Create a mock with a clean working tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an uncommitted change
    pub fn add_change(&mut self, path: impl Into<String>) {
        self.pending.push(path.into());
    }

    /// Make every status query fail, as outside a repository
    pub fn fail_with(&mut self, message: impl Into<String>) {
        self.failure = Some(message.into());
    }
}

impl Repository for MockRepository {
    fn pending_changes(&self) -> Result<Vec<String>> {
        match &self.failure {
            Some(message) => Err(ReleaseError::Git(git2::Error::from_str(message))),
            None => Ok(self.pending.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_default_is_clean() {
        let repo = MockRepository::default();
        assert!(repo.is_clean().unwrap());
    }

    #[test]
    fn test_mock_repository_changes() {
        let mut repo = MockRepository::new();
        repo.add_change("src/main.rs");
        repo.add_change("notes.txt");

        assert!(!repo.is_clean().unwrap());
        assert_eq!(repo.pending_changes().unwrap().len(), 2);
    }

    #[test]
    fn test_mock_repository_failure() {
        let mut repo = MockRepository::new();
        repo.fail_with("could not find repository");

        assert!(matches!(repo.is_clean(), Err(ReleaseError::Git(_))));
    }
}
