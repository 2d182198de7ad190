//! Version control abstraction layer
//!
//! The release workflow only needs one thing from version control: the list
//! of pending changes in the working tree. It is expressed as the
//! [Repository] trait so the workflow can run against a real repository
//! ([repository::Git2Repository], backed by `git2`) or an in-memory one
//! ([mock::MockRepository]) in tests.
//!
//! ```rust
//! # use cut_release::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> cut_release::Result<()> {
//! if !repo.is_clean()? {
//!     for path in repo.pending_changes()? {
//!         println!("pending: {}", path);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Working-tree queries needed before a release
pub trait Repository {
    /// Paths with uncommitted changes, the same set `git status --porcelain`
    /// lists: staged and unstaged modifications, deletions, renames and
    /// untracked files. Ignored files are not included.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Pending paths, empty when the tree is clean
    /// * `Err` - If the status cannot be queried
    fn pending_changes(&self) -> Result<Vec<String>>;

    /// Whether the working tree has no pending changes
    fn is_clean(&self) -> Result<bool> {
        Ok(self.pending_changes()?.is_empty())
    }
}
