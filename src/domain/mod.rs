//! Domain logic - pure version and text rules independent of the filesystem

pub mod changelog;
pub mod cmake;
pub mod version;

pub use version::{increment_version, ReleaseType, Version};
