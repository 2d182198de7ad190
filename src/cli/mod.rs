//! Command-line workflow, independent of argument parsing

pub mod orchestration;

pub use orchestration::{parse_release_type, run_release_workflow, ReleaseWorkflowArgs, WorkflowResult};
