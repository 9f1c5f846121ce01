//! Command-line glue around the update engine

pub mod orchestration;

pub use orchestration::{run_update_workflow, UpdateWorkflowArgs, WorkflowResult};
