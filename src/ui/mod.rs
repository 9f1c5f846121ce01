//! User interface module - reporting workflow results.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Mapping a workflow result onto what the user sees

use crate::cli::WorkflowResult;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_error, display_status, display_success,
    display_version_change,
};

/// Report the outcome of a workflow run.
///
/// # Arguments
/// * `result` - The workflow outcome
/// * `force_stdout` - Print a verified version alone on stdout, for scripts
pub fn display_result(result: &WorkflowResult, force_stdout: bool) {
    match result {
        WorkflowResult::Skipped(warning) => display_boundary_warning(warning),
        WorkflowResult::Verified(version) => {
            if force_stdout {
                println!("{}", version);
            } else {
                display_success(&format!("Version '{}' is a valid SemVer", version));
            }
        }
        WorkflowResult::Unchanged(version) => {
            display_status(&format!("Version {} remains unchanged", version));
        }
        WorkflowResult::Updated {
            original,
            updated,
            written,
        } => display_version_change(original, updated, *written),
    }
}
