//! Main workflow orchestration logic
//!
//! Reads the current version from a descriptor, decides whether the unit is
//! processed at all, computes the next version and writes it back. This is
//! the layer that logs; the computation itself stays in [`crate::updater`].

use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};

use crate::boundary::BoundaryWarning;
use crate::descriptor::Descriptor;
use crate::domain::{LabelKind, SemVer};
use crate::error::{Result, SemverError};
use crate::updater::{compute, Strategy, UpdateOutcome, UpdateRequest};

/// Arguments for the update workflow
///
/// Mirrors the CLI arguments but in a format suitable for orchestration
/// logic, so the workflow can be driven without clap.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateWorkflowArgs {
    /// Selected goal
    pub strategy: Strategy,

    /// Append the SNAPSHOT marker to the updated version
    pub snapshot: bool,

    /// The unit is a module of a parent project
    pub is_module: bool,

    /// Process the unit even when it is a module
    pub process_module: bool,

    /// Compute and report, but do not write back
    pub dry_run: bool,
}

impl UpdateWorkflowArgs {
    pub fn new(strategy: Strategy) -> Self {
        UpdateWorkflowArgs {
            strategy,
            snapshot: false,
            is_module: false,
            process_module: false,
            dry_run: false,
        }
    }
}

/// Result of a successful workflow run
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowResult {
    /// The unit was not processed
    Skipped(BoundaryWarning),

    /// verify-current succeeded
    Verified(SemVer),

    /// The computed version equals the original; nothing was written
    Unchanged(SemVer),

    /// A new version was computed
    Updated {
        original: SemVer,
        updated: SemVer,
        /// False on dry runs
        written: bool,
    },
}

/// Main update workflow
///
/// 1. Skip modules unless module processing was requested
/// 2. Skip modules that inherit their version
/// 3. Compute the next version
/// 4. Write it back unless unchanged or dry run
///
/// # Arguments
///
/// * `args` - Workflow arguments (strategy, snapshot, module flags, dry_run)
/// * `descriptor` - Where the version is read from and written to
/// * `now` - Instant used by calendar style goals
///
/// # Returns
///
/// The workflow outcome, or the error that aborted it before any write
pub fn run_update_workflow<D: Descriptor>(
    args: &UpdateWorkflowArgs,
    descriptor: &mut D,
    now: &DateTime<Utc>,
) -> Result<WorkflowResult> {
    let goal = args.strategy.goal();
    let location = descriptor.location();
    let current = descriptor.read_version()?;
    info!(
        "Goal '{}' processing '{}' with version '{}'...",
        goal,
        location,
        current.as_deref().unwrap_or("<none>")
    );

    if args.is_module {
        debug!("'{}' is a module of a parent project", location);
        if !args.process_module {
            let warning = BoundaryWarning::ModuleNotProcessed { location };
            warn!("{}", warning);
            return Ok(WorkflowResult::Skipped(warning));
        }
        if current.is_none() {
            let warning = BoundaryWarning::InheritedVersion { location };
            warn!("{}", warning);
            return Ok(WorkflowResult::Skipped(warning));
        }
    }

    let current = current.ok_or_else(|| {
        SemverError::descriptor(format!("No version declared in '{}'", location))
    })?;

    if let Strategy::UpdateLabel {
        kind: LabelKind::BuildMetadata,
        set: None,
    } = &args.strategy
    {
        warn!("Incrementing build metadata is deprecated, as it takes no part in version precedence");
    }

    let request = UpdateRequest {
        current: current.clone(),
        strategy: args.strategy.clone(),
        snapshot: args.snapshot,
    };
    let outcome = compute(&request, now).map_err(|e| {
        error!("Goal '{}' failed on version '{}': {}", goal, current, e);
        e
    })?;

    if !args.strategy.is_update() {
        info!("Version '{}' is a valid SemVer", current);
        return Ok(WorkflowResult::Verified(outcome.version().clone()));
    }

    match outcome {
        UpdateOutcome::Unchanged(version) => {
            info!(
                "Original version: {} remains unchanged after executing goal: {}",
                version, goal
            );
            Ok(WorkflowResult::Unchanged(version))
        }
        UpdateOutcome::Updated { original, updated } => {
            if args.dry_run {
                info!(
                    "Dry run: would update version: {} into: {} after executing goal: {}",
                    original, updated, goal
                );
            } else {
                descriptor.write_version(&updated.to_string())?;
                info!(
                    "Updated original version: {} into: {} after executing goal: {}",
                    original, updated, goal
                );
            }
            Ok(WorkflowResult::Updated {
                original,
                updated,
                written: !args.dry_run,
            })
        }
    }
}
