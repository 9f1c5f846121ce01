//! Strategy dispatch over the domain transformations
//!
//! Pure: takes the current version text, the selected strategy and the
//! current instant, and returns the next version or an error. Callers do the
//! logging and the write-back.

use crate::domain::calendar::calendar_increment_from;
use crate::domain::merge::{merge, merge_calendar};
use crate::domain::snapshot::apply_snapshot;
use crate::domain::{CalendarPrecision, LabelKind, NormalVersion, SemVer};
use crate::error::Result;
use chrono::{DateTime, Utc};

/// How the next version is derived from the current one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Only check that the current version is a valid SemVer
    VerifyCurrent,
    /// Strip all labels
    FinalizeCurrent,
    /// Increment a normal version number by one
    Increment(NormalVersion),
    /// Increment a normal version number to a calendar number, day precision first
    Calendar(NormalVersion),
    /// Set or increment a label
    UpdateLabel {
        kind: LabelKind,
        set: Option<String>,
    },
    /// Merge with another version, incrementing it by one
    Merge { other: String },
    /// Merge with another version, incrementing it to a calendar number
    MergeCalendar { other: String },
}

impl Strategy {
    /// Goal name as used on the command line
    pub fn goal(&self) -> &'static str {
        match self {
            Strategy::VerifyCurrent => "verify-current",
            Strategy::FinalizeCurrent => "finalize-current",
            Strategy::Increment(NormalVersion::Major) => "increment-major",
            Strategy::Increment(NormalVersion::Minor) => "increment-minor",
            Strategy::Increment(NormalVersion::Patch) => "increment-patch",
            Strategy::Calendar(NormalVersion::Major) => "calendar-major",
            Strategy::Calendar(NormalVersion::Minor) => "calendar-minor",
            Strategy::Calendar(NormalVersion::Patch) => "calendar-patch",
            Strategy::UpdateLabel {
                kind: LabelKind::PreRelease,
                ..
            } => "update-pre-release",
            Strategy::UpdateLabel {
                kind: LabelKind::BuildMetadata,
                ..
            } => "update-build-metadata",
            Strategy::Merge { .. } => "merge",
            Strategy::MergeCalendar { .. } => "merge-calendar",
        }
    }

    /// Whether this strategy produces a version to write back
    pub fn is_update(&self) -> bool {
        !matches!(self, Strategy::VerifyCurrent)
    }

    /// Apply this strategy to `original`
    pub fn apply(&self, original: &SemVer, now: &DateTime<Utc>) -> Result<SemVer> {
        match self {
            Strategy::VerifyCurrent => Ok(original.clone()),
            Strategy::FinalizeCurrent => Ok(original.finalize()),
            Strategy::Increment(category) => category.increment(original),
            Strategy::Calendar(category) => {
                calendar_increment_from(CalendarPrecision::Day, original, *category, now)
            }
            Strategy::UpdateLabel { kind, set } => kind.update(original, set.as_deref()),
            Strategy::Merge { other } => merge(original, &SemVer::parse(other)?),
            Strategy::MergeCalendar { other } => {
                merge_calendar(original, &SemVer::parse(other)?, now)
            }
        }
    }
}

/// A single update computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    /// Current version text
    pub current: String,
    pub strategy: Strategy,
    /// Append the `SNAPSHOT` pre-release marker to the result
    pub snapshot: bool,
}

/// Result of a successful update computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The computed version equals the original; nothing to persist
    Unchanged(SemVer),
    Updated { original: SemVer, updated: SemVer },
}

impl UpdateOutcome {
    /// The version to report, updated or not
    pub fn version(&self) -> &SemVer {
        match self {
            UpdateOutcome::Unchanged(version) => version,
            UpdateOutcome::Updated { updated, .. } => updated,
        }
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, UpdateOutcome::Updated { .. })
    }
}

/// Compute the next version for `request` at instant `now`
pub fn compute(request: &UpdateRequest, now: &DateTime<Utc>) -> Result<UpdateOutcome> {
    let original = SemVer::parse(&request.current)?;
    let mut updated = request.strategy.apply(&original, now)?;
    if request.strategy.is_update() {
        updated = apply_snapshot(updated, request.snapshot)?;
    }

    if updated == original {
        Ok(UpdateOutcome::Unchanged(original))
    } else {
        Ok(UpdateOutcome::Updated { original, updated })
    }
}
