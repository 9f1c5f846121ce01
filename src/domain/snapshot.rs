use crate::domain::SemVer;
use crate::error::{Result, SemverError};

/// Pre-release marker appended by the snapshot flag
pub const SNAPSHOT: &str = "SNAPSHOT";

/// Label `version` as a snapshot when `enabled`
///
/// Only bare normal versions can be labeled; anything already carrying a
/// pre-release or build metadata label is rejected.
pub fn apply_snapshot(version: SemVer, enabled: bool) -> Result<SemVer> {
    if !enabled {
        return Ok(version);
    }
    if version.has_labels() {
        return Err(SemverError::SnapshotNotApplicable { version });
    }
    version.with_pre_release(SNAPSHOT)
}
