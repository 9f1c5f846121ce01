//! Merging the current version with an externally supplied one
//!
//! If the current version is newer, it wins unchanged. Otherwise the other
//! version is incremented on the category the current version last bumped,
//! and the current version's labels are carried over to the result.

use crate::domain::calendar::calendar_increment;
use crate::domain::{NormalVersion, SemVer};
use crate::error::Result;
use chrono::{DateTime, Utc};

/// Merge, incrementing the other version by one
pub fn merge(current: &SemVer, other: &SemVer) -> Result<SemVer> {
    merge_with(current, other, |version, category| category.increment(version))
}

/// Merge, incrementing the other version to a calendar number
pub fn merge_calendar(current: &SemVer, other: &SemVer, now: &DateTime<Utc>) -> Result<SemVer> {
    merge_with(current, other, |version, category| {
        calendar_increment(version, category, now)
    })
}

fn merge_with<F>(current: &SemVer, other: &SemVer, increment: F) -> Result<SemVer>
where
    F: FnOnce(&SemVer, NormalVersion) -> Result<SemVer>,
{
    if current.is_higher_than(other) {
        return Ok(current.clone());
    }

    let category = NormalVersion::last_incremented(current)?;
    let mut merged = increment(other, category)?;

    if let Some(pre) = current.pre_release() {
        merged = merged.with_pre_release(pre)?;
    }
    if let Some(build) = current.build_metadata() {
        merged = merged.with_build_metadata(build)?;
    }
    Ok(merged)
}
