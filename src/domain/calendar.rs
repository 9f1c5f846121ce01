//! Calendar style increments of normal version numbers
//!
//! A UTC instant is turned into an integer by concatenating its date/time
//! fields at increasing precision, e.g. `2024` for the year, `202401` for the
//! month, down to `20240115103045123` for the millisecond. The coarsest
//! precision that beats the current number wins.

use crate::domain::{NormalVersion, SemVer};
use crate::error::{Result, SemverError};
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::fmt;

/// Precision of a calendar derived version number, coarsest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CalendarPrecision {
    /// `yyyy`
    Year,
    /// `yyyyMM`
    Month,
    /// `yyyyMMdd`
    Day,
    /// `yyyyMMddHH`
    Hour,
    /// `yyyyMMddHHmm`
    Minute,
    /// `yyyyMMddHHmmss`
    Second,
    /// `yyyyMMddHHmmssSSS`
    Millisecond,
}

type CalendarFormatter = fn(&DateTime<Utc>) -> u64;

/// Evaluated top to bottom.
const CALENDAR_FORMATTERS: [(CalendarPrecision, CalendarFormatter); 7] = [
    (CalendarPrecision::Year, to_year),
    (CalendarPrecision::Month, to_month),
    (CalendarPrecision::Day, to_day),
    (CalendarPrecision::Hour, to_hour),
    (CalendarPrecision::Minute, to_minute),
    (CalendarPrecision::Second, to_second),
    (CalendarPrecision::Millisecond, to_millisecond),
];

fn to_year(now: &DateTime<Utc>) -> u64 {
    u64::try_from(now.year()).unwrap_or(0)
}

fn to_month(now: &DateTime<Utc>) -> u64 {
    to_year(now) * 100 + u64::from(now.month())
}

fn to_day(now: &DateTime<Utc>) -> u64 {
    to_month(now) * 100 + u64::from(now.day())
}

fn to_hour(now: &DateTime<Utc>) -> u64 {
    to_day(now) * 100 + u64::from(now.hour())
}

fn to_minute(now: &DateTime<Utc>) -> u64 {
    to_hour(now) * 100 + u64::from(now.minute())
}

fn to_second(now: &DateTime<Utc>) -> u64 {
    to_minute(now) * 100 + u64::from(now.second())
}

fn to_millisecond(now: &DateTime<Utc>) -> u64 {
    // leap seconds carry nanoseconds past 1e9
    to_second(now) * 1000 + u64::from((now.nanosecond() / 1_000_000).min(999))
}

impl CalendarPrecision {
    /// The version number this precision derives from `now`
    pub fn number(self, now: &DateTime<Utc>) -> u64 {
        CALENDAR_FORMATTERS
            .iter()
            .find(|(precision, _)| *precision == self)
            .map_or(0, |(_, format)| format(now))
    }

    pub fn pattern(self) -> &'static str {
        match self {
            CalendarPrecision::Year => "yyyy",
            CalendarPrecision::Month => "yyyyMM",
            CalendarPrecision::Day => "yyyyMMdd",
            CalendarPrecision::Hour => "yyyyMMddHH",
            CalendarPrecision::Minute => "yyyyMMddHHmm",
            CalendarPrecision::Second => "yyyyMMddHHmmss",
            CalendarPrecision::Millisecond => "yyyyMMddHHmmssSSS",
        }
    }
}

impl fmt::Display for CalendarPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern())
    }
}

/// First calendar number, starting at `start` precision, that exceeds `reference`
pub fn calendar_target(
    start: CalendarPrecision,
    reference: u64,
    now: &DateTime<Utc>,
) -> Option<(CalendarPrecision, u64)> {
    CALENDAR_FORMATTERS
        .iter()
        .filter(|(precision, _)| *precision >= start)
        .map(|(precision, format)| (*precision, format(now)))
        .find(|(_, number)| *number > reference)
}

/// Increment `category` of `version` to a calendar number, trying every precision
pub fn calendar_increment(
    version: &SemVer,
    category: NormalVersion,
    now: &DateTime<Utc>,
) -> Result<SemVer> {
    calendar_increment_from(CalendarPrecision::Year, version, category, now)
}

/// Increment `category` of `version` to a calendar number no coarser than `start`
pub fn calendar_increment_from(
    start: CalendarPrecision,
    version: &SemVer,
    category: NormalVersion,
    now: &DateTime<Utc>,
) -> Result<SemVer> {
    let reference = category.number(version);
    match calendar_target(start, reference, now) {
        Some((_, target)) => category.increment_to(target, version),
        None => Err(SemverError::ReferenceNotOlderThanNow {
            category,
            number: reference,
            version: version.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 45).unwrap()
            + chrono::Duration::milliseconds(123)
    }

    #[test]
    fn test_precision_numbers() {
        let now = instant();
        assert_eq!(CalendarPrecision::Year.number(&now), 2024);
        assert_eq!(CalendarPrecision::Month.number(&now), 202401);
        assert_eq!(CalendarPrecision::Day.number(&now), 20240115);
        assert_eq!(CalendarPrecision::Hour.number(&now), 2024011510);
        assert_eq!(CalendarPrecision::Minute.number(&now), 202401151030);
        assert_eq!(CalendarPrecision::Second.number(&now), 20240115103045);
        assert_eq!(CalendarPrecision::Millisecond.number(&now), 20240115103045123);
    }

    #[test]
    fn test_single_digit_fields_are_zero_padded() {
        let now = Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap();
        assert_eq!(CalendarPrecision::Second.number(&now), 20250304050607);
        assert_eq!(CalendarPrecision::Millisecond.number(&now), 20250304050607000);
    }

    #[test]
    fn test_target_picks_coarsest_precision() {
        let now = instant();
        assert_eq!(
            calendar_target(CalendarPrecision::Year, 3, &now),
            Some((CalendarPrecision::Year, 2024))
        );
        assert_eq!(
            calendar_target(CalendarPrecision::Year, 2024, &now),
            Some((CalendarPrecision::Month, 202401))
        );
        assert_eq!(
            calendar_target(CalendarPrecision::Year, 20240115, &now),
            Some((CalendarPrecision::Hour, 2024011510))
        );
    }

    #[test]
    fn test_target_respects_start_precision() {
        let now = instant();
        assert_eq!(
            calendar_target(CalendarPrecision::Day, 0, &now),
            Some((CalendarPrecision::Day, 20240115))
        );
    }

    #[test]
    fn test_calendar_patch_from_day() {
        let version = SemVer::new(1, 2, 0);
        let result =
            calendar_increment_from(CalendarPrecision::Day, &version, NormalVersion::Patch, &instant())
                .unwrap();
        assert_eq!(result, SemVer::new(1, 2, 20240115));
    }

    #[test]
    fn test_calendar_increment_minor_resets_patch() {
        let version = SemVer::parse("1.2024.5-rc.1").unwrap();
        let result = calendar_increment(&version, NormalVersion::Minor, &instant()).unwrap();
        assert_eq!(result, SemVer::new(1, 202401, 0));
    }

    #[test]
    fn test_calendar_increment_major() {
        let version = SemVer::new(2023, 4, 1);
        let result = calendar_increment(&version, NormalVersion::Major, &instant()).unwrap();
        assert_eq!(result, SemVer::new(2024, 0, 0));
    }

    #[test]
    fn test_calendar_increment_up_to_millisecond() {
        let version = SemVer::new(1, 2, 20240115103045122);
        let result = calendar_increment(&version, NormalVersion::Patch, &instant()).unwrap();
        assert_eq!(result, SemVer::new(1, 2, 20240115103045123));
    }

    #[test]
    fn test_reference_not_older_than_now() {
        for patch in [20240115103045123, u64::MAX] {
            let version = SemVer::new(1, 2, patch);
            let result = calendar_increment(&version, NormalVersion::Patch, &instant());
            assert!(matches!(
                result,
                Err(SemverError::ReferenceNotOlderThanNow { number, .. }) if number == patch
            ));
        }
    }

    #[test]
    fn test_precision_display() {
        assert_eq!(CalendarPrecision::Month.to_string(), "yyyyMM");
    }
}
