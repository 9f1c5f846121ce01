//! Pre-release and build metadata label updates
//!
//! A label is either overwritten with an explicit value or has its trailing
//! number incremented. See https://semver.org/#spec-item-9 and
//! https://semver.org/#spec-item-10 for the label grammar.

use crate::domain::SemVer;
use crate::error::Result;
use std::fmt;

/// Which label of a SemVer an update targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    PreRelease,
    BuildMetadata,
}

impl LabelKind {
    /// Current label of this kind, if any
    pub fn get<'a>(&self, version: &'a SemVer) -> Option<&'a str> {
        match self {
            LabelKind::PreRelease => version.pre_release(),
            LabelKind::BuildMetadata => version.build_metadata(),
        }
    }

    /// Increment the trailing number of the existing label
    pub fn increment(&self, version: &SemVer) -> Result<SemVer> {
        match self {
            LabelKind::PreRelease => version.increment_pre_release(),
            #[allow(deprecated)]
            LabelKind::BuildMetadata => version.increment_build_metadata(),
        }
    }

    /// Overwrite the label, discarding whatever was there
    pub fn set(&self, version: &SemVer, label: &str) -> Result<SemVer> {
        match self {
            LabelKind::PreRelease => version.with_pre_release(label),
            LabelKind::BuildMetadata => version.with_build_metadata(label),
        }
    }

    /// Set `label` when it is given and non-blank, otherwise increment.
    ///
    /// # Examples
    /// ```ignore
    /// let v = SemVer::parse("1.0.0-rc.1")?;
    /// assert_eq!(LabelKind::PreRelease.update(&v, None)?.to_string(), "1.0.0-rc.2");
    /// assert_eq!(LabelKind::PreRelease.update(&v, Some("beta"))?.to_string(), "1.0.0-beta");
    /// ```
    pub fn update(&self, version: &SemVer, label: Option<&str>) -> Result<SemVer> {
        match label.filter(|l| !l.trim().is_empty()) {
            Some(label) => self.set(version, label),
            None => self.increment(version),
        }
    }
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelKind::PreRelease => write!(f, "pre-release label"),
            LabelKind::BuildMetadata => write!(f, "build metadata label"),
        }
    }
}
