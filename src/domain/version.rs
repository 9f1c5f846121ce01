use crate::error::{Result, SemverError};
use semver::{BuildMetadata, Prerelease};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Immutable semantic version value
///
/// Wraps [`semver::Version`] for the grammar, but orders by SemVer precedence
/// only: build metadata never takes part in [`SemVer::compare`]. Equality
/// still sees every field, which is why there is no `Ord` impl.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemVer {
    inner: semver::Version,
}

impl SemVer {
    /// Create a bare normal version with no labels
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemVer {
            inner: semver::Version::new(major, minor, patch),
        }
    }

    /// Parse `major.minor.patch[-preRelease][+buildMetadata]`
    pub fn parse(text: &str) -> Result<Self> {
        semver::Version::parse(text)
            .map(|inner| SemVer { inner })
            .map_err(|e| SemverError::invalid_format(text, e))
    }

    pub fn major(&self) -> u64 {
        self.inner.major
    }

    pub fn minor(&self) -> u64 {
        self.inner.minor
    }

    pub fn patch(&self) -> u64 {
        self.inner.patch
    }

    pub fn pre_release(&self) -> Option<&str> {
        (!self.inner.pre.is_empty()).then(|| self.inner.pre.as_str())
    }

    pub fn build_metadata(&self) -> Option<&str> {
        (!self.inner.build.is_empty()).then(|| self.inner.build.as_str())
    }

    /// True when either a pre-release or a build metadata label is present
    pub fn has_labels(&self) -> bool {
        self.pre_release().is_some() || self.build_metadata().is_some()
    }

    /// Compare by SemVer precedence: normal numbers, then pre-release.
    pub fn compare(&self, other: &SemVer) -> Ordering {
        (self.major(), self.minor(), self.patch())
            .cmp(&(other.major(), other.minor(), other.patch()))
            .then_with(|| self.inner.pre.cmp(&other.inner.pre))
    }

    pub fn is_higher_than(&self, other: &SemVer) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// Strip every label, keeping the normal numbers
    pub fn finalize(&self) -> SemVer {
        SemVer::new(self.major(), self.minor(), self.patch())
    }

    /// Replace the pre-release label, keeping everything else
    pub fn with_pre_release(&self, label: &str) -> Result<SemVer> {
        if label.is_empty() {
            return Err(SemverError::invalid_format(label, "empty pre-release label"));
        }
        let pre = Prerelease::new(label).map_err(|e| SemverError::invalid_format(label, e))?;
        let mut inner = self.inner.clone();
        inner.pre = pre;
        Ok(SemVer { inner })
    }

    /// Replace the build metadata label, keeping everything else
    pub fn with_build_metadata(&self, label: &str) -> Result<SemVer> {
        if label.is_empty() {
            return Err(SemverError::invalid_format(label, "empty build metadata label"));
        }
        let build =
            BuildMetadata::new(label).map_err(|e| SemverError::invalid_format(label, e))?;
        let mut inner = self.inner.clone();
        inner.build = build;
        Ok(SemVer { inner })
    }

    /// Increment the trailing numeric run of the pre-release label
    ///
    /// `rc.1 -> rc.2`, `rc9 -> rc10`. Fails when there is no pre-release
    /// label or it does not end in digits.
    pub fn increment_pre_release(&self) -> Result<SemVer> {
        let next = self
            .pre_release()
            .and_then(increment_trailing_number)
            .ok_or_else(|| SemverError::NotIncrementable {
                kind: crate::domain::LabelKind::PreRelease,
                version: self.clone(),
            })?;
        self.with_pre_release(&next)
    }

    /// Increment the trailing numeric run of the build metadata label
    #[deprecated(
        since = "0.1.0",
        note = "build metadata takes no part in precedence, incrementing it rarely means anything"
    )]
    pub fn increment_build_metadata(&self) -> Result<SemVer> {
        let next = self
            .build_metadata()
            .and_then(increment_trailing_number)
            .ok_or_else(|| SemverError::NotIncrementable {
                kind: crate::domain::LabelKind::BuildMetadata,
                version: self.clone(),
            })?;
        self.with_build_metadata(&next)
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl FromStr for SemVer {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        SemVer::parse(s)
    }
}

/// Replace the digits a label ends with by their successor, keeping width.
///
/// Works on the digit string, so arbitrarily long runs never overflow.
fn increment_trailing_number(label: &str) -> Option<String> {
    let re = regex::Regex::new(r"(\d+)$").ok()?;
    let run = re.find(label)?;

    let mut digits: Vec<char> = run.as_str().chars().collect();
    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        if !carry {
            break;
        }
        if *digit == '9' {
            *digit = '0';
        } else {
            *digit = char::from(*digit as u8 + 1);
            carry = false;
        }
    }

    let mut next = String::with_capacity(label.len() + 1);
    next.push_str(&label[..run.start()]);
    if carry {
        next.push('1');
    }
    next.extend(digits);
    Some(next)
}
