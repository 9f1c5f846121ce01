//! Normal version categories (major, minor, patch)

use crate::domain::SemVer;
use crate::error::{Result, SemverError};
use std::fmt;

/// One of the three normal version numbers of a SemVer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalVersion {
    Major,
    Minor,
    Patch,
}

impl NormalVersion {
    /// The number of this category in `version`
    pub fn number(&self, version: &SemVer) -> u64 {
        match self {
            NormalVersion::Major => version.major(),
            NormalVersion::Minor => version.minor(),
            NormalVersion::Patch => version.patch(),
        }
    }

    /// Set this category's number to `target`, resetting lower categories to 0.
    ///
    /// Higher categories are copied. Labels are always dropped, so the result
    /// is a bare normal version.
    pub fn increment_to(&self, target: u64, version: &SemVer) -> Result<SemVer> {
        if self.number(version) >= target {
            return Err(SemverError::NotAnIncrement {
                category: *self,
                target,
                version: version.clone(),
            });
        }
        Ok(match self {
            NormalVersion::Major => SemVer::new(target, 0, 0),
            NormalVersion::Minor => SemVer::new(version.major(), target, 0),
            NormalVersion::Patch => SemVer::new(version.major(), version.minor(), target),
        })
    }

    /// Increment this category by one
    pub fn increment(&self, version: &SemVer) -> Result<SemVer> {
        let target = self
            .number(version)
            .checked_add(1)
            .ok_or_else(|| SemverError::NumberOverflow {
                category: *self,
                version: version.clone(),
            })?;
        self.increment_to(target, version)
    }

    /// Infer which category was bumped last.
    ///
    /// Relies on increments resetting lower numbers to zero: `1.0.0` is a
    /// major release, `1.2.0` a minor one, anything else a patch.
    pub fn last_incremented(version: &SemVer) -> Result<Self> {
        let (major, minor, patch) = (version.major(), version.minor(), version.patch());
        if major == 0 && minor == 0 && patch == 0 {
            return Err(SemverError::AllZero {
                version: version.clone(),
            });
        }
        if minor == 0 && patch == 0 {
            return Ok(NormalVersion::Major);
        }
        if patch == 0 {
            return Ok(NormalVersion::Minor);
        }
        Ok(NormalVersion::Patch)
    }
}

impl fmt::Display for NormalVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalVersion::Major => write!(f, "MAJOR"),
            NormalVersion::Minor => write!(f, "MINOR"),
            NormalVersion::Patch => write!(f, "PATCH"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(text: &str) -> SemVer {
        SemVer::parse(text).unwrap()
    }

    #[test]
    fn test_number_accessors() {
        let version = v("1.2.3");
        assert_eq!(NormalVersion::Major.number(&version), 1);
        assert_eq!(NormalVersion::Minor.number(&version), 2);
        assert_eq!(NormalVersion::Patch.number(&version), 3);
    }

    #[test]
    fn test_increment_to_major() {
        let bumped = NormalVersion::Major.increment_to(7, &v("1.2.3-rc.1+b")).unwrap();
        assert_eq!(bumped, SemVer::new(7, 0, 0));
    }

    #[test]
    fn test_increment_to_minor() {
        let bumped = NormalVersion::Minor.increment_to(9, &v("1.2.3")).unwrap();
        assert_eq!(bumped, SemVer::new(1, 9, 0));
    }

    #[test]
    fn test_increment_to_patch() {
        let bumped = NormalVersion::Patch.increment_to(4, &v("1.2.3+meta")).unwrap();
        assert_eq!(bumped, SemVer::new(1, 2, 4));
        assert_eq!(bumped.build_metadata(), None);
    }

    #[test]
    fn test_increment_to_rejects_non_increment() {
        for target in [0, 1, 2] {
            let result = NormalVersion::Minor.increment_to(target, &v("1.2.3"));
            assert!(matches!(
                result,
                Err(SemverError::NotAnIncrement { target: t, .. }) if t == target
            ));
        }
    }

    #[test]
    fn test_increment_by_one() {
        let version = v("1.2.3-SNAPSHOT");
        assert_eq!(NormalVersion::Major.increment(&version).unwrap(), SemVer::new(2, 0, 0));
        assert_eq!(NormalVersion::Minor.increment(&version).unwrap(), SemVer::new(1, 3, 0));
        assert_eq!(NormalVersion::Patch.increment(&version).unwrap(), SemVer::new(1, 2, 4));
    }

    #[test]
    fn test_increment_overflow() {
        let version = SemVer::new(1, 2, u64::MAX);
        assert!(matches!(
            NormalVersion::Patch.increment(&version),
            Err(SemverError::NumberOverflow { .. })
        ));
    }

    #[test]
    fn test_last_incremented() {
        assert_eq!(NormalVersion::last_incremented(&v("1.0.0")).unwrap(), NormalVersion::Major);
        assert_eq!(NormalVersion::last_incremented(&v("1.2.0")).unwrap(), NormalVersion::Minor);
        assert_eq!(NormalVersion::last_incremented(&v("0.2.0")).unwrap(), NormalVersion::Minor);
        assert_eq!(NormalVersion::last_incremented(&v("1.2.3")).unwrap(), NormalVersion::Patch);
        assert_eq!(NormalVersion::last_incremented(&v("0.0.1")).unwrap(), NormalVersion::Patch);
        assert_eq!(
            NormalVersion::last_incremented(&v("3.0.0-rc.1")).unwrap(),
            NormalVersion::Major
        );
    }

    #[test]
    fn test_last_incremented_all_zero() {
        assert!(matches!(
            NormalVersion::last_incremented(&v("0.0.0")),
            Err(SemverError::AllZero { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(NormalVersion::Major.to_string(), "MAJOR");
        assert_eq!(NormalVersion::Minor.to_string(), "MINOR");
        assert_eq!(NormalVersion::Patch.to_string(), "PATCH");
    }
}
