use thiserror::Error;

use crate::domain::{LabelKind, NormalVersion, SemVer};

/// Unified error type for semver-update operations
#[derive(Error, Debug)]
pub enum SemverError {
    #[error("Error parsing '{text}' as a SemVer: {reason}")]
    InvalidFormat { text: String, reason: String },

    #[error("{category} version of {version} is already higher than its increment target {target}")]
    NotAnIncrement {
        category: NormalVersion,
        target: u64,
        version: SemVer,
    },

    #[error("At least one normal number is expected to be non-zero: {version}")]
    AllZero { version: SemVer },

    #[error("{category} version {number} in semver {version} is not supported for calendar style increment - it has to be older than current date in UTC zone")]
    ReferenceNotOlderThanNow {
        category: NormalVersion,
        number: u64,
        version: SemVer,
    },

    #[error("{category} version of {version} cannot be incremented any further")]
    NumberOverflow {
        category: NormalVersion,
        version: SemVer,
    },

    #[error("Failed to increment {kind} of version '{version}', it needs to exist and end with a numeric identifier")]
    NotIncrementable { kind: LabelKind, version: SemVer },

    #[error("Snapshot labeling requested for updated semver {version} but not honored, because snapshot flag only supports normal version number increments with no labels")]
    SnapshotNotApplicable { version: SemVer },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Descriptor error: {0}")]
    Descriptor(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in semver-update
pub type Result<T> = std::result::Result<T, SemverError>;

impl SemverError {
    /// Create a format error for text that is not a valid SemVer
    pub fn invalid_format(text: impl Into<String>, reason: impl ToString) -> Self {
        SemverError::InvalidFormat {
            text: text.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemverError::Config(msg.into())
    }

    /// Create a descriptor error with context
    pub fn descriptor(msg: impl Into<String>) -> Self {
        SemverError::Descriptor(msg.into())
    }
}
