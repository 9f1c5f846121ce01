//! Domain logic - pure version transformations, no I/O

pub mod calendar;
pub mod label;
pub mod merge;
pub mod normal;
pub mod snapshot;
pub mod version;

pub use calendar::CalendarPrecision;
pub use label::LabelKind;
pub use normal::NormalVersion;
pub use snapshot::SNAPSHOT;
pub use version::SemVer;
