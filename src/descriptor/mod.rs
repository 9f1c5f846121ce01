//! Version descriptor abstraction layer
//!
//! A descriptor is wherever a unit's current version lives and where the
//! updated version is written back to. The engine never touches one; the
//! workflow reads from it before computing and writes to it only after a
//! successful computation that changed the version.
//!
//! - [file::VersionFile]: a plain file holding the version on a single line
//! - [memory::MemoryDescriptor]: an in-memory value, for `--current` and tests
//!
//! ```rust
//! # use semver_update::descriptor::{Descriptor, MemoryDescriptor};
//! let mut descriptor = MemoryDescriptor::new("1.2.3");
//! assert_eq!(descriptor.read_version().unwrap().as_deref(), Some("1.2.3"));
//! descriptor.write_version("1.3.0").unwrap();
//! assert_eq!(descriptor.version(), Some("1.3.0"));
//! ```

pub mod file;
pub mod memory;

pub use file::VersionFile;
pub use memory::MemoryDescriptor;

use crate::error::Result;

/// Source and sink of a unit's version text
pub trait Descriptor {
    /// Human readable location, used in log and error messages
    fn location(&self) -> String;

    /// Read the current version text
    ///
    /// # Returns
    /// * `Ok(Some(text))` - The unit declares its own version
    /// * `Ok(None)` - The unit declares no version (e.g. a module inheriting it)
    /// * `Err` - If the descriptor exists but cannot be read
    fn read_version(&self) -> Result<Option<String>>;

    /// Persist the updated version text
    fn write_version(&mut self, version: &str) -> Result<()>;
}
