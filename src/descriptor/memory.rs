use crate::descriptor::Descriptor;
use crate::error::Result;

/// In-memory descriptor holding an optional version
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryDescriptor {
    version: Option<String>,
    writes: usize,
}

impl MemoryDescriptor {
    /// Create a descriptor declaring `version`
    pub fn new(version: impl Into<String>) -> Self {
        MemoryDescriptor {
            version: Some(version.into()),
            writes: 0,
        }
    }

    /// Create a descriptor declaring no version of its own
    pub fn inherited() -> Self {
        MemoryDescriptor::default()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Number of times the version was written back
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Descriptor for MemoryDescriptor {
    fn location(&self) -> String {
        "<memory>".to_string()
    }

    fn read_version(&self) -> Result<Option<String>> {
        Ok(self.version.clone())
    }

    fn write_version(&mut self, version: &str) -> Result<()> {
        self.version = Some(version.to_string());
        self.writes += 1;
        Ok(())
    }
}
