use crate::descriptor::Descriptor;
use crate::error::{Result, SemverError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A file containing nothing but the version on its first line
pub struct VersionFile {
    path: PathBuf,
}

impl VersionFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        VersionFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Descriptor for VersionFile {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read_version(&self) -> Result<Option<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut lines = content.lines().map(str::trim).filter(|l| !l.is_empty());
        let version = lines.next().map(str::to_string);
        if lines.next().is_some() {
            return Err(SemverError::descriptor(format!(
                "Version file '{}' must contain a single line",
                self.location()
            )));
        }
        Ok(version)
    }

    fn write_version(&mut self, version: &str) -> Result<()> {
        fs::write(&self.path, format!("{}\n", version))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_trims_whitespace() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("VERSION");
        fs::write(&path, "  1.2.3 \n\n").unwrap();

        let file = VersionFile::new(&path);
        assert_eq!(file.read_version().unwrap().as_deref(), Some("1.2.3"));
    }

    #[test]
    fn test_read_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let file = VersionFile::new(dir.path().join("VERSION"));
        assert_eq!(file.read_version().unwrap(), None);
    }

    #[test]
    fn test_read_empty_file_is_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("VERSION");
        fs::write(&path, "\n").unwrap();
        assert_eq!(VersionFile::new(&path).read_version().unwrap(), None);
    }

    #[test]
    fn test_read_multiple_lines_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("VERSION");
        fs::write(&path, "1.2.3\n1.2.4\n").unwrap();
        assert!(matches!(
            VersionFile::new(&path).read_version(),
            Err(SemverError::Descriptor(_))
        ));
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("VERSION");
        let mut file = VersionFile::new(&path);

        file.write_version("2.0.0-SNAPSHOT").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "2.0.0-SNAPSHOT\n");
        assert_eq!(file.read_version().unwrap().as_deref(), Some("2.0.0-SNAPSHOT"));
    }
}
