//! Local filesystem file store

use std::{fs, io, path::Path};

use crate::domain::communication::files::FileStore;

/// Reads attachments straight from the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileStore;

impl LocalFileStore {
    /// Create a new local file store
    pub fn new() -> Self {
        Self
    }
}

impl FileStore for LocalFileStore {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::{tempdir, NamedTempFile};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_existing_file() -> TestResult {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"report")?;

        let store = LocalFileStore::new();

        assert!(store.exists(file.path()));
        assert_eq!(store.read(file.path())?, b"report".to_vec());

        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let store = LocalFileStore::new();
        let path = Path::new("/no/such/file");

        assert!(!store.exists(path));
        assert!(store.read(path).is_err());
    }

    #[test]
    fn test_directory_is_not_a_file() -> TestResult {
        let dir = tempdir()?;

        assert!(!LocalFileStore::new().exists(dir.path()));

        Ok(())
    }
}
