//! Read-only access to attachment files

use std::{io, path::Path};

#[cfg(test)]
use mockall::mock;

/// Where attachment contents come from
pub trait FileStore: Send + Sync + 'static {
    /// Whether a file exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Read the whole file at `path`
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

#[cfg(test)]
mock! {
    pub FileStore {}

    impl FileStore for FileStore {
        fn exists(&self, path: &Path) -> bool;
        fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
    }
}
