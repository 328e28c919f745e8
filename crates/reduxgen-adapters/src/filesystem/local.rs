//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use reduxgen_core::{application::ports::Filesystem, error::ReduxgenResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        // A dangling symlink still occupies the name.
        path.symlink_metadata().is_ok()
    }

    fn create_dir(&self, path: &Path) -> ReduxgenResult<()> {
        std::fs::create_dir(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn create_dir_all(&self, path: &Path) -> ReduxgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> ReduxgenResult<()> {
        std::fs::write(path, contents).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> reduxgen_core::error::ReduxgenError {
    use reduxgen_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_refuses_existing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let target = tmp.path().join("demo");

        fs.create_dir(&target).unwrap();
        assert!(fs.exists(&target));
        assert!(fs.create_dir(&target).is_err());
    }

    #[test]
    fn create_dir_needs_parent() {
        let tmp = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .create_dir(&tmp.path().join("a/b"))
            .unwrap_err();
        assert!(err.to_string().contains("create directory"));
    }

    #[test]
    fn write_file_round_trips_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = tmp.path().join("blob.bin");

        fs.write_file(&path, &[0, 159, 146, 150]).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), vec![0, 159, 146, 150]);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_counts_as_existing() {
        let tmp = tempfile::tempdir().unwrap();
        let link = tmp.path().join("demo");
        std::os::unix::fs::symlink(tmp.path().join("missing"), &link).unwrap();
        assert!(LocalFilesystem::new().exists(&link));
    }
}
