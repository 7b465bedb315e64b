//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use opscaff_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{OpscaffError, OpscaffResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> OpscaffResult<()> {
        std::fs::create_dir_all(path).map_err(|e| write_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> OpscaffResult<()> {
        std::fs::write(path, content).map_err(|e| write_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> OpscaffResult<String> {
        std::fs::read_to_string(path).map_err(|e| {
            ApplicationError::FilesystemRead {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn write_error(path: &Path, e: io::Error, operation: &str) -> OpscaffError {
    ApplicationError::FilesystemWrite {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_reads_back_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("hack");
        let file = nested.join("boilerplate.go.txt");

        fs.create_dir_all(&nested).unwrap();
        fs.write_file(&file, b"/* header */\n").unwrap();

        assert!(fs.exists(&file));
        assert_eq!(fs.read_to_string(&file).unwrap(), "/* header */\n");
    }

    #[test]
    fn missing_parent_is_a_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalFilesystem
            .write_file(&dir.path().join("no/such/dir/file"), b"x")
            .unwrap_err();
        assert!(matches!(
            err,
            OpscaffError::Application(ApplicationError::FilesystemWrite { .. })
        ));
    }

    #[test]
    fn read_of_missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalFilesystem
            .read_to_string(&dir.path().join("nope"))
            .unwrap_err();
        assert!(matches!(
            err,
            OpscaffError::Application(ApplicationError::FilesystemRead { .. })
        ));
        assert!(
            !err.suggestions()
                .iter()
                .any(|s| s.contains("write permissions"))
        );
    }
}
