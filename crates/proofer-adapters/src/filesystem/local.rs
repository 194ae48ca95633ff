//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;

use proofer_core::{application::ports::Filesystem, error::ProoferResult};

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
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> ProoferResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn remove_dir_all(&self, path: &Path) -> ProoferResult<()> {
        // Absent path is a no-op: conflict resolution and cleanup both call
        // this blindly and must stay idempotent.
        if !path.exists() {
            trace!(path = %path.display(), "remove_dir_all on absent path");
            return Ok(());
        }
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }

    fn remove_file(&self, path: &Path) -> ProoferResult<()> {
        if !path.exists() {
            return Ok(());
        }
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }

    fn read_dir(&self, path: &Path) -> ProoferResult<Vec<PathBuf>> {
        let entries = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            paths.push(entry.path());
        }
        Ok(paths)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> proofer_core::error::ProoferError {
    use proofer_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
