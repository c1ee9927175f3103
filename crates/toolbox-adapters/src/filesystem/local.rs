//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use toolbox_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ToolboxError, ToolboxResult},
};

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
    fn walk_files(&self, root: &Path, max_depth: usize) -> ToolboxResult<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).max_depth(max_depth).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                ApplicationError::filesystem(path, format!("Failed to walk directory: {e}"))
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        trace!(root = %root.display(), count = files.len(), "walked directory");
        Ok(files)
    }

    fn create_dir_all(&self, path: &Path) -> ToolboxResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> ToolboxResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_file(&self, path: &Path) -> ToolboxResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| map_io_error(path, e, "read file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ToolboxError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
