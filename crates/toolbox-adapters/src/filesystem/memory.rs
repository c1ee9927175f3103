//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use toolbox_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ToolboxError, ToolboxResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same contents.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Add a file, creating its parent directories.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        let path = path.into();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut inner.directories, parent);
            }
            inner.files.insert(path, content.into());
        }
        self
    }

    /// A file's content as text (testing helper).
    pub fn read_to_string(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner
            .files
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_ancestors(directories: &mut BTreeSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn lock_error() -> ToolboxError {
    ToolboxError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

impl Filesystem for MemoryFilesystem {
    fn walk_files(&self, root: &Path, max_depth: usize) -> ToolboxResult<Vec<PathBuf>> {
        let inner = self.inner.read().map_err(|_| lock_error())?;

        if !inner.directories.contains(root) {
            return Err(ApplicationError::filesystem(root, "No such directory").into());
        }

        Ok(inner
            .files
            .keys()
            .filter(|path| {
                path.strip_prefix(root)
                    .map(|rel| rel.components().count() <= max_depth)
                    .unwrap_or(false)
            })
            .cloned()
            .collect())
    }

    fn create_dir_all(&self, path: &Path) -> ToolboxResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;
        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> ToolboxResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::filesystem(path, "Parent directory does not exist").into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> ToolboxResult<Vec<u8>> {
        let inner = self.inner.read().map_err(|_| lock_error())?;
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| ApplicationError::filesystem(path, "No such file").into())
    }
}
