//! In-memory filesystem adapter for tests and dry runs.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use opscaff_core::{
    application::{ApplicationError, ports::Filesystem},
    error::OpscaffResult,
};

/// In-memory filesystem. Clones share the same tree.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
    denied: BTreeSet<PathBuf>,
    writes: Vec<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (and its parent directories) without going through the port.
    pub fn insert_file(&self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) {
        if let Ok(mut inner) = self.inner.write() {
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                inner.add_dirs(parent);
            }
            inner
                .files
                .insert(path.to_path_buf(), content.as_ref().to_vec());
        }
    }

    /// Make every later write to `path` fail.
    pub fn deny_writes(&self, path: impl AsRef<Path>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.denied.insert(path.as_ref().to_path_buf());
        }
    }

    /// Read a file's content as UTF-8 (lossy).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner
            .files
            .get(path.as_ref())
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }

    /// All file paths, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Paths passed to `write_file`, in call order.
    pub fn write_log(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.writes.clone())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            *inner = MemoryFilesystemInner::default();
        }
    }
}

impl MemoryFilesystemInner {
    fn add_dirs(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> OpscaffResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.add_dirs(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> OpscaffResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        inner.writes.push(path.to_path_buf());

        if inner.denied.contains(path) {
            return Err(ApplicationError::FilesystemWrite {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into());
        }

        let orphaned = path
            .parent()
            .is_some_and(|p| !p.as_os_str().is_empty() && !inner.directories.contains(p));
        if orphaned {
            return Err(ApplicationError::FilesystemWrite {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> OpscaffResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        let bytes = inner
            .files
            .get(path)
            .ok_or_else(|| ApplicationError::FilesystemRead {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            })?;
        String::from_utf8(bytes.clone()).map_err(|e| {
            ApplicationError::FilesystemRead {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}
