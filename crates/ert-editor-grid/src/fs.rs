//! File-system collaborator.
//!
//! Failures are reported as `None`/`false`; the implementation logs the underlying error.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
    fn read_buffer(&self, path: &Path) -> Option<Vec<u8>>;
    fn write_buffer(&self, path: &Path, content: &[u8]) -> bool;

    fn read_string(&self, path: &Path) -> Option<String> {
        let bytes = self.read_buffer(path)?;
        match String::from_utf8(bytes) {
            Ok(text) => Some(text),
            Err(err) => {
                log::warn!("{} is not valid UTF-8: {err}", path.display());
                None
            }
        }
    }

    fn write_string(&self, path: &Path, content: &str) -> bool {
        self.write_buffer(path, content.as_bytes())
    }
}

impl<T: FileSystem + ?Sized> FileSystem for Arc<T> {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_buffer(&self, path: &Path) -> Option<Vec<u8>> {
        (**self).read_buffer(path)
    }

    fn write_buffer(&self, path: &Path, content: &[u8]) -> bool {
        (**self).write_buffer(path, content)
    }
}

/// The local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_buffer(&self, path: &Path) -> Option<Vec<u8>> {
        std::fs::read(path)
            .map_err(|err| log::warn!("failed to read {}: {err}", path.display()))
            .ok()
    }

    fn write_buffer(&self, path: &Path, content: &[u8]) -> bool {
        std::fs::write(path, content)
            .map_err(|err| log::warn!("failed to write {}: {err}", path.display()))
            .is_ok()
    }
}

/// An in-memory file system.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: RwLock<HashMap<PathBuf, Vec<u8>>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.write_buffer(&path.into(), &content.into());
        self
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .map(|files| files.contains_key(path))
            .unwrap_or(false)
    }

    fn read_buffer(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.read().ok()?.get(path).cloned()
    }

    fn write_buffer(&self, path: &Path, content: &[u8]) -> bool {
        match self.files.write() {
            Ok(mut files) => {
                files.insert(path.to_path_buf(), content.to_vec());
                true
            }
            Err(_) => false,
        }
    }
}
