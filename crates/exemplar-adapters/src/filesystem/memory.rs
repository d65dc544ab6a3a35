//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use exemplar_core::application::ports::Filesystem;

/// In-memory filesystem for testing.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's raw content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Number of files present.
    pub fn file_count(&self) -> usize {
        self.inner.read().unwrap().files.len()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> exemplar_core::error::ExemplarResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| exemplar_core::application::ApplicationError::StoreLockError)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> exemplar_core::error::ExemplarResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| exemplar_core::application::ApplicationError::StoreLockError)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(
                    exemplar_core::application::ApplicationError::FilesystemError {
                        path: path.to_path_buf(),
                        reason: "Parent directory does not exist".into(),
                    }
                    .into(),
                );
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> exemplar_core::error::ExemplarResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| exemplar_core::application::ApplicationError::StoreLockError)?;

        let bytes = inner.files.get(path).ok_or_else(|| {
            exemplar_core::error::ExemplarError::from(
                exemplar_core::application::ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "File not found".into(),
                },
            )
        })?;

        String::from_utf8(bytes.clone()).map_err(|_| {
            exemplar_core::application::ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File is not valid UTF-8".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn dir_is_empty(&self, path: &Path) -> exemplar_core::error::ExemplarResult<bool> {
        let inner = self
            .inner
            .read()
            .map_err(|_| exemplar_core::application::ApplicationError::StoreLockError)?;

        let has_children = inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .any(|p| p != path && p.starts_with(path));

        Ok(!has_children)
    }

    fn remove_dir_all(&self, path: &Path) -> exemplar_core::error::ExemplarResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| exemplar_core::application::ApplicationError::StoreLockError)?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("a/b.txt"), b"x").is_err());

        fs.create_dir_all(Path::new("a")).unwrap();
        assert!(fs.write_file(Path::new("a/b.txt"), b"x").is_ok());
    }

    #[test]
    fn dir_is_empty_sees_nested_files() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("out/project")).unwrap();
        assert!(fs.dir_is_empty(Path::new("out/project")).unwrap());

        fs.create_dir_all(Path::new("out/project/src")).unwrap();
        assert!(!fs.dir_is_empty(Path::new("out/project")).unwrap());
    }

    #[test]
    fn remove_dir_all_is_recursive() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("out/x/src")).unwrap();
        fs.write_file(Path::new("out/x/src/main.ts"), b"x").unwrap();

        fs.remove_dir_all(Path::new("out/x")).unwrap();
        assert!(!fs.exists(Path::new("out/x")));
        assert!(!fs.exists(Path::new("out/x/src/main.ts")));
    }
}
