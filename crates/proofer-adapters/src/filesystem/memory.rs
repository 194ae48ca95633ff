//! In-memory filesystem adapter for testing.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use proofer_core::application::ApplicationError;
use proofer_core::application::ports::Filesystem;
use proofer_core::error::ProoferResult;

/// In-memory filesystem for testing.
///
/// Clones share state: hand one clone to the service under test and keep
/// another for assertions.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeSet<PathBuf>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file, creating every ancestor directory (testing helper).
    pub fn add_file(&self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            insert_dir_chain(&mut inner, parent);
        }
        inner.files.insert(path);
    }

    /// Register a directory with every ancestor (testing helper).
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut inner = self.inner.write().unwrap();
        insert_dir_chain(&mut inner, path.as_ref());
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner.read().unwrap().files.iter().cloned().collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }
}

fn insert_dir_chain(inner: &mut MemoryFilesystemInner, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        inner.directories.insert(current.clone());
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains(path) || inner.directories.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.read().unwrap().directories.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> ProoferResult<()> {
        let mut inner = self.inner.write().unwrap();
        insert_dir_chain(&mut inner, path);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> ProoferResult<()> {
        let mut inner = self.inner.write().unwrap();
        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p| !p.starts_with(path));
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> ProoferResult<()> {
        self.inner.write().unwrap().files.remove(path);
        Ok(())
    }

    fn read_dir(&self, path: &Path) -> ProoferResult<Vec<PathBuf>> {
        let inner = self.inner.read().unwrap();
        if !inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "not a directory".into(),
            }
            .into());
        }
        Ok(inner
            .files
            .iter()
            .chain(inner.directories.iter())
            .filter(|p| p.parent() == Some(path))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_file_creates_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.add_file("tmp/minimal/demo/README.md");
        assert!(fs.exists(Path::new("tmp")));
        assert!(fs.is_dir(Path::new("tmp/minimal/demo")));
        assert!(fs.exists(Path::new("tmp/minimal/demo/README.md")));
        assert!(!fs.is_dir(Path::new("tmp/minimal/demo/README.md")));
    }

    #[test]
    fn remove_dir_all_drops_subtree_only() {
        let fs = MemoryFilesystem::new();
        fs.add_file("tmp/a/x.txt");
        fs.add_file("tmp/b/y.txt");
        fs.remove_dir_all(Path::new("tmp/a")).unwrap();
        assert!(!fs.exists(Path::new("tmp/a")));
        assert!(fs.exists(Path::new("tmp/b/y.txt")));
    }

    #[test]
    fn read_dir_returns_immediate_children() {
        let fs = MemoryFilesystem::new();
        fs.add_file("tmp/a/deep/file.txt");
        fs.add_file("tmp/top.txt");
        let mut children = fs.read_dir(Path::new("tmp")).unwrap();
        children.sort();
        assert_eq!(
            children,
            [PathBuf::from("tmp/a"), PathBuf::from("tmp/top.txt")]
        );
    }

    #[test]
    fn clear_empties_everything() {
        let fs = MemoryFilesystem::new();
        fs.add_file("tmp/a.txt");
        fs.clear();
        assert!(fs.list_files().is_empty());
        assert!(!fs.exists(Path::new("tmp")));
    }
}
