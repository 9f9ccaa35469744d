//! In-memory virtual storage
//!
//! Files are stored as line vectors keyed by path; directories keep the set
//! of children registered under them. The empty path is the root directory.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use super::{StorageError, StorageResult, VirtualStorage};

#[derive(Debug, Default)]
struct Entries {
    files: HashMap<PathBuf, Vec<String>>,
    directories: HashMap<PathBuf, BTreeSet<PathBuf>>,
}

impl Entries {
    fn is_known(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains_key(path)
    }

    /// Add `path` to its parent's children if the parent is a known directory
    fn register_with_parent(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Some(children) = self.directories.get_mut(parent) {
                children.insert(path.to_path_buf());
            }
        }
    }
}

/// Arena of path entries held entirely in memory
#[derive(Debug)]
pub struct MemoryStorage {
    entries: RefCell<Entries>,
}

impl MemoryStorage {
    /// Create an empty store containing only the root directory
    pub fn new() -> Self {
        let mut entries = Entries::default();
        entries.directories.insert(PathBuf::new(), BTreeSet::new());
        Self {
            entries: RefCell::new(entries),
        }
    }

    /// Number of files currently stored
    pub fn file_count(&self) -> usize {
        self.entries.borrow().files.len()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualStorage for MemoryStorage {
    fn exists(&self, path: &Path) -> bool {
        self.entries.borrow().is_known(path)
    }

    fn is_directory(&self, path: &Path) -> bool {
        self.entries.borrow().directories.contains_key(path)
    }

    fn create_directory(&self, path: &Path) -> StorageResult<()> {
        let mut entries = self.entries.borrow_mut();
        if entries.is_known(path) {
            return Err(StorageError::AlreadyExists(path.to_path_buf()));
        }

        entries
            .directories
            .insert(path.to_path_buf(), BTreeSet::new());
        entries.register_with_parent(path);
        tracing::debug!("Created directory {}", path.display());
        Ok(())
    }

    fn write(&self, path: &Path, lines: Vec<String>) -> StorageResult<()> {
        let mut entries = self.entries.borrow_mut();
        if entries.directories.contains_key(path) {
            return Err(StorageError::NotAFile(path.to_path_buf()));
        }

        tracing::debug!("Writing {} lines to {}", lines.len(), path.display());
        entries.files.insert(path.to_path_buf(), lines);
        entries.register_with_parent(path);
        Ok(())
    }

    fn read_lines(&self, path: &Path) -> StorageResult<Vec<String>> {
        self.entries
            .borrow()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(path.to_path_buf()))
    }

    fn copy(&self, source: &Path, target: &Path) -> StorageResult<()> {
        let mut entries = self.entries.borrow_mut();
        if entries.directories.contains_key(source) {
            return Err(StorageError::UnsupportedOperation(format!(
                "copying directories is not supported: {}",
                source.display()
            )));
        }
        if entries.directories.contains_key(target) {
            return Err(StorageError::NotAFile(target.to_path_buf()));
        }

        let content = entries
            .files
            .get(source)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(source.to_path_buf()))?;

        entries.files.insert(target.to_path_buf(), content);
        entries.register_with_parent(target);
        tracing::debug!("Copied {} to {}", source.display(), target.display());
        Ok(())
    }

    fn size(&self, path: &Path) -> StorageResult<u64> {
        let entries = self.entries.borrow();
        if entries.directories.contains_key(path) {
            return Err(StorageError::NotAFile(path.to_path_buf()));
        }

        entries
            .files
            .get(path)
            .map(|lines| lines.iter().map(|l| l.chars().count() as u64).sum())
            .ok_or_else(|| StorageError::NotFound(path.to_path_buf()))
    }

    fn list(&self, directory: &Path) -> StorageResult<Vec<PathBuf>> {
        let entries = self.entries.borrow();
        if let Some(children) = entries.directories.get(directory) {
            return Ok(children.iter().cloned().collect());
        }

        if entries.files.contains_key(directory) {
            Err(StorageError::NotADirectory(directory.to_path_buf()))
        } else {
            Err(StorageError::NotFound(directory.to_path_buf()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_root_exists() {
        let storage = MemoryStorage::new();
        assert!(storage.is_directory(Path::new("")));
        assert!(storage.list(Path::new("")).unwrap().is_empty());
    }

    #[test]
    fn test_create_directory_twice_fails() {
        let storage = MemoryStorage::new();
        storage.create_directory(Path::new("data")).unwrap();

        let err = storage.create_directory(Path::new("data")).unwrap_err();
        assert!(matches!(err, StorageError::AlreadyExists(_)));
    }

    #[test]
    fn test_create_directory_over_file_fails() {
        let storage = MemoryStorage::new();
        storage.write(Path::new("notes"), lines(&["x"])).unwrap();

        let err = storage.create_directory(Path::new("notes")).unwrap_err();
        assert!(matches!(err, StorageError::AlreadyExists(_)));
    }

    #[test]
    fn test_write_and_read() {
        let storage = MemoryStorage::new();
        storage.create_directory(Path::new("data")).unwrap();
        let path = Path::new("data").join("a.csv");

        storage.write(&path, lines(&["h", "1"])).unwrap();
        assert!(storage.exists(&path));
        assert!(!storage.is_directory(&path));
        assert_eq!(storage.read_lines(&path).unwrap(), lines(&["h", "1"]));
        assert_eq!(storage.list(Path::new("data")).unwrap(), vec![path.clone()]);

        storage.write(&path, lines(&["h"])).unwrap();
        assert_eq!(storage.read_lines(&path).unwrap(), lines(&["h"]));
        assert_eq!(storage.file_count(), 1);
    }

    #[test]
    fn test_write_without_parent_is_not_listed() {
        let storage = MemoryStorage::new();
        let path = Path::new("missing").join("a.csv");

        storage.write(&path, lines(&["x"])).unwrap();
        assert!(storage.exists(&path));
        assert!(!storage.exists(Path::new("missing")));
    }

    #[test]
    fn test_read_missing_or_directory_fails() {
        let storage = MemoryStorage::new();
        storage.create_directory(Path::new("data")).unwrap();

        assert!(matches!(
            storage.read_lines(Path::new("nope.csv")),
            Err(StorageError::NotFound(_))
        ));
        assert!(matches!(
            storage.read_lines(Path::new("data")),
            Err(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn test_copy() {
        let storage = MemoryStorage::new();
        storage.create_directory(Path::new("a")).unwrap();
        storage.create_directory(Path::new("b")).unwrap();
        let source = Path::new("a").join("f.csv");
        let target = Path::new("b").join("f.csv");
        storage.write(&source, lines(&["one", "two"])).unwrap();

        storage.copy(&source, &target).unwrap();
        assert_eq!(storage.read_lines(&target).unwrap(), lines(&["one", "two"]));
        assert_eq!(storage.list(Path::new("b")).unwrap(), vec![target]);
    }

    #[test]
    fn test_copy_errors() {
        let storage = MemoryStorage::new();
        storage.create_directory(Path::new("a")).unwrap();

        assert!(matches!(
            storage.copy(Path::new("ghost"), Path::new("x")),
            Err(StorageError::NotFound(_))
        ));
        assert!(matches!(
            storage.copy(Path::new("a"), Path::new("x")),
            Err(StorageError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn test_size_counts_characters() {
        let storage = MemoryStorage::new();
        storage
            .write(Path::new("f"), lines(&["abc", "de", "é"]))
            .unwrap();
        assert_eq!(storage.size(Path::new("f")).unwrap(), 6);
    }

    #[test]
    fn test_size_errors() {
        let storage = MemoryStorage::new();
        storage.create_directory(Path::new("d")).unwrap();

        assert!(matches!(
            storage.size(Path::new("missing")),
            Err(StorageError::NotFound(_))
        ));
        assert!(matches!(
            storage.size(Path::new("d")),
            Err(StorageError::NotAFile(_))
        ));
    }

    #[test]
    fn test_list_errors() {
        let storage = MemoryStorage::new();
        storage.write(Path::new("f"), lines(&["x"])).unwrap();

        assert!(matches!(
            storage.list(Path::new("f")),
            Err(StorageError::NotADirectory(_))
        ));
        assert!(matches!(
            storage.list(Path::new("ghost")),
            Err(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn test_nested_directories_are_listed() {
        let storage = MemoryStorage::new();
        storage.create_directory(Path::new("backups")).unwrap();
        let nested = Path::new("backups").join("backup_1");
        storage.create_directory(&nested).unwrap();

        assert_eq!(storage.list(Path::new("backups")).unwrap(), vec![nested]);
        assert_eq!(
            storage.list(Path::new("")).unwrap(),
            vec![PathBuf::from("backups")]
        );
    }
}
