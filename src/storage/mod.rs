//! Storage layer for the records manager
//!
//! The engine never touches the real disk. It reads and writes through the
//! `VirtualStorage` trait: a hierarchical namespace of paths where every path
//! is either a directory (a set of child paths) or a file (a list of text
//! lines). `MemoryStorage` is the in-memory implementation and `seed` writes
//! the sample tables that make a fresh store usable.

pub mod memory;
pub mod seed;

pub use memory::MemoryStorage;
pub use seed::seed_fixtures;

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised by virtual storage operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("not a file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Hierarchical path store standing in for a filesystem
pub trait VirtualStorage {
    /// Whether the path is a known file or directory
    fn exists(&self, path: &Path) -> bool;

    fn is_directory(&self, path: &Path) -> bool;

    /// Create a directory; fails with `AlreadyExists` if the path is known
    fn create_directory(&self, path: &Path) -> StorageResult<()>;

    /// Create or overwrite a file, registering it under its parent directory
    /// when that directory exists
    fn write(&self, path: &Path, lines: Vec<String>) -> StorageResult<()>;

    /// Read a file's lines; directories and unknown paths are `NotFound`
    fn read_lines(&self, path: &Path) -> StorageResult<Vec<String>>;

    /// Copy a file; directories cannot be copied
    fn copy(&self, source: &Path, target: &Path) -> StorageResult<()>;

    /// Total character count of a file's lines
    fn size(&self, path: &Path) -> StorageResult<u64>;

    /// Registered children of a directory
    fn list(&self, directory: &Path) -> StorageResult<Vec<PathBuf>>;
}
