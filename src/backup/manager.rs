//! Backup manager
//!
//! Copies the exported tables into a timestamped directory under the backup
//! directory, e.g. `backups/backup_20250114_093000/students.csv`.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::config::paths::CampusPaths;
use crate::error::CampusResult;
use crate::storage::{StorageError, VirtualStorage};

/// Outcome of a backup run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupReport {
    /// Directory the files were copied into
    pub directory: PathBuf,
    /// `(source, target)` pairs, in source order
    pub copied: Vec<(PathBuf, PathBuf)>,
}

/// Creates backups of the exports directory
pub struct BackupManager<'a> {
    storage: &'a dyn VirtualStorage,
    paths: CampusPaths,
}

impl<'a> BackupManager<'a> {
    pub fn new(storage: &'a dyn VirtualStorage, paths: CampusPaths) -> Self {
        Self { storage, paths }
    }

    /// Back up the exports directory using the current local time
    pub fn create_backup(&self) -> CampusResult<BackupReport> {
        self.create_backup_at(Local::now().naive_local())
    }

    /// Back up the exports directory into a directory named for `timestamp`
    ///
    /// Only files directly inside the exports directory are copied;
    /// sub-directories are skipped.
    pub fn create_backup_at(&self, timestamp: NaiveDateTime) -> CampusResult<BackupReport> {
        let exports_dir = self.paths.exports_dir();
        if !self.storage.is_directory(exports_dir) {
            return Err(StorageError::NotFound(exports_dir.to_path_buf()).into());
        }

        let backup_dir = self.paths.backup_dir();
        if !self.storage.exists(backup_dir) {
            self.storage.create_directory(backup_dir)?;
        }

        let directory = self.unused_directory(&format!(
            "backup_{}",
            timestamp.format("%Y%m%d_%H%M%S")
        ));
        self.storage.create_directory(&directory)?;
        tracing::info!("Starting backup to {}", directory.display());

        let mut copied = Vec::new();
        for source in self.storage.list(exports_dir)? {
            if self.storage.is_directory(&source) {
                continue;
            }
            let Some(name) = source.file_name() else {
                continue;
            };
            let target = directory.join(name);
            self.storage.copy(&source, &target)?;
            tracing::debug!("Backed up {} to {}", source.display(), target.display());
            copied.push((source, target));
        }

        tracing::info!("Backup completed: {} files copied", copied.len());
        Ok(BackupReport { directory, copied })
    }

    /// Backup directories, oldest first
    pub fn list_backups(&self) -> CampusResult<Vec<PathBuf>> {
        let backup_dir = self.paths.backup_dir();
        if !self.storage.exists(backup_dir) {
            return Ok(Vec::new());
        }

        Ok(self
            .storage
            .list(backup_dir)?
            .into_iter()
            .filter(|p| self.storage.is_directory(p))
            .collect())
    }

    /// Total size of everything under the backup directory, 0 if there is none yet
    pub fn backup_size(&self) -> CampusResult<u64> {
        let backup_dir = self.paths.backup_dir();
        if !self.storage.exists(backup_dir) {
            return Ok(0);
        }
        directory_size(self.storage, backup_dir)
    }

    /// First of `name`, `name_1`, `name_2`, ... not yet present under the backup dir
    fn unused_directory(&self, name: &str) -> PathBuf {
        let backup_dir = self.paths.backup_dir();
        let mut candidate = backup_dir.join(name);
        let mut suffix = 1;
        while self.storage.exists(&candidate) {
            candidate = backup_dir.join(format!("{}_{}", name, suffix));
            suffix += 1;
        }
        candidate
    }
}

/// Sum of file sizes under `path`, descending into sub-directories
pub fn directory_size(storage: &dyn VirtualStorage, path: &Path) -> CampusResult<u64> {
    let mut total = 0;
    for child in storage.list(path)? {
        total += if storage.is_directory(&child) {
            directory_size(storage, &child)?
        } else {
            storage.size(&child)?
        };
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CampusError;
    use crate::storage::MemoryStorage;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 14)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn with_exports() -> (MemoryStorage, CampusPaths) {
        let storage = MemoryStorage::new();
        let paths = CampusPaths::default();
        storage.create_directory(paths.exports_dir()).unwrap();
        storage
            .write(&paths.export_students_file(), vec!["id".into(), "s001".into()])
            .unwrap();
        storage
            .write(&paths.export_courses_file(), vec!["code".into()])
            .unwrap();
        (storage, paths)
    }

    #[test]
    fn test_create_backup() {
        let (storage, paths) = with_exports();
        let manager = BackupManager::new(&storage, paths.clone());

        let report = manager.create_backup_at(at(9, 30, 0)).unwrap();
        assert_eq!(
            report.directory,
            Path::new("backups").join("backup_20250114_093000")
        );
        assert_eq!(report.copied.len(), 2);

        let copied = report.directory.join("students.csv");
        assert_eq!(
            storage.read_lines(&copied).unwrap(),
            storage.read_lines(&paths.export_students_file()).unwrap()
        );
    }

    #[test]
    fn test_backup_skips_subdirectories() {
        let (storage, paths) = with_exports();
        storage
            .create_directory(&paths.exports_dir().join("archive"))
            .unwrap();

        let report = BackupManager::new(&storage, paths)
            .create_backup_at(at(9, 30, 0))
            .unwrap();
        assert_eq!(report.copied.len(), 2);
    }

    #[test]
    fn test_backup_without_exports_fails() {
        let storage = MemoryStorage::new();
        let manager = BackupManager::new(&storage, CampusPaths::default());

        let err = manager.create_backup_at(at(9, 30, 0)).unwrap_err();
        assert!(matches!(err, CampusError::Storage(StorageError::NotFound(_))));
        assert!(!storage.exists(Path::new("backups")));
    }

    #[test]
    fn test_same_second_backups_get_distinct_directories() {
        let (storage, paths) = with_exports();
        let manager = BackupManager::new(&storage, paths);

        let first = manager.create_backup_at(at(9, 30, 0)).unwrap();
        let second = manager.create_backup_at(at(9, 30, 0)).unwrap();
        assert_ne!(first.directory, second.directory);
        assert_eq!(manager.list_backups().unwrap().len(), 2);
    }

    #[test]
    fn test_backup_size_is_recursive() {
        let (storage, paths) = with_exports();
        let manager = BackupManager::new(&storage, paths);
        assert_eq!(manager.list_backups().unwrap().len(), 0);
        assert_eq!(manager.backup_size().unwrap(), 0);

        manager.create_backup_at(at(9, 30, 0)).unwrap();
        manager.create_backup_at(at(10, 0, 0)).unwrap();

        // "id" + "s001" + "code" per backup
        assert_eq!(manager.backup_size().unwrap(), 20);
    }
}
