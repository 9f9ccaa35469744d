//! Export and backup CLI commands

use std::io::Write;

use crate::backup::BackupManager;
use crate::error::CampusResult;

use super::Campus;

/// Write all records to the exports directory
pub fn handle_export(campus: &mut Campus<'_>, out: &mut dyn Write) -> CampusResult<()> {
    campus.records.save_data()?;
    writeln!(
        out,
        "Exported {} students, {} courses and {} instructors to {}",
        campus.records.students().count(),
        campus.records.courses().count(),
        campus.records.instructors().count(),
        campus.paths().exports_dir().display()
    )?;
    Ok(())
}

/// Back up the exports directory, optionally exporting first
pub fn handle_backup(
    campus: &mut Campus<'_>,
    export_first: bool,
    out: &mut dyn Write,
) -> CampusResult<()> {
    if export_first {
        handle_export(campus, out)?;
    }

    let manager = BackupManager::new(campus.storage(), campus.paths().clone());
    let report = manager.create_backup()?;

    for (source, target) in &report.copied {
        writeln!(out, "  - Backed up {} to {}", source.display(), target.display())?;
    }
    if report.copied.is_empty() {
        writeln!(out, "No export files to back up. Run 'export' first.")?;
    }
    writeln!(out, "Backup created: {}", report.directory.display())?;
    Ok(())
}

/// Print the total size of the backup directory
pub fn handle_backup_size(campus: &mut Campus<'_>, out: &mut dyn Write) -> CampusResult<()> {
    let manager = BackupManager::new(campus.storage(), campus.paths().clone());
    let backups = manager.list_backups()?;
    let size = manager.backup_size()?;

    writeln!(
        out,
        "{} backup(s), total size of {}: {} characters",
        backups.len(),
        campus.paths().backup_dir().display(),
        size
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CampusPaths;
    use crate::error::CampusError;
    use crate::storage::{seed_fixtures, MemoryStorage, StorageError, VirtualStorage};

    fn open(storage: &MemoryStorage) -> Campus<'_> {
        seed_fixtures(storage, &CampusPaths::default()).unwrap();
        Campus::open(storage, CampusPaths::default()).unwrap().0
    }

    #[test]
    fn test_export() {
        let storage = MemoryStorage::new();
        let mut campus = open(&storage);
        let mut out = Vec::new();

        handle_export(&mut campus, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Exported 3 students, 3 courses and 2 instructors"));
        assert!(storage.exists(&campus.paths().export_students_file()));
    }

    #[test]
    fn test_backup_requires_exports() {
        let storage = MemoryStorage::new();
        let mut campus = open(&storage);
        let mut out = Vec::new();

        let err = handle_backup(&mut campus, false, &mut out).unwrap_err();
        assert!(matches!(err, CampusError::Storage(StorageError::NotFound(_))));
    }

    #[test]
    fn test_backup_with_export_and_size() {
        let storage = MemoryStorage::new();
        let mut campus = open(&storage);
        let mut out = Vec::new();

        handle_backup_size(&mut campus, &mut out).unwrap();
        handle_backup(&mut campus, true, &mut out).unwrap();
        handle_backup_size(&mut campus, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert!(lines[0].starts_with("0 backup(s)"));
        assert!(output.contains("Backed up exports/students.csv"));
        assert!(output.contains("Backup created: backups/backup_"));
        let last = lines.last().unwrap();
        assert!(last.starts_with("1 backup(s)"));
        assert!(!last.ends_with(": 0 characters"));
    }
}
