//! Backup system for the records manager
//!
//! Backups are plain copies of the exported tables, made through virtual
//! storage into `backups/backup_YYYYMMDD_HHMMSS/`. The manager only relies on
//! `exists`, `is_directory`, `create_directory`, `list`, `copy` and `size`.
//!
//! # Example
//!
//! ```rust,ignore
//! use campus_records::backup::BackupManager;
//!
//! records.save_data()?;
//! let report = BackupManager::new(&storage, paths).create_backup()?;
//! println!("Backed up {} files", report.copied.len());
//! ```

mod manager;

pub use manager::{directory_size, BackupManager, BackupReport};
