//! Path management for the records manager
//!
//! All paths here live inside the virtual storage namespace, not on the real
//! disk. They are built once from `Settings` and handed to every component
//! that needs them.

use std::path::{Path, PathBuf};

use super::settings::Settings;

/// File name of the students table
pub const STUDENTS_FILE: &str = "students.csv";

/// File name of the courses table
pub const COURSES_FILE: &str = "courses.csv";

/// File name of the instructors table
pub const INSTRUCTORS_FILE: &str = "instructors.csv";

/// Virtual directories used by the records manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampusPaths {
    data_dir: PathBuf,
    exports_dir: PathBuf,
    backup_dir: PathBuf,
}

impl CampusPaths {
    /// Create paths from explicit directories
    pub fn new(
        data_dir: impl Into<PathBuf>,
        exports_dir: impl Into<PathBuf>,
        backup_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            data_dir: data_dir.into(),
            exports_dir: exports_dir.into(),
            backup_dir: backup_dir.into(),
        }
    }

    /// Build paths from loaded settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            &settings.data_dir,
            &settings.exports_dir,
            &settings.backup_dir,
        )
    }

    /// Directory the tables are imported from (`data/`)
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directory the tables are exported to (`exports/`)
    pub fn exports_dir(&self) -> &Path {
        &self.exports_dir
    }

    /// Directory that holds timestamped backups (`backups/`)
    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    pub fn students_file(&self) -> PathBuf {
        self.data_dir.join(STUDENTS_FILE)
    }

    pub fn courses_file(&self) -> PathBuf {
        self.data_dir.join(COURSES_FILE)
    }

    pub fn instructors_file(&self) -> PathBuf {
        self.data_dir.join(INSTRUCTORS_FILE)
    }

    pub fn export_students_file(&self) -> PathBuf {
        self.exports_dir.join(STUDENTS_FILE)
    }

    pub fn export_courses_file(&self) -> PathBuf {
        self.exports_dir.join(COURSES_FILE)
    }

    pub fn export_instructors_file(&self) -> PathBuf {
        self.exports_dir.join(INSTRUCTORS_FILE)
    }
}

impl Default for CampusPaths {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
