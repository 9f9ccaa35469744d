//! Record codec
//!
//! Reads and writes the comma-separated tables (header row first, one record
//! per line) through virtual storage.
//!
//! Import has partial-success semantics: malformed rows are logged and
//! dropped, the rest of the table is kept. A missing table is a storage error.

pub mod export;
pub mod import;

pub use export::{courses_to_lines, instructors_to_lines, students_to_lines};
pub use import::{Imported, SkippedRow};

use std::collections::BTreeMap;
use std::path::Path;

use csv::StringRecord;

use crate::error::CampusResult;
use crate::models::{Course, CourseCode, Instructor, Student};
use crate::storage::VirtualStorage;

/// Table reader/writer bound to a storage backend
pub struct RecordCodec<'a> {
    storage: &'a dyn VirtualStorage,
}

impl<'a> RecordCodec<'a> {
    pub fn new(storage: &'a dyn VirtualStorage) -> Self {
        Self { storage }
    }

    /// Access the underlying storage
    pub fn storage(&self) -> &'a dyn VirtualStorage {
        self.storage
    }

    /// Import `students.csv`, keyed by student id
    pub fn import_students(&self, path: &Path) -> CampusResult<Imported<String, Student>> {
        self.import_table(path, "student", |record| {
            import::parse_student(record).map(|s| (s.id.clone(), s))
        })
    }

    /// Import `instructors.csv`, keyed by instructor id
    pub fn import_instructors(&self, path: &Path) -> CampusResult<Imported<String, Instructor>> {
        self.import_table(path, "instructor", |record| {
            import::parse_instructor(record).map(|i| (i.id.clone(), i))
        })
    }

    /// Import `courses.csv`, keyed by course code
    ///
    /// Instructor ids are resolved against the already-imported instructors.
    pub fn import_courses(
        &self,
        path: &Path,
        instructors: &BTreeMap<String, Instructor>,
    ) -> CampusResult<Imported<CourseCode, Course>> {
        self.import_table(path, "course", |record| {
            import::parse_course(record, instructors).map(|c| (c.code().clone(), c))
        })
    }

    /// Write students to `path` (overwrites)
    pub fn export_students<'s, I>(&self, path: &Path, students: I) -> CampusResult<()>
    where
        I: IntoIterator<Item = &'s Student>,
    {
        let lines = students_to_lines(students)?;
        self.write_table(path, lines)
    }

    /// Write courses to `path` (overwrites)
    pub fn export_courses<'c, I>(&self, path: &Path, courses: I) -> CampusResult<()>
    where
        I: IntoIterator<Item = &'c Course>,
    {
        let lines = courses_to_lines(courses)?;
        self.write_table(path, lines)
    }

    /// Write instructors to `path` (overwrites)
    pub fn export_instructors<'i, I>(&self, path: &Path, instructors: I) -> CampusResult<()>
    where
        I: IntoIterator<Item = &'i Instructor>,
    {
        let lines = instructors_to_lines(instructors)?;
        self.write_table(path, lines)
    }

    /// Write already-rendered table lines
    pub fn write_table(&self, path: &Path, lines: Vec<String>) -> CampusResult<()> {
        let rows = lines.len().saturating_sub(1);
        self.storage.write(path, lines)?;
        tracing::debug!("Wrote {} rows to {}", rows, path.display());
        Ok(())
    }

    fn import_table<K, V, F>(
        &self,
        path: &Path,
        kind: &str,
        mut parse: F,
    ) -> CampusResult<Imported<K, V>>
    where
        K: Ord + std::fmt::Display,
        F: FnMut(&StringRecord) -> Result<(K, V), String>,
    {
        let lines = self.storage.read_lines(path)?;

        let mut records = BTreeMap::new();
        let mut skipped = Vec::new();

        for (line, row) in import::read_rows(&lines) {
            match row.and_then(|record| parse(&record)) {
                Ok((key, value)) => {
                    if records.contains_key(&key) {
                        tracing::warn!(
                            "{}:{}: duplicate {} '{}', later row wins",
                            path.display(),
                            line,
                            kind,
                            key
                        );
                    }
                    records.insert(key, value);
                }
                Err(reason) => {
                    tracing::warn!(
                        "{}:{}: skipping invalid {} row: {}",
                        path.display(),
                        line,
                        kind,
                        reason
                    );
                    skipped.push(SkippedRow { line, reason });
                }
            }
        }

        tracing::debug!(
            "Imported {} {} rows from {} ({} skipped)",
            records.len(),
            kind,
            path.display(),
            skipped.len()
        );

        Ok(Imported { records, skipped })
    }
}
