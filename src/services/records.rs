//! Records service
//!
//! Owns the student, course and instructor collections. Loading replaces
//! them from the data directory; saving writes them to the exports directory.
//! Collections are ordered maps, so iteration and export order is by key.

use std::collections::BTreeMap;

use crate::codec::{courses_to_lines, instructors_to_lines, students_to_lines, RecordCodec};
use crate::config::paths::CampusPaths;
use crate::error::{CampusError, CampusResult};
use crate::models::{Course, CourseCode, Instructor, Semester, Student};
use crate::storage::{StorageError, VirtualStorage};

/// Shown in place of an instructor name when a course has none
pub const UNASSIGNED_NAME: &str = "TBD";

/// Counts reported by a load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub students: usize,
    pub courses: usize,
    pub instructors: usize,
    /// Rows dropped across all tables
    pub skipped: usize,
}

/// Service for students, courses and instructors
pub struct RecordsService<'a> {
    codec: RecordCodec<'a>,
    paths: CampusPaths,
    students: BTreeMap<String, Student>,
    courses: BTreeMap<CourseCode, Course>,
    instructors: BTreeMap<String, Instructor>,
}

impl<'a> RecordsService<'a> {
    /// Create an empty service; call `load_data` to populate it
    pub fn new(storage: &'a dyn VirtualStorage, paths: CampusPaths) -> Self {
        Self {
            codec: RecordCodec::new(storage),
            paths,
            students: BTreeMap::new(),
            courses: BTreeMap::new(),
            instructors: BTreeMap::new(),
        }
    }

    pub fn paths(&self) -> &CampusPaths {
        &self.paths
    }

    /// Replace all collections with the tables in the data directory
    ///
    /// On error the previous collections are left untouched.
    pub fn load_data(&mut self) -> CampusResult<LoadSummary> {
        let students = self.codec.import_students(&self.paths.students_file())?;
        let instructors = self
            .codec
            .import_instructors(&self.paths.instructors_file())?;
        let courses = self
            .codec
            .import_courses(&self.paths.courses_file(), &instructors.records)?;

        let summary = LoadSummary {
            students: students.len(),
            courses: courses.len(),
            instructors: instructors.len(),
            skipped: students.skipped.len() + courses.skipped.len() + instructors.skipped.len(),
        };

        self.students = students.records;
        self.instructors = instructors.records;
        self.courses = courses.records;

        tracing::info!(
            "Loaded {} students, {} courses and {} instructors ({} rows skipped)",
            summary.students,
            summary.courses,
            summary.instructors,
            summary.skipped
        );
        Ok(summary)
    }

    /// Write all collections to the exports directory, creating it if needed
    ///
    /// Every table is rendered and every target checked before anything is
    /// written, so a failure leaves previously exported files untouched.
    pub fn save_data(&self) -> CampusResult<()> {
        let storage = self.codec.storage();
        let exports_dir = self.paths.exports_dir();

        if !storage.exists(exports_dir) {
            storage.create_directory(exports_dir)?;
        } else if !storage.is_directory(exports_dir) {
            return Err(StorageError::NotADirectory(exports_dir.to_path_buf()).into());
        }

        let tables = [
            (
                self.paths.export_students_file(),
                students_to_lines(self.students.values())?,
            ),
            (
                self.paths.export_courses_file(),
                courses_to_lines(self.courses.values())?,
            ),
            (
                self.paths.export_instructors_file(),
                instructors_to_lines(self.instructors.values())?,
            ),
        ];

        if let Some((path, _)) = tables.iter().find(|(path, _)| storage.is_directory(path)) {
            return Err(StorageError::NotAFile(path.clone()).into());
        }

        for (path, lines) in tables {
            self.codec.write_table(&path, lines)?;
        }

        tracing::info!(
            "Exported {} students, {} courses and {} instructors to {}",
            self.students.len(),
            self.courses.len(),
            self.instructors.len(),
            exports_dir.display()
        );
        Ok(())
    }

    /// Add or replace a student
    pub fn add_student(&mut self, student: Student) {
        self.students.insert(student.id.clone(), student);
    }

    /// Add or replace an instructor
    pub fn add_instructor(&mut self, instructor: Instructor) {
        self.instructors.insert(instructor.id.clone(), instructor);
    }

    /// Add a new course; its instructor must already be known
    ///
    /// Courses are immutable once added: enrollments keep a copy of the
    /// credits, so an existing code is rejected instead of replaced.
    pub fn add_course(&mut self, course: Course) -> CampusResult<()> {
        if self.courses.contains_key(course.code()) {
            return Err(CampusError::Duplicate {
                entity_type: "Course",
                identifier: course.code().to_string(),
            });
        }
        if let Some(id) = &course.instructor_id {
            if !self.instructors.contains_key(id) {
                return Err(CampusError::instructor_not_found(id));
            }
        }
        self.courses.insert(course.code().clone(), course);
        Ok(())
    }

    /// Mark a student active or inactive
    pub fn set_student_active(&mut self, id: &str, active: bool) -> CampusResult<&Student> {
        let student = self
            .students
            .get_mut(id)
            .ok_or_else(|| CampusError::student_not_found(id))?;
        student.active = active;
        tracing::debug!("Student {} marked {}", id, if active { "active" } else { "inactive" });
        Ok(&*student)
    }

    pub fn find_student_by_id(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    pub fn find_course_by_code(&self, code: &CourseCode) -> Option<&Course> {
        self.courses.get(code)
    }

    pub fn find_instructor_by_id(&self, id: &str) -> Option<&Instructor> {
        self.instructors.get(id)
    }

    /// Look up a student, failing with `NotFound`
    pub fn require_student(&self, id: &str) -> CampusResult<&Student> {
        self.find_student_by_id(id)
            .ok_or_else(|| CampusError::student_not_found(id))
    }

    /// Look up a course, failing with `NotFound`
    pub fn require_course(&self, code: &CourseCode) -> CampusResult<&Course> {
        self.find_course_by_code(code)
            .ok_or_else(|| CampusError::course_not_found(code.to_string()))
    }

    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    pub fn instructors(&self) -> impl Iterator<Item = &Instructor> {
        self.instructors.values()
    }

    /// Courses matching a predicate, in code order
    pub fn find_courses<P>(&self, predicate: P) -> Vec<&Course>
    where
        P: Fn(&Course) -> bool,
    {
        self.courses.values().filter(|&c| predicate(c)).collect()
    }

    pub fn courses_in_semester(&self, semester: Semester) -> Vec<&Course> {
        self.find_courses(|c| c.semester == semester)
    }

    /// Case-insensitive substring match on course title or code
    pub fn search(&self, query: &str) -> Vec<&Course> {
        let query = query.trim().to_lowercase();
        self.find_courses(|c| {
            c.title.to_lowercase().contains(&query)
                || c.code().to_string().to_lowercase().contains(&query)
        })
    }

    /// Name of the course's instructor, or "TBD"
    pub fn instructor_name(&self, course: &Course) -> &str {
        course
            .instructor_id
            .as_deref()
            .and_then(|id| self.instructors.get(id))
            .map_or(UNASSIGNED_NAME, |i| i.full_name.as_str())
    }
}
