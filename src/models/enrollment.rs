//! Enrollment model
//!
//! An enrollment ties one student to one course and carries the grade.
//! It stores the student id and course code rather than the entities
//! themselves, together with the course title and credits captured at
//! enrollment time so the ledger can compute GPA on its own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::course::Course;
use super::course_code::CourseCode;
use super::grade::Grade;
use super::person::Student;

/// A student's enrollment in a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    student_id: String,
    course_code: CourseCode,
    course_title: String,
    credits: u32,
    grade: Grade,
    enrolled_at: DateTime<Utc>,
}

impl Enrollment {
    /// Create an ungraded enrollment
    pub fn new(student: &Student, course: &Course) -> Self {
        Self {
            student_id: student.id.clone(),
            course_code: course.code().clone(),
            course_title: course.title.clone(),
            credits: course.credits(),
            grade: Grade::NotGraded,
            enrolled_at: Utc::now(),
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn course_code(&self) -> &CourseCode {
        &self.course_code
    }

    pub fn course_title(&self) -> &str {
        &self.course_title
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn enrolled_at(&self) -> DateTime<Utc> {
        self.enrolled_at
    }

    /// Whether this enrollment is for the given student and course
    pub fn matches(&self, student_id: &str, course_code: &CourseCode) -> bool {
        self.student_id == student_id && &self.course_code == course_code
    }

    /// Overwrite the grade; no history is kept
    pub(crate) fn set_grade(&mut self, grade: Grade) {
        self.grade = grade;
    }
}

impl fmt::Display for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  - {}: {} | Grade: {}",
            self.course_code, self.course_title, self.grade
        )
    }
}
