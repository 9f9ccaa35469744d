//! Course model
//!
//! A course is keyed by its `CourseCode`. The instructor is held as an id
//! and resolved against the instructor table when displayed.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::course_code::CourseCode;
use crate::error::{CampusError, CampusResult};

/// Academic term a course runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Semester {
    Spring,
    Summer,
    #[default]
    Fall,
    Winter,
}

impl Semester {
    /// All semesters in calendar order
    pub const ALL: [Semester; 4] = [Self::Spring, Self::Summer, Self::Fall, Self::Winter];

    /// Parse a semester name, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "SPRING" => Some(Self::Spring),
            "SUMMER" => Some(Self::Summer),
            "FALL" => Some(Self::Fall),
            "WINTER" => Some(Self::Winter),
            _ => None,
        }
    }

    /// Uppercase literal name used in the persisted format
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spring => "SPRING",
            Self::Summer => "SUMMER",
            Self::Fall => "FALL",
            Self::Winter => "WINTER",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Optional course attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseOptions {
    pub credits: u32,
    pub semester: Semester,
    pub instructor_id: Option<String>,
}

impl Default for CourseOptions {
    fn default() -> Self {
        Self {
            credits: 3,
            semester: Semester::default(),
            instructor_id: None,
        }
    }
}

/// A course offering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    code: CourseCode,
    pub title: String,
    credits: u32,
    pub semester: Semester,
    /// Assigned instructor, if any
    pub instructor_id: Option<String>,
}

impl Course {
    /// Create a course with default options (3 credits, FALL, no instructor)
    pub fn new(code: CourseCode, title: impl Into<String>) -> Self {
        Self {
            code,
            title: title.into(),
            credits: 3,
            semester: Semester::default(),
            instructor_id: None,
        }
    }

    /// Create a course with explicit options
    pub fn with_options(
        code: CourseCode,
        title: impl Into<String>,
        options: CourseOptions,
    ) -> CampusResult<Self> {
        if options.credits == 0 {
            return Err(CampusError::Validation(format!(
                "Course {} must carry at least one credit",
                code
            )));
        }

        Ok(Self {
            code,
            title: title.into(),
            credits: options.credits,
            semester: options.semester,
            instructor_id: options.instructor_id,
        })
    }

    pub fn code(&self) -> &CourseCode {
        &self.code
    }

    /// Credit value (always positive)
    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn department(&self) -> &str {
        self.code.department()
    }

    /// Whether the course has an instructor assigned
    pub fn has_instructor(&self) -> bool {
        self.instructor_id.is_some()
    }

    /// Display line, with the instructor name already resolved by the caller
    pub fn describe(&self, instructor_name: &str) -> String {
        format!(
            "Course[{}]: {} ({} credits) | Instructor: {} | Semester: {}",
            self.code, self.title, self.credits, instructor_name, self.semester
        )
    }
}
