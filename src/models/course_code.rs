//! Course code value type
//!
//! A course code is a department (letters) immediately followed by a
//! three-digit course number, e.g. `CS101`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest valid course number
pub const MIN_COURSE_NUMBER: u32 = 100;

/// Highest valid course number
pub const MAX_COURSE_NUMBER: u32 = 999;

/// Composite key identifying a course
///
/// Ordering is by department, then number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseCode {
    department: String,
    number: u32,
}

impl CourseCode {
    /// Create a course code, rejecting blank departments and out-of-range numbers
    pub fn new(department: impl Into<String>, number: u32) -> Result<Self, CourseCodeError> {
        let department = department.into();

        if department.trim().is_empty() {
            return Err(CourseCodeError::BlankDepartment);
        }
        if !department.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CourseCodeError::InvalidDepartment(department));
        }
        if !(MIN_COURSE_NUMBER..=MAX_COURSE_NUMBER).contains(&number) {
            return Err(CourseCodeError::NumberOutOfRange(number));
        }

        Ok(Self { department, number })
    }

    /// Department letters
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Course number (100-999)
    pub fn number(&self) -> u32 {
        self.number
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.department, self.number)
    }
}

impl FromStr for CourseCode {
    type Err = CourseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (department, digits) = s.split_at(split);

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(CourseCodeError::Malformed(s.to_string()));
        }

        let number = digits
            .parse::<u32>()
            .map_err(|_| CourseCodeError::Malformed(s.to_string()))?;

        Self::new(department, number)
    }
}

impl TryFrom<String> for CourseCode {
    type Error = CourseCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CourseCode> for String {
    fn from(code: CourseCode) -> Self {
        code.to_string()
    }
}

/// Validation errors for course codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseCodeError {
    BlankDepartment,
    InvalidDepartment(String),
    NumberOutOfRange(u32),
    Malformed(String),
}

impl fmt::Display for CourseCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankDepartment => write!(f, "Department cannot be blank"),
            Self::InvalidDepartment(dept) => {
                write!(f, "Department must contain only letters: '{}'", dept)
            }
            Self::NumberOutOfRange(n) => write!(
                f,
                "Course number must be between {} and {}, got {}",
                MIN_COURSE_NUMBER, MAX_COURSE_NUMBER, n
            ),
            Self::Malformed(s) => write!(f, "Malformed course code: '{}'", s),
        }
    }
}

impl std::error::Error for CourseCodeError {}

impl From<CourseCodeError> for crate::error::CampusError {
    fn from(err: CourseCodeError) -> Self {
        Self::Validation(err.to_string())
    }
}
