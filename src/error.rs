//! Custom error types for the records manager
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::storage::StorageError;

/// The main error type for records and enrollment operations
#[derive(Error, Debug)]
pub enum CampusError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors (real filesystem, settings only)
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// The student already holds an enrollment in the course
    #[error("Student {student_id} is already enrolled in {course_code}")]
    DuplicateEnrollment {
        student_id: String,
        course_code: String,
    },

    /// Enrolling would push the student past the credit limit
    #[error(
        "Enrollment failed: student {student_id} holds {current} credits, \
         adding {requested} would exceed the limit of {limit}"
    )]
    CreditLimitExceeded {
        student_id: String,
        current: u32,
        requested: u32,
        limit: u32,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Virtual storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl CampusError {
    /// Create a "not found" error for students
    pub fn student_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Student",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for courses
    pub fn course_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Course",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for instructors
    pub fn instructor_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Instructor",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for an enrollment of a student in a course
    pub fn enrollment_not_found(student_id: &str, course_code: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity_type: "Enrollment",
            identifier: format!("{} in {}", student_id, course_code),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an enrollment rule rejection (no state was changed)
    pub fn is_business_rule(&self) -> bool {
        matches!(
            self,
            Self::DuplicateEnrollment { .. } | Self::CreditLimitExceeded { .. }
        )
    }
}

impl From<std::io::Error> for CampusError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CampusError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for records manager operations
pub type CampusResult<T> = Result<T, CampusError>;
