//! Core data models for the records manager
//!
//! This module contains the data structures of the campus domain:
//! students, instructors, courses, grades and enrollments.

pub mod course;
pub mod course_code;
pub mod enrollment;
pub mod grade;
pub mod person;

pub use course::{Course, CourseOptions, Semester};
pub use course_code::{CourseCode, CourseCodeError};
pub use enrollment::Enrollment;
pub use grade::Grade;
pub use person::{Instructor, Person, Student};
