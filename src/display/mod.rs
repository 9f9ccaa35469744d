//! Display formatting for terminal output
//!
//! Provides utilities for formatting records for terminal display:
//! student and course tables, profiles and transcripts.

pub mod course;
pub mod student;
pub mod transcript;

pub use course::{format_course_lines, format_course_table};
pub use student::{format_student_details, format_student_list};
pub use transcript::format_transcript;
