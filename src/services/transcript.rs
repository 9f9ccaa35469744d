//! Student transcript
//!
//! A snapshot of one student's enrollments (ledger order) and GPA, handed to
//! the presentation layer for rendering.

use serde::Serialize;

use crate::models::Enrollment;

#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    student_id: String,
    enrollments: Vec<Enrollment>,
    gpa: f64,
}

impl Transcript {
    pub fn new(student_id: impl Into<String>, enrollments: Vec<Enrollment>, gpa: f64) -> Self {
        Self {
            student_id: student_id.into(),
            enrollments,
            gpa,
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    /// Unrounded GPA
    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    /// GPA rounded to two decimals for display
    pub fn gpa_display(&self) -> String {
        format!("{:.2}", self.gpa)
    }

    /// Credits across all enrollments, graded or not
    pub fn total_credits(&self) -> u32 {
        self.enrollments.iter().map(|e| e.credits()).sum()
    }

    /// Credits that count toward the GPA
    pub fn graded_credits(&self) -> u32 {
        self.enrollments
            .iter()
            .filter(|e| e.grade().is_graded())
            .map(|e| e.credits())
            .sum()
    }
}
