//! Enrollment engine
//!
//! Owns the enrollment ledger and enforces the enrollment rules:
//! - a student holds at most one enrollment per course
//! - a student's enrolled credits never exceed `MAX_CREDITS`
//!
//! Grades move from NOT_GRADED to a letter grade. Recording a grade again
//! overwrites the previous one without keeping history.

use crate::error::{CampusError, CampusResult};
use crate::models::{Course, CourseCode, Enrollment, Grade, Student};

use super::transcript::Transcript;

/// Maximum credits a student may hold at once
pub const MAX_CREDITS: u32 = 18;

/// Ledger of enrollments, in insertion order
#[derive(Debug, Default)]
pub struct EnrollmentEngine {
    enrollments: Vec<Enrollment>,
}

impl EnrollmentEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enroll a student in a course
    ///
    /// Rejected enrollments leave the ledger unchanged.
    pub fn enroll(&mut self, student: &Student, course: &Course) -> CampusResult<&Enrollment> {
        if self.find_enrollment(&student.id, course.code()).is_some() {
            tracing::debug!(
                "Rejected duplicate enrollment of {} in {}",
                student.id,
                course.code()
            );
            return Err(CampusError::DuplicateEnrollment {
                student_id: student.id.clone(),
                course_code: course.code().to_string(),
            });
        }

        let current = self.committed_credits(&student.id);
        let over_limit = current
            .checked_add(course.credits())
            .map_or(true, |total| total > MAX_CREDITS);
        if over_limit {
            tracing::debug!(
                "Rejected enrollment of {} in {}: {} + {} credits exceeds {}",
                student.id,
                course.code(),
                current,
                course.credits(),
                MAX_CREDITS
            );
            return Err(CampusError::CreditLimitExceeded {
                student_id: student.id.clone(),
                current,
                requested: course.credits(),
                limit: MAX_CREDITS,
            });
        }

        self.enrollments.push(Enrollment::new(student, course));
        tracing::info!("Enrolled {} in {}", student.id, course.code());

        let index = self.enrollments.len() - 1;
        Ok(&self.enrollments[index])
    }

    /// Record (or overwrite) the grade of an existing enrollment
    pub fn record_grade(
        &mut self,
        student_id: &str,
        course_code: &CourseCode,
        grade: Grade,
    ) -> CampusResult<&Enrollment> {
        let enrollment = self
            .enrollments
            .iter_mut()
            .find(|e| e.matches(student_id, course_code))
            .ok_or_else(|| CampusError::enrollment_not_found(student_id, course_code))?;

        if enrollment.grade().is_graded() && enrollment.grade() != grade {
            tracing::debug!(
                "Overwriting grade {} with {} for {} in {}",
                enrollment.grade(),
                grade,
                student_id,
                course_code
            );
        }
        enrollment.set_grade(grade);

        Ok(&*enrollment)
    }

    /// Credit-weighted grade point average over graded enrollments
    ///
    /// Returns 0.0 when the student has no graded enrollments.
    pub fn gpa(&self, student_id: &str) -> f64 {
        let (points, credits) = self
            .enrollments_for(student_id)
            .into_iter()
            .filter(|e| e.grade().is_graded())
            .fold((0.0, 0u32), |(points, credits), e| {
                (
                    points + e.grade().grade_point() * f64::from(e.credits()),
                    credits + e.credits(),
                )
            });

        if credits == 0 {
            0.0
        } else {
            points / f64::from(credits)
        }
    }

    /// A student's enrollments in ledger order, with their GPA
    pub fn transcript(&self, student_id: &str) -> Transcript {
        Transcript::new(
            student_id,
            self.enrollments_for(student_id).into_iter().cloned().collect(),
            self.gpa(student_id),
        )
    }

    pub fn enrollments_for(&self, student_id: &str) -> Vec<&Enrollment> {
        self.enrollments
            .iter()
            .filter(|e| e.student_id() == student_id)
            .collect()
    }

    pub fn find_enrollment(&self, student_id: &str, course_code: &CourseCode) -> Option<&Enrollment> {
        self.enrollments
            .iter()
            .find(|e| e.matches(student_id, course_code))
    }

    /// Sum of credits across the student's enrollments
    pub fn committed_credits(&self, student_id: &str) -> u32 {
        self.enrollments_for(student_id)
            .iter()
            .map(|e| e.credits())
            .sum()
    }

    /// The whole ledger, read-only
    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    pub fn len(&self) -> usize {
        self.enrollments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enrollments.is_empty()
    }
}
