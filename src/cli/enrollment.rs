//! Enrollment and grade CLI commands

use std::io::Write;

use crate::display::format_transcript;
use crate::error::CampusResult;
use crate::models::{CourseCode, Grade};

use super::Campus;

/// Enroll a student in a course
pub fn handle_enroll(
    campus: &mut Campus<'_>,
    student_id: &str,
    code: &CourseCode,
    out: &mut dyn Write,
) -> CampusResult<()> {
    let enrollment = campus.enroll(student_id, code)?;
    writeln!(
        out,
        "Enrolled {} in {} ({} credits)",
        enrollment.student_id(),
        enrollment.course_code(),
        enrollment.credits()
    )?;
    Ok(())
}

/// Record a grade for an existing enrollment
pub fn handle_grade(
    campus: &mut Campus<'_>,
    student_id: &str,
    code: &CourseCode,
    grade: Grade,
    out: &mut dyn Write,
) -> CampusResult<()> {
    let enrollment = campus.engine.record_grade(student_id, code, grade)?;
    writeln!(
        out,
        "Recorded grade {} for {} in {}",
        enrollment.grade(),
        enrollment.student_id(),
        enrollment.course_code()
    )?;
    Ok(())
}

/// Print a student's transcript
pub fn handle_transcript(
    campus: &mut Campus<'_>,
    student_id: &str,
    out: &mut dyn Write,
) -> CampusResult<()> {
    let student = campus.records.require_student(student_id)?;
    let transcript = campus.engine.transcript(student_id);
    write!(out, "{}", format_transcript(student, &transcript))?;
    Ok(())
}
