//! CSV rendering
//!
//! Serializes entity collections into table lines, header first. Fields are
//! quoted by the `csv` writer only when they need it.

use csv::{Terminator, WriterBuilder};

use crate::error::{CampusError, CampusResult};
use crate::models::{Course, Instructor, Student};

/// Header written for exported students
pub const STUDENT_EXPORT_HEADER: [&str; 5] = ["id", "regNo", "fullName", "email", "active"];

/// Header written for exported courses
pub const COURSE_EXPORT_HEADER: [&str; 5] = ["code", "title", "credits", "semester", "instructorId"];

/// Header written for exported instructors
pub const INSTRUCTOR_EXPORT_HEADER: [&str; 4] = ["id", "fullName", "email", "department"];

/// Placeholder written for a course without an instructor
pub const UNASSIGNED_INSTRUCTOR: &str = "N/A";

/// Render rows (header first) into text lines
fn render<I, R>(header: &[&str], rows: I) -> CampusResult<Vec<String>>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = String>,
{
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .flexible(false)
        .from_writer(Vec::new());

    writer
        .write_record(header)
        .map_err(|e| CampusError::Export(e.to_string()))?;
    for row in rows {
        let fields: Vec<String> = row.into_iter().collect();
        writer
            .write_record(&fields)
            .map_err(|e| CampusError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CampusError::Export(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|e| CampusError::Export(e.to_string()))?;

    Ok(text
        .strip_suffix('\n')
        .unwrap_or(&text)
        .split('\n')
        .map(str::to_string)
        .collect())
}

/// `id,regNo,fullName,email,active`
pub fn students_to_lines<'a, I>(students: I) -> CampusResult<Vec<String>>
where
    I: IntoIterator<Item = &'a Student>,
{
    render(
        &STUDENT_EXPORT_HEADER,
        students.into_iter().map(|s| {
            vec![
                s.id.clone(),
                s.reg_no.clone(),
                s.full_name.clone(),
                s.email.clone(),
                s.active.to_string(),
            ]
        }),
    )
}

/// `code,title,credits,semester,instructorId`
pub fn courses_to_lines<'a, I>(courses: I) -> CampusResult<Vec<String>>
where
    I: IntoIterator<Item = &'a Course>,
{
    render(
        &COURSE_EXPORT_HEADER,
        courses.into_iter().map(|c| {
            vec![
                c.code().to_string(),
                c.title.clone(),
                c.credits().to_string(),
                c.semester.to_string(),
                c.instructor_id
                    .clone()
                    .unwrap_or_else(|| UNASSIGNED_INSTRUCTOR.to_string()),
            ]
        }),
    )
}

/// `id,fullName,email,department`
pub fn instructors_to_lines<'a, I>(instructors: I) -> CampusResult<Vec<String>>
where
    I: IntoIterator<Item = &'a Instructor>,
{
    render(
        &INSTRUCTOR_EXPORT_HEADER,
        instructors.into_iter().map(|i| {
            vec![
                i.id.clone(),
                i.full_name.clone(),
                i.email.clone(),
                i.department.clone(),
            ]
        }),
    )
}
