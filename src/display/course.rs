//! Course display formatting
//!
//! Formats courses for terminal output in table and detail views.

use tabled::{settings::Style, Table, Tabled};

use crate::models::Course;
use crate::services::RecordsService;

#[derive(Tabled)]
struct CourseRow<'a> {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Title")]
    title: &'a str,
    #[tabled(rename = "Credits")]
    credits: u32,
    #[tabled(rename = "Semester")]
    semester: &'static str,
    #[tabled(rename = "Instructor")]
    instructor: &'a str,
}

/// Format courses as a table, resolving instructor names through `records`
pub fn format_course_table(records: &RecordsService<'_>, courses: &[&Course]) -> String {
    if courses.is_empty() {
        return "No courses found.".to_string();
    }

    let rows: Vec<CourseRow<'_>> = courses
        .iter()
        .map(|course| CourseRow {
            code: course.code().to_string(),
            title: &course.title,
            credits: course.credits(),
            semester: course.semester.as_str(),
            instructor: records.instructor_name(course),
        })
        .collect();

    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push('\n');
    output.push_str(&format!("{} course(s)\n", courses.len()));
    output
}

/// Format courses one per line in their `Course[...]` description form
pub fn format_course_lines(records: &RecordsService<'_>, courses: &[&Course]) -> String {
    if courses.is_empty() {
        return "No results found.".to_string();
    }

    let mut output = String::new();
    for course in courses {
        output.push_str(&course.describe(records.instructor_name(course)));
        output.push('\n');
    }
    output
}
