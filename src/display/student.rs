//! Student display formatting
//!
//! Formats students for terminal output in list and detail views.

use crate::models::Student;
use crate::services::{EnrollmentEngine, MAX_CREDITS};

/// Format a list of students as a table
pub fn format_student_list(students: &[&Student]) -> String {
    if students.is_empty() {
        return "No students found.".to_string();
    }

    let id_width = students.iter().map(|s| s.id.len()).max().unwrap_or(2).max(2);
    let reg_width = students
        .iter()
        .map(|s| s.reg_no.len())
        .max()
        .unwrap_or(6)
        .max(6);
    let name_width = students
        .iter()
        .map(|s| s.full_name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<id_width$}  {:<reg_width$}  {:<name_width$}  {:<8}  {}\n",
        "ID", "Reg No", "Name", "Status", "Email",
    ));
    output.push_str(&format!(
        "{:-<id_width$}  {:-<reg_width$}  {:-<name_width$}  {:-<8}  {:-<5}\n",
        "", "", "", "", "",
    ));

    for student in students {
        output.push_str(&format!(
            "{:<id_width$}  {:<reg_width$}  {:<name_width$}  {:<8}  {}\n",
            student.id,
            student.reg_no,
            student.full_name,
            if student.active { "Active" } else { "Inactive" },
            student.email,
        ));
    }

    output
}

/// Format a single student's profile and enrollment summary
pub fn format_student_details(student: &Student, engine: &EnrollmentEngine) -> String {
    let mut output = String::new();

    output.push_str("--- Student Profile ---\n");
    output.push_str(&student.profile());
    output.push('\n');
    output.push_str(&format!("  ID:       {}\n", student.id));
    output.push_str(&format!("  Email:    {}\n", student.email));

    let enrollments = engine.enrollments_for(&student.id);
    output.push_str(&format!(
        "  Courses:  {} ({} of {} credits)\n",
        enrollments.len(),
        engine.committed_credits(&student.id),
        MAX_CREDITS
    ));
    for enrollment in enrollments {
        output.push_str(&format!("  {}\n", enrollment));
    }

    output.push_str("-----------------------\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Course;
    use chrono::NaiveDate;

    fn alice() -> Student {
        Student::enrolled_on(
            "s001",
            "B23001",
            "Alice Johnson",
            "alice@example.com",
            NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
        )
    }

    #[test]
    fn test_format_student_list() {
        let alice = alice();
        let mut bob = Student::new("s002", "B23002", "Bob", "bob@example.com");
        bob.active = false;

        let output = format_student_list(&[&alice, &bob]);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].contains("Alice Johnson"));
        assert!(lines[3].contains("Inactive"));
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_student_list(&[]), "No students found.");
    }

    #[test]
    fn test_format_student_details() {
        let alice = alice();
        let mut engine = EnrollmentEngine::new();
        engine
            .enroll(&alice, &Course::new("CS101".parse().unwrap(), "Intro"))
            .unwrap();

        let output = format_student_details(&alice, &engine);
        assert!(output.contains(
            "Student: Alice Johnson (Reg# B23001) | Status: Active | Enrolled: 2024-09-01"
        ));
        assert!(output.contains("Courses:  1 (3 of 18 credits)"));
        assert!(output.contains("CS101: Intro | Grade: NOT_GRADED"));
    }
}
