//! Transcript display formatting

use crate::models::Student;
use crate::services::Transcript;

const RULE: &str = "========================================";
const THIN_RULE: &str = "----------------------------------------";

/// Format a student's academic transcript
pub fn format_transcript(student: &Student, transcript: &Transcript) -> String {
    let mut output = String::new();

    output.push_str(RULE);
    output.push('\n');
    output.push_str("           ACADEMIC TRANSCRIPT\n");
    output.push_str(RULE);
    output.push('\n');
    output.push_str(&student.profile());
    output.push('\n');
    output.push_str(THIN_RULE);
    output.push('\n');

    if transcript.enrollments().is_empty() {
        output.push_str("No courses enrolled.\n");
    } else {
        for enrollment in transcript.enrollments() {
            output.push_str(&enrollment.to_string());
            output.push('\n');
        }
    }

    output.push_str(THIN_RULE);
    output.push('\n');
    output.push_str(&format!("Cumulative GPA: {}\n", transcript.gpa_display()));
    output.push_str(RULE);
    output.push('\n');
    output
}
