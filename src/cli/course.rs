//! Course CLI commands

use std::io::Write;

use clap::Subcommand;

use crate::display::{format_course_lines, format_course_table};
use crate::error::{CampusError, CampusResult};
use crate::models::{Course, Semester};

use super::Campus;

/// Course subcommands
#[derive(Subcommand, Debug)]
pub enum CourseCommands {
    /// List courses, optionally filtered
    List {
        /// Only courses offered in this semester (SPRING, SUMMER, FALL, WINTER)
        #[arg(short, long)]
        semester: Option<String>,
        /// Only courses of this department (e.g. CS)
        #[arg(short, long)]
        department: Option<String>,
    },
    /// Search course titles and codes (case-insensitive)
    Search {
        /// Text to look for
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
}

/// Handle a course command
pub fn handle_course_command(
    campus: &mut Campus<'_>,
    cmd: CourseCommands,
    out: &mut dyn Write,
) -> CampusResult<()> {
    let records = &campus.records;

    match cmd {
        CourseCommands::List {
            semester,
            department,
        } => {
            let semester = semester.as_deref().map(parse_semester).transpose()?;
            let courses = records.find_courses(|course: &Course| {
                semester.map_or(true, |s| course.semester == s)
                    && department
                        .as_deref()
                        .map_or(true, |d| course.department().eq_ignore_ascii_case(d))
            });
            writeln!(out, "{}", format_course_table(records, &courses).trim_end())?;
        }

        CourseCommands::Search { query } => {
            let query = query.join(" ");
            if query.trim().is_empty() {
                return Err(CampusError::Validation(
                    "Query cannot be empty".to_string(),
                ));
            }
            let results = records.search(query.trim());
            writeln!(out, "{}", format_course_lines(records, &results).trim_end())?;
        }
    }

    Ok(())
}

fn parse_semester(s: &str) -> CampusResult<Semester> {
    Semester::parse(s).ok_or_else(|| {
        CampusError::Validation(format!(
            "Invalid semester: '{}'. Valid semesters: SPRING, SUMMER, FALL, WINTER",
            s
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CampusPaths;
    use crate::storage::{seed_fixtures, MemoryStorage};

    fn run(cmd: CourseCommands) -> CampusResult<String> {
        let storage = MemoryStorage::new();
        seed_fixtures(&storage, &CampusPaths::default()).unwrap();
        let (mut campus, _) = Campus::open(&storage, CampusPaths::default()).unwrap();

        let mut out = Vec::new();
        handle_course_command(&mut campus, cmd, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_list_by_semester() {
        let output = run(CourseCommands::List {
            semester: Some("spring".into()),
            department: None,
        })
        .unwrap();
        assert!(output.contains("PY105"));
        assert!(!output.contains("CS101"));
        assert!(output.contains("1 course(s)"));
    }

    #[test]
    fn test_list_by_department() {
        let output = run(CourseCommands::List {
            semester: None,
            department: Some("ma".into()),
        })
        .unwrap();
        assert!(output.contains("MA201"));
        assert!(output.contains("Dr. Samuel Tan"));
        assert!(!output.contains("PY105"));
    }

    #[test]
    fn test_invalid_semester() {
        let err = run(CourseCommands::List {
            semester: Some("autumn".into()),
            department: None,
        })
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_search() {
        let output = run(CourseCommands::Search {
            query: vec!["calculus".into()],
        })
        .unwrap();
        assert_eq!(
            output,
            "Course[MA201]: Calculus I (4 credits) | Instructor: Dr. Samuel Tan | Semester: FALL\n"
        );

        let output = run(CourseCommands::Search {
            query: vec!["chemistry".into()],
        })
        .unwrap();
        assert_eq!(output, "No results found.\n");
    }
}
