//! Line-oriented session
//!
//! Reads commands from an input stream, one per line, and runs each against
//! the same in-memory state. Failures are reported as `Error: ...` lines and
//! the session carries on. `quit` or `exit` (or end of input) ends it.

use std::io::{BufRead, Write};

use clap::Parser;

use crate::error::CampusResult;

use super::{execute, Campus, Command};

/// One session line, parsed with the top-level command tree
#[derive(Parser, Debug)]
#[command(name = "ccrm", no_binary_name = true, disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: Command,
}

/// Run commands from `input` until it ends or a `quit`/`exit` line is read
///
/// Returns the number of commands that ran successfully.
pub fn run_session<R: BufRead>(
    campus: &mut Campus<'_>,
    input: R,
    out: &mut dyn Write,
    prompt: bool,
) -> CampusResult<usize> {
    writeln!(out, "Type 'help' for commands, 'quit' to exit.")?;
    let mut succeeded = 0;

    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "ccrm> ")?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.first() {
            None => continue,
            Some(&"quit") | Some(&"exit") => break,
            Some(_) => {}
        }

        match SessionLine::try_parse_from(words.iter().copied()) {
            Ok(parsed) => match execute(campus, parsed.command, out) {
                Ok(()) => succeeded += 1,
                Err(err) => {
                    tracing::debug!("Session command '{}' failed: {}", line.trim(), err);
                    writeln!(out, "Error: {}", err)?;
                }
            },
            Err(err) => write!(out, "{}", err)?,
        }
    }

    writeln!(out, "Goodbye.")?;
    Ok(succeeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CampusPaths;
    use crate::storage::{seed_fixtures, MemoryStorage};
    use std::io::Cursor;

    fn session(script: &str) -> (String, usize) {
        let storage = MemoryStorage::new();
        seed_fixtures(&storage, &CampusPaths::default()).unwrap();
        let (mut campus, _) = Campus::open(&storage, CampusPaths::default()).unwrap();

        let mut out = Vec::new();
        let succeeded = run_session(&mut campus, Cursor::new(script), &mut out, false).unwrap();
        (String::from_utf8(out).unwrap(), succeeded)
    }

    #[test]
    fn test_state_persists_across_lines() {
        let (output, succeeded) = session(
            "enroll s001 CS101\n\
             enroll s001 MA201\n\
             grade s001 CS101 A\n\
             grade s001 MA201 b\n\
             transcript s001\n",
        );
        assert_eq!(succeeded, 5);
        assert!(output.contains("Cumulative GPA: 8.43"));
        assert!(output.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let (output, succeeded) = session(
            "enroll s001 CS101\n\
             enroll s001 CS101\n\
             \n\
             grade s002 CS101 A\n\
             students show s001\n",
        );
        assert_eq!(succeeded, 2);
        assert!(output.contains("Error: Student s001 is already enrolled in CS101"));
        assert!(output.contains("Error: Enrollment not found: s002 in CS101"));
        assert!(output.contains("Courses:  1 (3 of 18 credits)"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let (output, succeeded) = session("courses search physics\nquit\nenroll s001 CS101\n");
        assert_eq!(succeeded, 1);
        assert!(output.contains("Course[PY105]"));
        assert!(!output.contains("Enrolled"));
    }

    #[test]
    fn test_unparsable_line_is_reported() {
        let (output, succeeded) = session("grade s001 CS101 Z\nfrobnicate\n");
        assert_eq!(succeeded, 0);
        assert!(output.contains("error:"));
    }

    #[test]
    fn test_credit_limit_in_session() {
        let storage = MemoryStorage::new();
        seed_fixtures(&storage, &CampusPaths::default()).unwrap();
        let (mut campus, _) = Campus::open(&storage, CampusPaths::default()).unwrap();
        for n in 0..4 {
            campus
                .records
                .add_course(
                    crate::models::Course::with_options(
                        format!("EE{}", 300 + n).parse().unwrap(),
                        "Circuits",
                        crate::models::CourseOptions {
                            credits: 4,
                            ..Default::default()
                        },
                    )
                    .unwrap(),
                )
                .unwrap();
        }

        let script = "enroll s003 EE300\nenroll s003 EE301\nenroll s003 EE302\nenroll s003 EE303\nenroll s003 CS101\n";
        let mut out = Vec::new();
        let succeeded = run_session(&mut campus, Cursor::new(script), &mut out, false).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert_eq!(succeeded, 4);
        assert!(output.contains(
            "Error: Enrollment failed: student s003 holds 16 credits, adding 3 would exceed the limit of 18"
        ));
    }
}
