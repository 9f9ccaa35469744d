//! Student CLI commands

use std::io::Write;

use clap::Subcommand;

use crate::display::{format_student_details, format_student_list};
use crate::error::CampusResult;

use super::Campus;

/// Student subcommands
#[derive(Subcommand, Debug)]
pub enum StudentCommands {
    /// List all students
    List {
        /// Only show active students
        #[arg(short, long)]
        active: bool,
    },
    /// Show a student's profile and enrollments
    Show {
        /// Student ID
        id: String,
    },
    /// Mark a student active
    Activate {
        /// Student ID
        id: String,
    },
    /// Mark a student inactive
    Deactivate {
        /// Student ID
        id: String,
    },
}

/// Handle a student command
pub fn handle_student_command(
    campus: &mut Campus<'_>,
    cmd: StudentCommands,
    out: &mut dyn Write,
) -> CampusResult<()> {
    match cmd {
        StudentCommands::List { active } => {
            let students: Vec<_> = campus
                .records
                .students()
                .filter(|s| !active || s.active)
                .collect();
            writeln!(out, "{}", format_student_list(&students).trim_end())?;
        }

        StudentCommands::Show { id } => {
            let student = campus.records.require_student(&id)?;
            write!(out, "{}", format_student_details(student, &campus.engine))?;
        }

        StudentCommands::Activate { id } => {
            let student = campus.records.set_student_active(&id, true)?;
            writeln!(out, "{}", student.profile())?;
        }

        StudentCommands::Deactivate { id } => {
            let student = campus.records.set_student_active(&id, false)?;
            writeln!(out, "{}", student.profile())?;
        }
    }

    Ok(())
}
