//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer. The same command tree is
//! used for one-shot invocations and for lines read by `session`.

pub mod course;
pub mod enrollment;
pub mod files;
pub mod session;
pub mod student;

use std::io::Write;

use clap::Subcommand;

use crate::config::paths::CampusPaths;
use crate::error::CampusResult;
use crate::models::{CourseCode, Enrollment};
use crate::services::{EnrollmentEngine, LoadSummary, RecordsService};
use crate::storage::VirtualStorage;

pub use course::{handle_course_command, CourseCommands};
pub use enrollment::{handle_enroll, handle_grade, handle_transcript};
pub use files::{handle_backup, handle_backup_size, handle_export};
pub use session::run_session;
pub use student::{handle_student_command, StudentCommands};

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Student records
    #[command(subcommand)]
    Students(StudentCommands),

    /// Course catalog
    #[command(subcommand)]
    Courses(CourseCommands),

    /// Enroll a student in a course
    Enroll {
        /// Student ID (e.g. s001)
        student: String,
        /// Course code (e.g. CS101)
        course: CourseCode,
    },

    /// Record a grade for an existing enrollment
    Grade {
        /// Student ID
        student: String,
        /// Course code
        course: CourseCode,
        /// Letter grade (S, A, B, C, D, E, F)
        grade: crate::models::Grade,
    },

    /// Show a student's academic transcript
    Transcript {
        /// Student ID
        student: String,
    },

    /// Write students, courses and instructors to the exports directory
    Export,

    /// Copy the exported tables into a timestamped backup directory
    Backup {
        /// Export the current records first
        #[arg(short, long)]
        export: bool,
    },

    /// Show the total size of all backups
    BackupSize,

    /// Read commands line by line from stdin against one in-memory state
    Session,
}

/// In-memory state a command runs against
pub struct Campus<'a> {
    storage: &'a dyn VirtualStorage,
    pub records: RecordsService<'a>,
    pub engine: EnrollmentEngine,
}

impl<'a> Campus<'a> {
    /// Empty records over `storage`
    pub fn new(storage: &'a dyn VirtualStorage, paths: CampusPaths) -> Self {
        Self {
            storage,
            records: RecordsService::new(storage, paths),
            engine: EnrollmentEngine::new(),
        }
    }

    /// Records loaded from the data directory
    pub fn open(
        storage: &'a dyn VirtualStorage,
        paths: CampusPaths,
    ) -> CampusResult<(Self, LoadSummary)> {
        let mut campus = Self::new(storage, paths);
        let summary = campus.records.load_data()?;
        Ok((campus, summary))
    }

    pub fn storage(&self) -> &'a dyn VirtualStorage {
        self.storage
    }

    pub fn paths(&self) -> &CampusPaths {
        self.records.paths()
    }

    /// Enroll a student, looking both sides up by key
    pub fn enroll(&mut self, student_id: &str, code: &CourseCode) -> CampusResult<&Enrollment> {
        let student = self.records.require_student(student_id)?;
        let course = self.records.require_course(code)?;
        self.engine.enroll(student, course)
    }
}

/// Run one command, writing its output to `out`
///
/// `session` is handled by the caller since it needs the input stream.
pub fn execute(campus: &mut Campus<'_>, cmd: Command, out: &mut dyn Write) -> CampusResult<()> {
    match cmd {
        Command::Students(cmd) => handle_student_command(campus, cmd, out),
        Command::Courses(cmd) => handle_course_command(campus, cmd, out),
        Command::Enroll { student, course } => handle_enroll(campus, &student, &course, out),
        Command::Grade {
            student,
            course,
            grade,
        } => handle_grade(campus, &student, &course, grade, out),
        Command::Transcript { student } => handle_transcript(campus, &student, out),
        Command::Export => handle_export(campus, out),
        Command::Backup { export } => handle_backup(campus, export, out),
        Command::BackupSize => handle_backup_size(campus, out),
        Command::Session => {
            writeln!(out, "Already in a session.")?;
            Ok(())
        }
    }
}
