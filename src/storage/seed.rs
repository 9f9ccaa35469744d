//! Sample data for a fresh store
//!
//! Writes header-plus-rows tables for students, courses and instructors into
//! the data directory so the engine runs standalone.

use crate::config::paths::CampusPaths;

use super::{StorageResult, VirtualStorage};

/// Header and rows of `students.csv`
pub const STUDENT_ROWS: [&str; 4] = [
    "id,regNo,fullName,email",
    "s001,B23001,Alice Johnson,alice@example.com",
    "s002,B23002,Bob Smith,bob@example.com",
    "s003,A22105,Charlie Brown,charlie@example.com",
];

/// Header and rows of `courses.csv`
pub const COURSE_ROWS: [&str; 4] = [
    "code,title,credits,semester,instructorId",
    "CS101,Intro to Programming,3,FALL,i01",
    "MA201,Calculus I,4,FALL,i02",
    "PY105,Modern Physics,3,SPRING,i02",
];

/// Header and rows of `instructors.csv`
pub const INSTRUCTOR_ROWS: [&str; 3] = [
    "id,fullName,email,department",
    "i01,Dr. Evelyn Reed,e.reed@example.com,Computer Science",
    "i02,Dr. Samuel Tan,s.tan@example.com,Physics & Math",
];

/// Create the data directory (if needed) and write the sample tables
pub fn seed_fixtures(storage: &dyn VirtualStorage, paths: &CampusPaths) -> StorageResult<()> {
    if !storage.is_directory(paths.data_dir()) {
        storage.create_directory(paths.data_dir())?;
    }

    storage.write(&paths.students_file(), to_lines(&STUDENT_ROWS))?;
    storage.write(&paths.courses_file(), to_lines(&COURSE_ROWS))?;
    storage.write(&paths.instructors_file(), to_lines(&INSTRUCTOR_ROWS))?;

    tracing::debug!("Seeded sample tables under {}", paths.data_dir().display());
    Ok(())
}

fn to_lines(rows: &[&str]) -> Vec<String> {
    rows.iter().map(|row| row.to_string()).collect()
}
