//! CSV row parsing
//!
//! Turns the lines of a table into records with the `csv` crate, then maps
//! each record onto an entity. A row that cannot be mapped is reported with
//! its line number and reason; it never aborts the whole table.

use std::collections::BTreeMap;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::models::{Course, CourseCode, CourseOptions, Instructor, Semester, Student};

/// A row dropped during import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the table (the header is line 1)
    pub line: u64,
    pub reason: String,
}

/// Parsed records of one table, plus the rows that were dropped
#[derive(Debug, Clone)]
pub struct Imported<K: Ord, V> {
    pub records: BTreeMap<K, V>,
    pub skipped: Vec<SkippedRow>,
}

impl<K: Ord, V> Imported<K, V> {
    /// Number of records kept
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse every data row (header excluded) of a table
///
/// Each line is read on its own, so a malformed line (an unterminated quote,
/// say) only affects itself. Blank lines are ignored. Each entry carries the
/// row's 1-based line number and either its fields or the reason the row
/// could not be read.
pub(crate) fn read_rows(lines: &[String]) -> Vec<(u64, Result<StringRecord, String>)> {
    lines
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(index, line)| {
            let mut reader = ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .trim(Trim::All)
                .from_reader(line.as_bytes());

            let row = reader.records().next()?;
            Some((index as u64 + 1, row.map_err(|e| e.to_string())))
        })
        .collect()
}

fn require_fields(record: &StringRecord, expected: usize) -> Result<(), String> {
    if record.len() < expected {
        return Err(format!(
            "expected at least {} fields, found {}",
            expected,
            record.len()
        ));
    }
    if record.get(0).map_or(true, str::is_empty) {
        return Err("identifier is blank".to_string());
    }
    Ok(())
}

fn field(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or_default()
}

/// `id,regNo,fullName,email[,active]`
pub(crate) fn parse_student(record: &StringRecord) -> Result<Student, String> {
    require_fields(record, 4)?;

    let mut student = Student::new(
        field(record, 0),
        field(record, 1),
        field(record, 2),
        field(record, 3),
    );

    if let Some(active) = record.get(4).filter(|s| !s.is_empty()) {
        match active.to_lowercase().parse::<bool>() {
            Ok(flag) => student.active = flag,
            Err(_) => tracing::warn!(
                "Student {}: unreadable active flag '{}', keeping active",
                student.id,
                active
            ),
        }
    }

    Ok(student)
}

/// `id,fullName,email,department`
pub(crate) fn parse_instructor(record: &StringRecord) -> Result<Instructor, String> {
    require_fields(record, 4)?;

    Ok(Instructor::new(
        field(record, 0),
        field(record, 1),
        field(record, 2),
        field(record, 3),
    ))
}

/// `code,title,credits,semester,instructorId`
///
/// An instructor id missing from `instructors` leaves the course unassigned.
pub(crate) fn parse_course(
    record: &StringRecord,
    instructors: &BTreeMap<String, Instructor>,
) -> Result<Course, String> {
    require_fields(record, 5)?;

    let code: CourseCode = field(record, 0).parse().map_err(|e| format!("{}", e))?;

    let credits = field(record, 2)
        .parse::<u32>()
        .map_err(|_| format!("credits '{}' is not a number", field(record, 2)))?;

    let semester = Semester::parse(field(record, 3))
        .ok_or_else(|| format!("unknown semester '{}'", field(record, 3)))?;

    let instructor_id = field(record, 4);
    let instructor_id = if instructors.contains_key(instructor_id) {
        Some(instructor_id.to_string())
    } else {
        if !instructor_id.is_empty() && instructor_id != "N/A" {
            tracing::debug!(
                "Course {}: instructor '{}' is unknown, leaving unassigned",
                code,
                instructor_id
            );
        }
        None
    };

    let options = CourseOptions {
        credits,
        semester,
        instructor_id,
    };

    Course::with_options(code, field(record, 1), options).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn record(line: &str) -> StringRecord {
        let lines = rows(&["header", line]);
        read_rows(&lines).remove(0).1.unwrap()
    }

    #[test]
    fn test_read_rows_skips_header_and_tracks_lines() {
        let lines = rows(&["a,b", "1,2", "3,4"]);
        let parsed = read_rows(&lines);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].0, 2);
        assert_eq!(parsed[1].0, 3);
        assert_eq!(&parsed[1].1.as_ref().unwrap()[0], "3");
    }

    #[test]
    fn test_unterminated_quote_only_affects_its_line() {
        let lines = rows(&[
            "id,regNo,fullName,email",
            "s001,B1,\"Alice,a@x.com",
            "",
            "s002,B2,Bob,b@x.com",
            "s003,B3,Carl,c@x.com",
        ]);
        let parsed = read_rows(&lines);
        assert_eq!(parsed.len(), 3);

        let (line, bad) = &parsed[0];
        assert_eq!(*line, 2);
        assert!(bad.as_ref().map_or(true, |r| parse_student(r).is_err()));

        let lines_kept: Vec<u64> = parsed[1..].iter().map(|(line, _)| *line).collect();
        assert_eq!(lines_kept, vec![4, 5]);
        let bob = parse_student(parsed[1].1.as_ref().unwrap()).unwrap();
        assert_eq!(bob.full_name, "Bob");
    }

    #[test]
    fn test_read_rows_trims_fields() {
        let rec = record(" s001 , B23001 ,Alice ,a@x.com");
        assert_eq!(&rec[0], "s001");
        assert_eq!(&rec[2], "Alice");
    }

    #[test]
    fn test_read_rows_handles_quotes() {
        let rec = record("i03,\"Lee, Ann\",ann@x.com,History");
        assert_eq!(rec.len(), 4);
        assert_eq!(&rec[1], "Lee, Ann");
    }

    #[test]
    fn test_parse_student() {
        let student = parse_student(&record("s001,B23001,Alice Johnson,alice@example.com")).unwrap();
        assert_eq!(student.id, "s001");
        assert_eq!(student.reg_no, "B23001");
        assert!(student.active);
    }

    #[test]
    fn test_parse_student_active_column() {
        let student = parse_student(&record("s001,B23001,Alice,a@x.com,false")).unwrap();
        assert!(!student.active);

        let student = parse_student(&record("s001,B23001,Alice,a@x.com,TRUE")).unwrap();
        assert!(student.active);
    }

    #[test]
    fn test_parse_student_too_few_fields() {
        let err = parse_student(&record("s001,B23001,Alice")).unwrap_err();
        assert!(err.contains("expected at least 4 fields"));
    }

    #[test]
    fn test_parse_instructor() {
        let instructor =
            parse_instructor(&record("i01,Dr. Evelyn Reed,e.reed@example.com,Computer Science"))
                .unwrap();
        assert_eq!(instructor.department, "Computer Science");
    }

    #[test]
    fn test_parse_course_resolves_instructor() {
        let mut instructors = BTreeMap::new();
        instructors.insert(
            "i01".to_string(),
            Instructor::new("i01", "Dr. Evelyn Reed", "e.reed@example.com", "CS"),
        );

        let course = parse_course(&record("CS101,Intro to Programming,3,fall,i01"), &instructors)
            .unwrap();
        assert_eq!(course.code().to_string(), "CS101");
        assert_eq!(course.semester, Semester::Fall);
        assert_eq!(course.instructor_id.as_deref(), Some("i01"));

        let course = parse_course(&record("MA201,Calculus I,4,FALL,i99"), &instructors).unwrap();
        assert_eq!(course.instructor_id, None);
    }

    #[test]
    fn test_parse_course_failures() {
        let instructors = BTreeMap::new();
        assert!(parse_course(&record("CS101,Intro,three,FALL,i01"), &instructors)
            .unwrap_err()
            .contains("not a number"));
        assert!(parse_course(&record("CS101,Intro,3,AUTUMN,i01"), &instructors)
            .unwrap_err()
            .contains("unknown semester"));
        assert!(parse_course(&record("101CS,Intro,3,FALL,i01"), &instructors).is_err());
        assert!(parse_course(&record("CS101,Intro,0,FALL,i01"), &instructors).is_err());
        assert!(parse_course(&record("CS101,Intro,3,FALL"), &instructors).is_err());
    }
}
