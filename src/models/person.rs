//! People on campus: students and instructors
//!
//! Both kinds share an identity, a full name and an email. `Person` wraps
//! either kind when callers only need the shared capability.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Stable identifier, assigned externally (e.g. "s001")
    pub id: String,

    /// Registration number, distinct from the id
    pub reg_no: String,

    pub full_name: String,

    pub email: String,

    /// Date the record was created; never changes afterwards
    enrolled_on: NaiveDate,

    /// Whether the student is currently active
    pub active: bool,
}

impl Student {
    /// Create an active student enrolled today
    pub fn new(
        id: impl Into<String>,
        reg_no: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self::enrolled_on(id, reg_no, full_name, email, Local::now().date_naive())
    }

    /// Create an active student with an explicit enrollment date
    pub fn enrolled_on(
        id: impl Into<String>,
        reg_no: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        enrolled_on: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            reg_no: reg_no.into(),
            full_name: full_name.into(),
            email: email.into(),
            enrolled_on,
            active: true,
        }
    }

    /// Date the student record was created
    pub fn enrollment_date(&self) -> NaiveDate {
        self.enrolled_on
    }

    /// One-line profile for display
    pub fn profile(&self) -> String {
        format!(
            "Student: {} (Reg# {}) | Status: {} | Enrolled: {}",
            self.full_name,
            self.reg_no,
            if self.active { "Active" } else { "Inactive" },
            self.enrolled_on
        )
    }
}

/// A teaching instructor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: String,
    pub full_name: String,
    pub email: String,
    /// Department affiliation (free text, e.g. "Computer Science")
    pub department: String,
}

impl Instructor {
    /// Create a new instructor
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            email: email.into(),
            department: department.into(),
        }
    }

    /// One-line profile for display
    pub fn profile(&self) -> String {
        format!(
            "Instructor: {} ({}) - Dept: {}",
            self.full_name, self.email, self.department
        )
    }
}

/// Either kind of person
#[derive(Debug, Clone, Copy)]
pub enum Person<'a> {
    Student(&'a Student),
    Instructor(&'a Instructor),
}

impl<'a> Person<'a> {
    pub fn id(&self) -> &'a str {
        match *self {
            Self::Student(s) => &s.id,
            Self::Instructor(i) => &i.id,
        }
    }

    pub fn full_name(&self) -> &'a str {
        match *self {
            Self::Student(s) => &s.full_name,
            Self::Instructor(i) => &i.full_name,
        }
    }

    pub fn email(&self) -> &'a str {
        match *self {
            Self::Student(s) => &s.email,
            Self::Instructor(i) => &i.email,
        }
    }

    /// Kind-specific profile line
    pub fn profile(&self) -> String {
        match self {
            Self::Student(s) => s.profile(),
            Self::Instructor(i) => i.profile(),
        }
    }
}

impl<'a> From<&'a Student> for Person<'a> {
    fn from(student: &'a Student) -> Self {
        Self::Student(student)
    }
}

impl<'a> From<&'a Instructor> for Person<'a> {
    fn from(instructor: &'a Instructor) -> Self {
        Self::Instructor(instructor)
    }
}

impl fmt::Display for Person<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.profile())
    }
}
