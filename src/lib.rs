//! Campus Records - course and records manager
//!
//! This library provides the core functionality of the `ccrm` application:
//! students, instructors and courses kept in an in-memory virtual store,
//! an enrollment engine enforcing the enrollment rules, and CSV import and
//! export of the records.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings file and virtual path layout
//! - `error`: Custom error types
//! - `logging`: Subscriber setup for the binary
//! - `models`: Core data models (students, instructors, courses, enrollments, grades)
//! - `storage`: Virtual storage and its sample data
//! - `codec`: CSV import and export over virtual storage
//! - `services`: Records service, enrollment engine and transcripts
//! - `backup`: Timestamped copies of the exports
//! - `display`: Text rendering for the terminal
//! - `cli`: Command tree, handlers and the line-oriented session
//!
//! # Example
//!
//! ```rust,ignore
//! use campus_records::cli::Campus;
//! use campus_records::config::paths::CampusPaths;
//! use campus_records::storage::{seed_fixtures, MemoryStorage};
//!
//! let storage = MemoryStorage::new();
//! let paths = CampusPaths::default();
//! seed_fixtures(&storage, &paths)?;
//!
//! let (mut campus, _) = Campus::open(&storage, paths)?;
//! campus.enroll("s001", &"CS101".parse()?)?;
//! println!("GPA: {:.2}", campus.engine.gpa("s001"));
//! ```

pub mod backup;
pub mod cli;
pub mod codec;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{CampusError, CampusResult};
