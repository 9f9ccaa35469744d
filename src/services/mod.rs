//! Service layer for the records manager
//!
//! The service layer provides business logic on top of the storage layer:
//! the records service owns the entity collections, the enrollment engine
//! owns the ledger and its rules.

pub mod enrollment;
pub mod records;
pub mod transcript;

pub use enrollment::{EnrollmentEngine, MAX_CREDITS};
pub use records::{LoadSummary, RecordsService, UNASSIGNED_NAME};
pub use transcript::Transcript;
