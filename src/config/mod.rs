//! Configuration module for the records manager
//!
//! This module provides configuration management including:
//! - Virtual directory layout (data, exports, backups)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CampusPaths;
pub use settings::Settings;
