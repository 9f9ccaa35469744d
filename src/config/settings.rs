//! User settings for the records manager
//!
//! Settings live in a small JSON file on the real filesystem. They only name
//! the virtual directories and whether the fixture data is seeded at startup.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::CampusError;

/// Environment variable that points at a settings file
pub const CONFIG_ENV_VAR: &str = "CCRM_CONFIG";

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Virtual directory the tables are imported from
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Virtual directory the tables are exported to
    #[serde(default = "default_exports_dir")]
    pub exports_dir: String,

    /// Virtual directory for timestamped backups
    #[serde(default = "default_backup_dir")]
    pub backup_dir: String,

    /// Whether the sample tables are written into the data directory at startup
    #[serde(default = "default_seed_fixtures")]
    pub seed_fixtures: bool,
}

/// Newest settings layout this build understands
pub const SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_exports_dir() -> String {
    "exports".to_string()
}

fn default_backup_dir() -> String {
    "backups".to_string()
}

fn default_seed_fixtures() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            data_dir: default_data_dir(),
            exports_dir: default_exports_dir(),
            backup_dir: default_backup_dir(),
            seed_fixtures: default_seed_fixtures(),
        }
    }
}

impl Settings {
    /// Platform default location of the settings file, if a home directory exists
    pub fn default_location() -> Option<PathBuf> {
        ProjectDirs::from("", "", "ccrm").map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load settings from a file, or use defaults if the file doesn't exist
    pub fn load_or_default(path: &Path) -> Result<Self, CampusError> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| CampusError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            CampusError::Config(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a file, creating its directory if needed
    pub fn save(&self, path: &Path) -> Result<(), CampusError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CampusError::Io(format!("Failed to create config directory: {}", e))
            })?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CampusError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, contents)
            .map_err(|e| CampusError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject unknown schema versions and blank or clashing directory names
    pub fn validate(&self) -> Result<(), CampusError> {
        if self.schema_version == 0 || self.schema_version > SCHEMA_VERSION {
            return Err(CampusError::Config(format!(
                "unsupported schema_version {} (expected 1 to {})",
                self.schema_version, SCHEMA_VERSION
            )));
        }

        let dirs = [
            ("data_dir", &self.data_dir),
            ("exports_dir", &self.exports_dir),
            ("backup_dir", &self.backup_dir),
        ];

        for (name, dir) in dirs {
            if dir.trim().is_empty() {
                return Err(CampusError::Config(format!("{} cannot be empty", name)));
            }
        }

        if self.data_dir == self.exports_dir
            || self.data_dir == self.backup_dir
            || self.exports_dir == self.backup_dir
        {
            return Err(CampusError::Config(
                "data_dir, exports_dir and backup_dir must be distinct".into(),
            ));
        }

        Ok(())
    }
}
