//! Desk configuration
//!
//! Stored as JSON. A missing file means "use the defaults"; the database
//! path can be overridden with the `GYMDESK_DB_PATH` environment variable.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::{DATABASE_FILENAME, DB_PATH_ENV};

/// Runtime settings for a `GymDesk`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// SQLite file holding all tables
    pub database_path: PathBuf,
    /// Create the `admin`/`admin` account when no employee exists
    pub provision_default_admin: bool,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DATABASE_FILENAME),
            provision_default_admin: true,
        }
    }
}

impl DeskConfig {
    /// Default settings for a database at `path`
    pub fn with_database(path: &Path) -> Self {
        Self {
            database_path: path.to_path_buf(),
            ..Self::default()
        }
    }

    /// Load settings from a JSON file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Write settings as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Apply environment overrides
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(path) = std::env::var_os(DB_PATH_ENV)
            && !path.is_empty()
        {
            self.database_path = PathBuf::from(path);
        }
        self
    }
}
