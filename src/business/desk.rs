//! Main GymDesk API
//!
//! This module provides the primary interface for a gym's front desk:
//! opening the store and bootstrapping it. Entity operations live in the
//! sibling modules as further `impl GymDesk` blocks.

use std::path::Path;
use rusqlite::Connection;
use crate::config::DeskConfig;
use crate::crypto;
use crate::database::{Database, queries};
use crate::error::Result;
use crate::{DEFAULT_ADMIN_LOGIN, DEFAULT_ADMIN_NAME, DEFAULT_ADMIN_PASSWORD};

/// Front-desk interface over one SQLite file
pub struct GymDesk {
    /// Settings the desk was opened with
    pub(crate) config: DeskConfig,
    /// Location of the store; connections are opened per call
    pub(crate) db: Database,
}

impl GymDesk {
    /// Open (creating if needed) the store described by `config`
    ///
    /// Tables are created when absent. When `provision_default_admin` is set
    /// and no employee exists yet, the `admin`/`admin` account is added.
    pub fn open(config: DeskConfig) -> Result<Self> {
        let db = Database::create(&config.database_path)?;
        let desk = Self { config, db };

        if desk.config.provision_default_admin {
            desk.ensure_default_admin()?;
        }

        Ok(desk)
    }

    /// Open the store at `path` with default settings
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(DeskConfig::with_database(path))
    }

    /// Create the default administrator if there are no employees
    ///
    /// Returns true if the account was created.
    pub fn ensure_default_admin(&self) -> Result<bool> {
        let password_hash = crypto::hash_password(DEFAULT_ADMIN_PASSWORD);
        let inserted = self.with_connection(|conn| {
            queries::insert_first_employee(
                conn,
                DEFAULT_ADMIN_NAME,
                DEFAULT_ADMIN_NAME,
                DEFAULT_ADMIN_LOGIN,
                &password_hash,
            )
        })?;

        if inserted > 0 {
            log::warn!(
                "No employees found; created default administrator (login: {}). Change its password.",
                DEFAULT_ADMIN_LOGIN
            );
        }
        Ok(inserted > 0)
    }

    /// Settings the desk was opened with
    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    /// Path of the database file
    pub fn database_path(&self) -> &Path {
        self.db.path()
    }

    pub(crate) fn with_connection<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        self.db.with_connection(f)
    }
}
