//! Database connection management
//!
//! A `Database` only remembers where the store lives. Every operation
//! borrows a fresh connection for its own duration and drops it on return,
//! so nothing is held open between calls.

use std::path::{Path, PathBuf};
use rusqlite::Connection;
use crate::error::Result;
use super::schema;

/// Handle to the desk's SQLite file
#[derive(Debug, Clone)]
pub struct Database {
    /// Path to the database file
    path: PathBuf,
}

impl Database {
    /// Point at an existing database without touching the schema
    pub fn open(path: &Path) -> Self {
        Self { path: path.to_path_buf() }
    }

    /// Open the database, creating the file and any missing tables
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let db = Self::open(path);
        db.with_connection(|conn| {
            for sql in schema::CREATE_ALL_TABLES {
                conn.execute(sql, [])?;
            }
            Ok(())
        })?;

        log::info!("Schema ready at {}", path.display());
        Ok(db)
    }

    /// Open a new connection with the per-connection pragmas applied
    pub fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.execute_batch(schema::CONNECTION_PRAGMAS)?;
        Ok(conn)
    }

    /// Run `f` against a connection scoped to this call
    pub fn with_connection<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let conn = self.connect()?;
        f(&conn)
    }

    /// Get the database path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_makes_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested").join("academia.db");

        let db = Database::create(&db_path).unwrap();

        assert!(db_path.exists());
        assert_eq!(db.path(), db_path.as_path());
    }

    #[test]
    fn test_connect_enables_foreign_keys() {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::create(&temp_dir.path().join("test.db")).unwrap();

        let enabled: i64 = db.with_connection(|conn| {
            Ok(conn.query_row("PRAGMA foreign_keys", [], |row| row.get(0))?)
        }).unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_create_twice_keeps_data() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        let db = Database::create(&db_path).unwrap();
        db.with_connection(|conn| {
            conn.execute(
                "INSERT INTO members (name, document) VALUES (?, ?)",
                rusqlite::params!["Ana", "111"],
            )?;
            Ok(())
        }).unwrap();

        let db = Database::create(&db_path).unwrap();
        let count: i64 = db.with_connection(|conn| {
            Ok(conn.query_row("SELECT COUNT(*) FROM members", [], |row| row.get(0))?)
        }).unwrap();
        assert_eq!(count, 1);
    }
}
