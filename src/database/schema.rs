//! Database schema definitions

/// SQL to create the members table
pub const CREATE_MEMBERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS members (
    id                INTEGER PRIMARY KEY AUTOINCREMENT,
    name              TEXT NOT NULL,
    document          TEXT NOT NULL UNIQUE,
    phone             TEXT,
    address           TEXT,
    registration_date TEXT
)
"#;

/// SQL to create the trainings table
pub const CREATE_TRAININGS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS trainings (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    member_id     INTEGER NOT NULL REFERENCES members(id) ON DELETE CASCADE,
    training_type TEXT,
    description   TEXT,
    duration      INTEGER,
    start_date    TEXT
)
"#;

/// SQL to create the payments table
pub const CREATE_PAYMENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS payments (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    member_id     INTEGER NOT NULL REFERENCES members(id) ON DELETE CASCADE,
    amount        REAL NOT NULL CHECK (amount >= 0),
    payment_date  TEXT,
    status        TEXT
)
"#;

/// SQL to create the activity history table
pub const CREATE_ACTIVITY_HISTORY_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS activity_history (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    member_id       INTEGER NOT NULL REFERENCES members(id) ON DELETE CASCADE,
    activity        TEXT,
    activity_date   TEXT,
    execution_time  INTEGER
)
"#;

/// SQL to create the employees table
pub const CREATE_EMPLOYEES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    name          TEXT NOT NULL,
    role          TEXT,
    login         TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL
)
"#;

/// All table creation statements in order (parents before children)
pub const CREATE_ALL_TABLES: &[&str] = &[
    CREATE_MEMBERS_TABLE,
    CREATE_TRAININGS_TABLE,
    CREATE_PAYMENTS_TABLE,
    CREATE_ACTIVITY_HISTORY_TABLE,
    CREATE_EMPLOYEES_TABLE,
];

/// Pragmas applied to every connection
pub const CONNECTION_PRAGMAS: &str = "PRAGMA foreign_keys = ON;";

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        for _ in 0..2 {
            for sql in CREATE_ALL_TABLES {
                conn.execute(sql, []).unwrap();
            }
        }

        let tables: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'
             AND name IN ('members', 'trainings', 'payments', 'activity_history', 'employees')",
            [],
            |row| row.get(0),
        ).unwrap();
        assert_eq!(tables, 5);
    }
}
