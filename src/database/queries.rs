//! SQL query operations for database access
//!
//! One function per statement. Each takes a borrowed connection; callers
//! decide how long it lives. For business-level operations, use the
//! `GymDesk` API.

use rusqlite::{Connection, OptionalExtension, Row, params};
use crate::database::models::{
    ActivityRecord, Employee, Member, MemberUpdate, NewActivity, NewMember, NewPayment,
    NewTraining, Payment, Training,
};
use crate::error::{DeskError, Result, Violation, constraint_violation};

/// Translate a failed write into the desk's error taxonomy
///
/// `unique` names the column and value that a unique violation refers to,
/// `member_id` the member a foreign key violation refers to.
fn write_error(
    err: rusqlite::Error,
    unique: Option<(&'static str, &str)>,
    member_id: Option<i64>,
) -> DeskError {
    match (constraint_violation(&err), unique, member_id) {
        (Some(Violation::Unique), Some((field, value)), _) => DeskError::DuplicateKey {
            field,
            value: value.to_string(),
        },
        (Some(Violation::ForeignKey), _, Some(id)) => DeskError::MemberNotFound(id),
        _ => err.into(),
    }
}

fn count(conn: &Connection, sql: &str) -> Result<usize> {
    let n: i64 = conn.query_row(sql, [], |row| row.get(0))?;
    Ok(n as usize)
}

// ============================================================================
// Members queries
// ============================================================================

const MEMBER_COLUMNS: &str =
    "id, name, document, COALESCE(phone, ''), COALESCE(address, ''), registration_date";

fn member_from_row(row: &Row<'_>) -> rusqlite::Result<Member> {
    Ok(Member {
        id: row.get(0)?,
        name: row.get(1)?,
        document: row.get(2)?,
        phone: row.get(3)?,
        address: row.get(4)?,
        registration_date: row.get(5)?,
    })
}

/// Insert a member, returning the new row id
pub fn insert_member(conn: &Connection, member: &NewMember) -> Result<i64> {
    conn.execute(
        "INSERT INTO members (name, document, phone, address, registration_date)
         VALUES (?, ?, ?, ?, ?)",
        params![member.name, member.document, member.phone, member.address, member.registration_date],
    )
    .map_err(|e| write_error(e, Some(("document", member.document.as_str())), None))?;
    Ok(conn.last_insert_rowid())
}

/// All members ordered by name
pub fn list_members(conn: &Connection) -> Result<Vec<Member>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {MEMBER_COLUMNS} FROM members ORDER BY name ASC, id ASC"
    ))?;

    let members = stmt.query_map([], member_from_row)?;
    members.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

/// Get a member by id
pub fn get_member(conn: &Connection, id: i64) -> Result<Option<Member>> {
    conn.query_row(
        &format!("SELECT {MEMBER_COLUMNS} FROM members WHERE id = ?"),
        [id],
        member_from_row,
    )
    .optional()
    .map_err(Into::into)
}

/// Overwrite a member's mutable fields; returns the number of rows changed
pub fn update_member(conn: &Connection, id: i64, update: &MemberUpdate) -> Result<usize> {
    conn.execute(
        "UPDATE members SET name = ?, document = ?, phone = ?, address = ? WHERE id = ?",
        params![update.name, update.document, update.phone, update.address, id],
    )
    .map_err(|e| write_error(e, Some(("document", update.document.as_str())), None))
}

/// Delete a member; dependent rows go with it through ON DELETE CASCADE
pub fn delete_member(conn: &Connection, id: i64) -> Result<usize> {
    Ok(conn.execute("DELETE FROM members WHERE id = ?", [id])?)
}

/// Number of members
pub fn count_members(conn: &Connection) -> Result<usize> {
    count(conn, "SELECT COUNT(*) FROM members")
}

// ============================================================================
// Trainings queries
// ============================================================================

const TRAINING_COLUMNS: &str =
    "id, member_id, COALESCE(training_type, ''), COALESCE(description, ''), duration, start_date";

fn training_from_row(row: &Row<'_>) -> rusqlite::Result<Training> {
    Ok(Training {
        id: row.get(0)?,
        member_id: row.get(1)?,
        training_type: row.get(2)?,
        description: row.get(3)?,
        duration: row.get(4)?,
        start_date: row.get(5)?,
    })
}

/// Insert a training, returning the new row id
pub fn insert_training(conn: &Connection, training: &NewTraining) -> Result<i64> {
    conn.execute(
        "INSERT INTO trainings (member_id, training_type, description, duration, start_date)
         VALUES (?, ?, ?, ?, ?)",
        params![
            training.member_id,
            training.training_type,
            training.description,
            training.duration,
            training.start_date
        ],
    )
    .map_err(|e| write_error(e, None, Some(training.member_id)))?;
    Ok(conn.last_insert_rowid())
}

/// Trainings, newest start date first, optionally for one member
pub fn list_trainings(conn: &Connection, member_id: Option<i64>) -> Result<Vec<Training>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {TRAINING_COLUMNS} FROM trainings
         WHERE ?1 IS NULL OR member_id = ?1
         ORDER BY start_date DESC, id DESC"
    ))?;

    let trainings = stmt.query_map([member_id], training_from_row)?;
    trainings.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

/// Get a training by id
pub fn get_training(conn: &Connection, id: i64) -> Result<Option<Training>> {
    conn.query_row(
        &format!("SELECT {TRAINING_COLUMNS} FROM trainings WHERE id = ?"),
        [id],
        training_from_row,
    )
    .optional()
    .map_err(Into::into)
}

/// Overwrite every column of a training; returns the number of rows changed
pub fn update_training(conn: &Connection, id: i64, training: &NewTraining) -> Result<usize> {
    conn.execute(
        "UPDATE trainings
         SET member_id = ?, training_type = ?, description = ?, duration = ?, start_date = ?
         WHERE id = ?",
        params![
            training.member_id,
            training.training_type,
            training.description,
            training.duration,
            training.start_date,
            id
        ],
    )
    .map_err(|e| write_error(e, None, Some(training.member_id)))
}

/// Delete a training
pub fn delete_training(conn: &Connection, id: i64) -> Result<usize> {
    Ok(conn.execute("DELETE FROM trainings WHERE id = ?", [id])?)
}

// ============================================================================
// Payments queries
// ============================================================================

fn payment_from_row(row: &Row<'_>) -> rusqlite::Result<Payment> {
    Ok(Payment {
        id: row.get(0)?,
        member_id: row.get(1)?,
        amount: row.get(2)?,
        payment_date: row.get(3)?,
        status: row.get(4)?,
    })
}

/// Insert a payment, returning the new row id
pub fn insert_payment(conn: &Connection, payment: &NewPayment) -> Result<i64> {
    conn.execute(
        "INSERT INTO payments (member_id, amount, payment_date, status) VALUES (?, ?, ?, ?)",
        params![payment.member_id, payment.amount, payment.payment_date, payment.status],
    )
    .map_err(|e| write_error(e, None, Some(payment.member_id)))?;
    Ok(conn.last_insert_rowid())
}

/// Payments, most recent first, optionally for one member
pub fn list_payments(conn: &Connection, member_id: Option<i64>) -> Result<Vec<Payment>> {
    let mut stmt = conn.prepare(
        "SELECT id, member_id, amount, payment_date, COALESCE(status, '') FROM payments
         WHERE ?1 IS NULL OR member_id = ?1
         ORDER BY payment_date DESC, id DESC",
    )?;

    let payments = stmt.query_map([member_id], payment_from_row)?;
    payments.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

// ============================================================================
// Activity history queries
// ============================================================================

fn activity_from_row(row: &Row<'_>) -> rusqlite::Result<ActivityRecord> {
    Ok(ActivityRecord {
        id: row.get(0)?,
        member_id: row.get(1)?,
        activity: row.get(2)?,
        date: row.get(3)?,
        execution_time: row.get(4)?,
    })
}

/// Append an activity record, returning the new row id
pub fn insert_activity(conn: &Connection, activity: &NewActivity) -> Result<i64> {
    conn.execute(
        "INSERT INTO activity_history (member_id, activity, activity_date, execution_time)
         VALUES (?, ?, ?, ?)",
        params![activity.member_id, activity.activity, activity.date, activity.execution_time],
    )
    .map_err(|e| write_error(e, None, Some(activity.member_id)))?;
    Ok(conn.last_insert_rowid())
}

/// Activity history, most recent first, optionally for one member
pub fn list_activities(conn: &Connection, member_id: Option<i64>) -> Result<Vec<ActivityRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, member_id, COALESCE(activity, ''), activity_date, execution_time
         FROM activity_history
         WHERE ?1 IS NULL OR member_id = ?1
         ORDER BY activity_date DESC, id DESC",
    )?;

    let activities = stmt.query_map([member_id], activity_from_row)?;
    activities.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

// ============================================================================
// Employees queries
// ============================================================================

/// Insert an employee with an already-hashed password
pub fn insert_employee(
    conn: &Connection,
    name: &str,
    role: &str,
    login: &str,
    password_hash: &str,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO employees (name, role, login, password_hash) VALUES (?, ?, ?, ?)",
        params![name, role, login, password_hash],
    )
    .map_err(|e| write_error(e, Some(("login", login)), None))?;
    Ok(conn.last_insert_rowid())
}

/// Insert an employee only while the table is empty
///
/// Check and insert are one statement, so concurrent openers of an empty
/// store create at most one row. Returns the number of rows inserted.
pub fn insert_first_employee(
    conn: &Connection,
    name: &str,
    role: &str,
    login: &str,
    password_hash: &str,
) -> Result<usize> {
    conn.execute(
        "INSERT INTO employees (name, role, login, password_hash)
         SELECT ?, ?, ?, ? WHERE NOT EXISTS (SELECT 1 FROM employees)",
        params![name, role, login, password_hash],
    )
    .map_err(|e| write_error(e, Some(("login", login)), None))
}

/// Look up an employee by login
pub fn find_employee_by_login(conn: &Connection, login: &str) -> Result<Option<Employee>> {
    conn.query_row(
        "SELECT id, name, COALESCE(role, ''), login, password_hash FROM employees WHERE login = ?",
        [login],
        |row| {
            Ok(Employee {
                id: row.get(0)?,
                name: row.get(1)?,
                role: row.get(2)?,
                login: row.get(3)?,
                password_hash: row.get(4)?,
            })
        },
    )
    .optional()
    .map_err(Into::into)
}

/// Number of employees
pub fn count_employees(conn: &Connection) -> Result<usize> {
    count(conn, "SELECT COUNT(*) FROM employees")
}
