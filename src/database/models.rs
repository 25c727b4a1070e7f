//! Data models for GymDesk database entities
//!
//! Stored rows carry their `id`; the `New*` structs are the already-validated
//! inputs for inserts. Dates are calendar dates stored as `YYYY-MM-DD` text.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::utils::{check_amount, check_id, ensure_not_blank};

/// Gym customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub name: String,
    /// National document id, unique across members
    pub document: String,
    pub phone: String,
    pub address: String,
    pub registration_date: Option<NaiveDate>,
}

/// Input for a new member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMember {
    pub name: String,
    pub document: String,
    pub phone: String,
    pub address: String,
    pub registration_date: NaiveDate,
}

impl NewMember {
    /// Name and document must not be blank
    pub fn validate(&self) -> Result<()> {
        ensure_not_blank("name", &self.name)?;
        ensure_not_blank("document", &self.document)
    }
}

/// Mutable member fields; the registration date never changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberUpdate {
    pub name: String,
    pub document: String,
    pub phone: String,
    pub address: String,
}

impl MemberUpdate {
    /// Name and document must not be blank
    pub fn validate(&self) -> Result<()> {
        ensure_not_blank("name", &self.name)?;
        ensure_not_blank("document", &self.document)
    }
}

impl From<&Member> for MemberUpdate {
    fn from(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            document: member.document.clone(),
            phone: member.phone.clone(),
            address: member.address.clone(),
        }
    }
}

/// Training plan assigned to one member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Training {
    pub id: i64,
    pub member_id: i64,
    pub training_type: String,
    pub description: String,
    /// Planned duration in minutes
    pub duration: u32,
    pub start_date: NaiveDate,
}

/// Input for creating or overwriting a training
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTraining {
    pub member_id: i64,
    pub training_type: String,
    pub description: String,
    pub duration: u32,
    pub start_date: NaiveDate,
}

impl NewTraining {
    pub fn validate(&self) -> Result<()> {
        check_id("member id", self.member_id)
    }
}

/// Payment received from a member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub member_id: i64,
    pub amount: f64,
    pub payment_date: NaiveDate,
    /// Free text, e.g. "paid" or "pending"
    pub status: String,
}

/// Input for a new payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPayment {
    pub member_id: i64,
    pub amount: f64,
    pub payment_date: NaiveDate,
    pub status: String,
}

impl NewPayment {
    /// Amount must be finite and non-negative
    pub fn validate(&self) -> Result<()> {
        check_id("member id", self.member_id)?;
        check_amount("amount", self.amount)
    }
}

/// Log entry for an activity a member completed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: i64,
    pub member_id: i64,
    pub activity: String,
    pub date: NaiveDate,
    /// Execution time in minutes
    pub execution_time: u32,
}

/// Input for a new activity record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewActivity {
    pub member_id: i64,
    pub activity: String,
    pub date: NaiveDate,
    pub execution_time: u32,
}

impl NewActivity {
    pub fn validate(&self) -> Result<()> {
        check_id("member id", self.member_id)?;
        ensure_not_blank("activity", &self.activity)
    }
}

/// Staff account allowed into the desk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub login: String,
    /// Hex SHA-256 of the password
    #[serde(skip_serializing, default)]
    pub password_hash: String,
}

/// Input for a new employee; the password is hashed before storage
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub role: String,
    pub login: String,
    pub password: String,
}

impl NewEmployee {
    /// Name, login and password must not be blank; the password is not trimmed
    pub fn validate(&self) -> Result<()> {
        ensure_not_blank("name", &self.name)?;
        ensure_not_blank("login", &self.login)?;
        ensure_not_blank("password", &self.password)
    }
}
