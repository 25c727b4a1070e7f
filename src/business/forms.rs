//! Form input validation
//!
//! Front-ends collect every field as text. Each form converts its strings
//! into the typed input the database layer accepts, or reports the first
//! field that does not parse.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::database::{MemberUpdate, NewActivity, NewEmployee, NewMember, NewPayment, NewTraining};
use crate::error::{DeskError, Result};
use crate::utils::{ensure_not_blank, optional_text, parse_amount, parse_date, parse_id, parse_minutes, required_text, today};

/// Parse a required `YYYY-MM-DD` date
fn required_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    parse_date(value).ok_or_else(|| {
        DeskError::invalid(field, format!("'{}' is not a YYYY-MM-DD date", value.trim()))
    })
}

/// Parse a date, defaulting to today when left blank
fn date_or_today(field: &'static str, value: &str) -> Result<NaiveDate> {
    if value.trim().is_empty() {
        return Ok(today());
    }
    required_date(field, value)
}

/// Member registration / edit form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberForm {
    pub name: String,
    pub document: String,
    pub phone: String,
    pub address: String,
    /// Blank means today
    pub registration_date: String,
}

impl MemberForm {
    /// Validate for registration
    pub fn validate(&self) -> Result<NewMember> {
        let update = self.validate_update()?;
        Ok(NewMember {
            name: update.name,
            document: update.document,
            phone: update.phone,
            address: update.address,
            registration_date: date_or_today("registration date", &self.registration_date)?,
        })
    }

    /// Validate for editing an existing member; the registration date is ignored
    pub fn validate_update(&self) -> Result<MemberUpdate> {
        Ok(MemberUpdate {
            name: required_text("name", &self.name)?,
            document: required_text("document", &self.document)?,
            phone: optional_text(&self.phone),
            address: optional_text(&self.address),
        })
    }
}

/// Training plan form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingForm {
    pub member_id: String,
    pub training_type: String,
    pub description: String,
    /// Minutes
    pub duration: String,
    pub start_date: String,
}

impl TrainingForm {
    pub fn validate(&self) -> Result<NewTraining> {
        Ok(NewTraining {
            member_id: parse_id("member id", &self.member_id)?,
            training_type: optional_text(&self.training_type),
            description: optional_text(&self.description),
            duration: parse_minutes("duration", &self.duration)?,
            start_date: required_date("start date", &self.start_date)?,
        })
    }
}

/// Payment form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentForm {
    pub member_id: String,
    pub amount: String,
    /// Blank means today
    pub payment_date: String,
    pub status: String,
}

impl PaymentForm {
    pub fn validate(&self) -> Result<NewPayment> {
        Ok(NewPayment {
            member_id: parse_id("member id", &self.member_id)?,
            amount: parse_amount("amount", &self.amount)?,
            payment_date: date_or_today("payment date", &self.payment_date)?,
            status: optional_text(&self.status),
        })
    }
}

/// Activity log form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityForm {
    pub member_id: String,
    pub activity: String,
    /// Blank means today
    pub date: String,
    /// Minutes
    pub execution_time: String,
}

impl ActivityForm {
    pub fn validate(&self) -> Result<NewActivity> {
        Ok(NewActivity {
            member_id: parse_id("member id", &self.member_id)?,
            activity: required_text("activity", &self.activity)?,
            date: date_or_today("date", &self.date)?,
            execution_time: parse_minutes("execution time", &self.execution_time)?,
        })
    }
}

/// Staff account form
#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    pub name: String,
    pub role: String,
    pub login: String,
    pub password: String,
}

impl EmployeeForm {
    /// Passwords are taken verbatim; only blankness is checked
    pub fn validate(&self) -> Result<NewEmployee> {
        ensure_not_blank("password", &self.password)?;
        Ok(NewEmployee {
            name: required_text("name", &self.name)?,
            role: optional_text(&self.role),
            login: required_text("login", &self.login)?,
            password: self.password.clone(),
        })
    }
}
