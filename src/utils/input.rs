//! Parsers for user-entered field values
//!
//! Front-ends hand over raw strings. These turn them into typed values or
//! an `InvalidInput` error naming the field.

use crate::error::{DeskError, Result};

/// Trim and require a non-empty value
pub fn required_text(field: &'static str, value: &str) -> Result<String> {
    ensure_not_blank(field, value)?;
    Ok(value.trim().to_string())
}

/// Require a value that is not blank, without altering it
pub fn ensure_not_blank(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DeskError::invalid(field, "must not be empty"));
    }
    Ok(())
}

/// Require a finite, non-negative money amount
pub fn check_amount(field: &'static str, amount: f64) -> Result<()> {
    if !amount.is_finite() {
        return Err(DeskError::invalid(field, "must be a finite number"));
    }
    if amount < 0.0 {
        return Err(DeskError::invalid(field, "must not be negative"));
    }
    Ok(())
}

/// Require a positive row id
pub fn check_id(field: &'static str, id: i64) -> Result<()> {
    if id <= 0 {
        return Err(DeskError::invalid(field, "must be positive"));
    }
    Ok(())
}

/// Trim a free-text value that may be empty
pub fn optional_text(value: &str) -> String {
    value.trim().to_string()
}

/// Parse a row id (positive integer)
pub fn parse_id(field: &'static str, value: &str) -> Result<i64> {
    let id: i64 = value
        .trim()
        .parse()
        .map_err(|_| DeskError::invalid(field, format!("'{}' is not a whole number", value.trim())))?;
    check_id(field, id)?;
    Ok(id)
}

/// Parse a non-negative number of minutes
pub fn parse_minutes(field: &'static str, value: &str) -> Result<u32> {
    let value = value.trim();
    if value.starts_with('-') {
        return Err(DeskError::invalid(field, "must not be negative"));
    }
    value
        .parse()
        .map_err(|_| DeskError::invalid(field, format!("'{}' is not a whole number of minutes", value)))
}

/// Parse a non-negative money amount; accepts `,` as the decimal separator
pub fn parse_amount(field: &'static str, value: &str) -> Result<f64> {
    let value = value.trim();
    let normalized = value.replace(',', ".");
    let amount: f64 = normalized
        .parse()
        .map_err(|_| DeskError::invalid(field, format!("'{}' is not a number", value)))?;
    check_amount(field, amount)?;
    Ok(amount)
}
