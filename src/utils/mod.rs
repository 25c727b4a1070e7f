//! Utility functions

pub mod common;
pub mod input;

pub use common::{parse_date, today};
pub use input::{
    check_amount, check_id, ensure_not_blank, optional_text, parse_amount, parse_id,
    parse_minutes, required_text,
};
