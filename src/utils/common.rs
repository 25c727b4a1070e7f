//! Common utility functions

use chrono::{Local, NaiveDate};

/// Date format for database storage and user entry (ISO-8601 calendar date)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date
///
/// Month and day must be zero-padded; `2024-3-9` is rejected.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let bytes = s.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes.iter().enumerate().all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-03-09"), NaiveDate::from_ymd_opt(2024, 3, 9));
        assert_eq!(parse_date(" 2024-12-31 "), NaiveDate::from_ymd_opt(2024, 12, 31));
        assert!(parse_date("2024-02-30").is_none());
        assert!(parse_date("09/03/2024").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn test_parse_date_requires_padding() {
        assert!(parse_date("2024-3-9").is_none());
        assert!(parse_date("2024-03-9").is_none());
        assert!(parse_date("2024-3-09").is_none());
        assert!(parse_date("2024-+3-09").is_none());
    }

    #[test]
    fn test_today_round_trips() {
        let now = today();
        assert_eq!(parse_date(&now.format(DATE_FORMAT).to_string()), Some(now));
    }
}
