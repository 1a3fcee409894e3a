//! Validation helpers
//!
//! Parsing of the date and time strings typed at the terminal, plus the
//! small checks the request DTOs share.

use chrono::{NaiveDate, NaiveTime};
use validator::ValidationError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Validate and convert a string into a date
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validate and convert a string into a time of day.
///
/// Seconds are optional at the terminal: `09:30` and `09:30:00` are equal.
pub fn validate_time(value: &str) -> Result<NaiveTime, ValidationError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| {
            let mut error = ValidationError::new("time");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"HH:MM[:SS]".to_string());
            error
        })
}

/// Validate that a string is not blank
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Card numbers are digits only, spaces allowed between groups
pub fn validate_card_number(value: &str) -> Result<(), ValidationError> {
    let digits: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() < 12 || digits.len() > 19 || !digits.chars().all(|c| c.is_ascii_digit()) {
        let mut error = ValidationError::new("card_number");
        error.add_param("length".into(), &digits.len());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        let date = validate_date("2024-03-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert!(validate_date("01/03/2024").is_err());
    }

    #[test]
    fn test_validate_time_accepts_short_form() {
        let long = validate_time("09:30:00").unwrap();
        let short = validate_time("09:30").unwrap();
        assert_eq!(long, short);
        assert!(validate_time("25:00").is_err());
    }

    #[test]
    fn test_validate_card_number() {
        assert!(validate_card_number("4111 1111 1111 1111").is_ok());
        assert!(validate_card_number("4111-1111").is_err());
        assert!(validate_card_number("abcd efgh ijkl").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("Vancouver").is_ok());
        assert!(validate_not_empty("   ").is_err());
    }
}
