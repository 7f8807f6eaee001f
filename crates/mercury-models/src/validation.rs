//! Field validators shared by request DTOs.

use chrono::NaiveTime;
use validator::{ValidateEmail, ValidationError};

/// Parses a clock time in 24-hour `HH:MM` form.
pub fn parse_clock_time(value: &str) -> Option<NaiveTime> {
    if value.len() != 5 {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

pub fn validate_clock_time(value: &str) -> Result<(), ValidationError> {
    match parse_clock_time(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("clock_time")
            .with_message("time must use the HH:MM format".into())),
    }
}

/// Rejects empty and whitespace-only values.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// A required, well-formed email address.
pub fn validate_email_address(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("email is required".into()));
    }
    if !value.validate_email() {
        return Err(ValidationError::new("email")
            .with_message("email must be a valid email address".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(validate_not_blank("pw").is_ok());
        assert!(validate_not_blank(" a ").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("\t\n").is_err());
    }

    #[test]
    fn test_email_address() {
        assert!(validate_email_address("a@school.test").is_ok());

        let blank = validate_email_address("   ").unwrap_err();
        assert_eq!(blank.message.as_deref(), Some("email is required"));

        let malformed = validate_email_address("not-an-email").unwrap_err();
        assert_eq!(malformed.code, "email");
    }

    #[test]
    fn test_clock_time() {
        assert!(validate_clock_time("08:00").is_ok());
        assert!(validate_clock_time("23:59").is_ok());
        assert!(validate_clock_time("24:00").is_err());
        assert!(validate_clock_time("8:00").is_err());
        assert!(validate_clock_time("08:00:00").is_err());
        assert!(validate_clock_time("").is_err());
    }
}
