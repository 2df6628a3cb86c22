//! Syntactic checks for booking fields.
//!
//! The email check only looks for a `local@domain.tld` shape. It is not an
//! RFC 5322 parser: addresses with quoted local parts or IP literals are
//! rejected, and some undeliverable addresses are accepted.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[01][0-9]|2[0-3]):[0-5][0-9]$").expect("time pattern"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.\w+$").expect("email pattern"));

/// `true` iff `s` is a 24-hour `HH:MM` time, 00:00 through 23:59.
pub fn is_valid_time(s: &str) -> bool {
    TIME_RE.is_match(s)
}

/// `true` iff `s` has the shape `local@domain.tld`.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Rejects empty and whitespace-only input with code `blank`.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("blank", "must not be empty"));
    }
    Ok(())
}

/// `validator` adapter for [`is_valid_time`].
pub fn validate_time(value: &str) -> Result<(), ValidationError> {
    validate_not_blank(value)?;
    if !is_valid_time(value) {
        return Err(failure("time", "expected HH:MM in 24-hour format"));
    }
    Ok(())
}

/// `validator` adapter for [`is_valid_email`].
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    validate_not_blank(value)?;
    if !is_valid_email(value) {
        return Err(failure("email", "expected an address like name@example.com"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_minute_of_the_day() {
        for h in 0..24 {
            for m in 0..60 {
                let s = format!("{:02}:{:02}", h, m);
                assert!(is_valid_time(&s), "{} should be valid", s);
            }
        }
    }

    #[test]
    fn rejects_malformed_times() {
        for s in [
            "24:00", "9:30", "7:45", "12:60", "19:60", "abc", "", "12:5", "12:345", " 12:30",
            "12:30 ", "12-30", "1230", "12:30:00", "١٢:٣٠",
        ] {
            assert!(!is_valid_time(s), "{:?} should be invalid", s);
        }
    }

    #[test]
    fn scenario_times() {
        assert!(is_valid_time("19:45"));
        assert!(!is_valid_time("7:45"));
        assert!(!is_valid_time("19:60"));
    }

    #[test]
    fn accepts_simple_addresses() {
        for s in [
            "asha@example.com",
            "ASHA@EXAMPLE.COM",
            "first.last@mail.example.co",
            "x+tag@sub.domain.org",
            "a@b.c",
        ] {
            assert!(is_valid_email(s), "{:?} should be valid", s);
        }
    }

    #[test]
    fn rejects_addresses_without_at_or_dot() {
        for s in [
            "asha.example.com",
            "asha@example",
            "first.last@example",
            "@example.com",
            "asha@.com",
            "asha@example.",
            "as ha@example.com",
            "asha@@example.com",
            "",
        ] {
            assert!(!is_valid_email(s), "{:?} should be invalid", s);
        }
    }

    #[test]
    fn adapters_report_blank_before_pattern() {
        assert_eq!(validate_time("  ").unwrap_err().code, "blank");
        assert_eq!(validate_time("7:45").unwrap_err().code, "time");
        assert!(validate_time("07:45").is_ok());

        assert_eq!(validate_email("").unwrap_err().code, "blank");
        assert_eq!(validate_email("nope").unwrap_err().code, "email");
        assert!(validate_email("a@b.io").is_ok());
    }

    #[test]
    fn not_blank_accepts_text() {
        assert!(validate_not_blank("Asha").is_ok());
        assert!(validate_not_blank("\t").is_err());
    }
}
