//! Client-side field validation for the lead-capture forms.
//!
//! Validation failures block submission and annotate the offending field
//! inline; they never reach the network. The patterns mirror what the
//! backend enforces so a passing form rarely bounces.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+$").expect("email pattern compiles"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}$").expect("phone pattern compiles"));

static ZIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("zip pattern compiles"));

/// `Err(message)` when `value` is blank.
pub fn require(value: &str, message: &'static str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err(message)
    } else {
        Ok(())
    }
}

/// Loose email shape check: something, an `@`, something.
pub fn validate_email(value: &str) -> Result<(), &'static str> {
    if EMAIL_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err("Invalid email address")
    }
}

/// Ten digits, no punctuation.
pub fn validate_phone(value: &str) -> Result<(), &'static str> {
    if PHONE_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err("Invalid phone number")
    }
}

/// US ZIP: five digits with an optional plus-four suffix.
pub fn validate_zip(value: &str) -> Result<(), &'static str> {
    if ZIP_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err("Invalid zip code")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_blank_and_whitespace() {
        assert_eq!(require("", "Company name is required"), Err("Company name is required"));
        assert_eq!(require("   ", "Address is required"), Err("Address is required"));
        assert!(require("TK Expedited", "Company name is required").is_ok());
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("ops@tkexpedited.com").is_ok());
        assert!(validate_email("a@b").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("two words@example.com").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn phone_is_exactly_ten_digits() {
        assert!(validate_phone("5135559653").is_ok());
        assert!(validate_phone("513-555-9653").is_err());
        assert!(validate_phone("555965").is_err());
        assert!(validate_phone("51355596530").is_err());
    }

    #[test]
    fn zip_allows_plus_four() {
        assert!(validate_zip("45011").is_ok());
        assert!(validate_zip("45011-1234").is_ok());
        assert!(validate_zip("4501").is_err());
        assert!(validate_zip("45011-12").is_err());
        assert!(validate_zip("ABCDE").is_err());
    }
}
