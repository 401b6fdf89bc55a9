//! Syntax checks for contact fields.
//!
//! All validators are pure and total: malformed input yields `false` (or
//! `None`), never a panic or an error.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("valid email regex"));

const DATE_FORMAT: &str = "%Y-%m-%d";

/// True iff `phone` is exactly ten ASCII digits.
///
/// ```
/// use rolo::validate::validate_phone;
///
/// assert!(validate_phone("0123456789"));
/// assert!(!validate_phone("123-456-7890"));
/// assert!(!validate_phone("123456789"));
/// ```
pub fn validate_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}

/// True iff `email` looks like `local@domain.tld`: a non-empty local part,
/// one `@`, then a domain with at least one `.` that has text on both sides.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// True iff `date` is a real calendar date written as `YYYY-MM-DD`.
pub fn validate_date(date: &str) -> bool {
    parse_date(date).is_some()
}

/// Parses a strict `YYYY-MM-DD` date.
///
/// chrono alone accepts unpadded fields such as `1990-5-1`, so the shape is
/// checked before parsing.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    let bytes = date.as_bytes();
    if bytes.len() != 10 {
        return None;
    }
    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}
