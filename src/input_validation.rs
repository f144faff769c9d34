//! Different helpers, structs, and consts for user input validation.
use core::fmt;

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Special characters, at least one of which must appear in every password.
pub const SPECIAL_CHARS: &str = "!@#?";

/// Format used for every date the user types or sees.
pub const DATE_FORMAT: &str = "%m-%d-%Y";

/// The reason a password was rejected. Rules are checked in declaration order and only the first
/// failing rule is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordWeakness {
    /// Shorter than [MIN_PASSWORD_LEN].
    TooShort,
    /// Missing an uppercase or a lowercase letter.
    MissingMixedCase,
    /// Missing a letter or a digit.
    MissingLettersAndNumbers,
    /// None of [SPECIAL_CHARS].
    MissingSpecialChar,
}
impl fmt::Display for PasswordWeakness {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PasswordWeakness::TooShort => {
                write!(f, "Password must be at least {MIN_PASSWORD_LEN} characters")
            }
            PasswordWeakness::MissingMixedCase => write!(
                f,
                "Password must be a mixture of both uppercase and lowercase letters."
            ),
            PasswordWeakness::MissingLettersAndNumbers => {
                write!(f, "Password must be a mixture of letters and numbers.")
            }
            PasswordWeakness::MissingSpecialChar => write!(
                f,
                "Password must contain at least one special character from !, @, #, ?."
            ),
        }
    }
}

/// Ensure that the given password satisfies the strength policy.
pub fn validate_password(password: &str) -> std::result::Result<(), PasswordWeakness> {
    let has = |pred: fn(char) -> bool| password.chars().any(pred);

    if password.chars().count() < MIN_PASSWORD_LEN {
        Err(PasswordWeakness::TooShort)
    } else if !(has(char::is_uppercase) && has(char::is_lowercase)) {
        Err(PasswordWeakness::MissingMixedCase)
    } else if !(has(char::is_alphabetic) && has(|c| c.is_ascii_digit())) {
        Err(PasswordWeakness::MissingLettersAndNumbers)
    } else if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        Err(PasswordWeakness::MissingSpecialChar)
    } else {
        Ok(())
    }
}

/// Parse a `mm-dd-yyyy` date. Impossible dates such as `02-30-2024` are rejected.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| Error::InvalidDate(input.to_owned()))
}

/// Format a date the same way the user types it.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
