//! All the different errors that `vaxsched` workflows can experience, meant to be displayed to the
//! user as a single status line.
use core::fmt;

use crate::input_validation::PasswordWeakness;

/// Shorthand for results returned by `vaxsched` workflows.
pub type Result<T> = std::result::Result<T, Error>;

/// A list of all the handled `vaxsched` errors.
#[derive(Debug)]
pub enum Error {
    /// Tried to register a username that already exists for that account kind.
    UsernameTaken(String),
    /// Password did not satisfy the strength policy.
    WeakPassword(PasswordWeakness),
    /// Someone is already logged in.
    AlreadyLoggedIn,
    /// Username or password did not match. Deliberately doesn't say which.
    LoginFailed,
    /// Operation requires a session, but nobody is logged in.
    NotLoggedIn,
    /// Operation requires a caregiver session.
    CaregiverRequired,
    /// Operation requires a patient session.
    PatientRequired,
    /// Date argument was not a real `mm-dd-yyyy` date.
    InvalidDate(String),
    /// Nobody uploaded availability for the requested date.
    NoCaregiverAvailable,
    /// The requested vaccine is not in the inventory.
    VaccineNotCarried(String),
    /// The requested vaccine has no doses left.
    NotEnoughDoses(String),
    /// Adding doses would push the stored count outside what the inventory can hold.
    DoseCountOutOfRange(String),
    /// Tried to use functionality that doesn't exist.
    Unsupported(&'static str),
    /// Anything that went wrong in the database itself.
    Database(rusqlite::Error),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UsernameTaken(_) => write!(f, "Username taken, try again!"),
            Error::WeakPassword(weakness) => write!(f, "{weakness}"),
            Error::AlreadyLoggedIn => write!(f, "User already logged in."),
            Error::LoginFailed => write!(f, "Login failed."),
            Error::NotLoggedIn => write!(f, "Please login first!"),
            Error::CaregiverRequired => write!(f, "Please login as a caregiver first!"),
            Error::PatientRequired => write!(f, "Please login as a patient!"),
            Error::InvalidDate(_) => write!(f, "Please enter a valid date!"),
            Error::NoCaregiverAvailable => write!(f, "No Caregiver is available!"),
            Error::VaccineNotCarried(_) => write!(
                f,
                "This facility does not carry that brand of vaccines. Please try again!"
            ),
            Error::NotEnoughDoses(_) => write!(f, "Not enough available doses!"),
            Error::DoseCountOutOfRange(vaccine) => {
                write!(f, "Too many doses of {vaccine}, please try again!")
            }
            Error::Unsupported(what) => write!(f, "{what} is not supported."),
            Error::Database(err) => write!(f, "Db-Error: {err}"),
        }
    }
}
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Database(err) => Some(err),
            _ => None,
        }
    }
}
impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err)
    }
}
impl From<PasswordWeakness> for Error {
    fn from(weakness: PasswordWeakness) -> Self {
        Error::WeakPassword(weakness)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn business_messages() {
        assert_eq!(
            Error::UsernameTaken("carl".into()).to_string(),
            "Username taken, try again!"
        );
        assert_eq!(Error::LoginFailed.to_string(), "Login failed.");
        assert_eq!(
            Error::NotEnoughDoses("moderna".into()).to_string(),
            "Not enough available doses!"
        );
        assert_eq!(
            Error::DoseCountOutOfRange("moderna".into()).to_string(),
            "Too many doses of moderna, please try again!"
        );
        assert_eq!(
            Error::Unsupported("Cancelling appointments").to_string(),
            "Cancelling appointments is not supported."
        );
    }

    #[test]
    fn database_errors_keep_source() {
        let err: Error = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(err.to_string().starts_with("Db-Error: "));
        assert!(std::error::Error::source(&err).is_some());
    }
}
