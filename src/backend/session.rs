//! Who is currently logged in.
use super::account::AccountKind;
use crate::error::{Error, Result};

/// The authenticated identity of the command loop. At most one user is logged in at a time, so
/// patient and caregiver sessions are mutually exclusive by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// Nobody is logged in.
    #[default]
    Anonymous,
    /// A patient is logged in.
    Patient(String),
    /// A caregiver is logged in.
    Caregiver(String),
}
impl Session {
    /// Start a session for the given account.
    pub fn logged_in(kind: AccountKind, username: &str) -> Self {
        match kind {
            AccountKind::Patient => Session::Patient(username.to_owned()),
            AccountKind::Caregiver => Session::Caregiver(username.to_owned()),
        }
    }

    /// Return the logged-in username and their account kind, if anyone is logged in.
    pub fn identity(&self) -> Option<(AccountKind, &str)> {
        match self {
            Session::Anonymous => None,
            Session::Patient(username) => Some((AccountKind::Patient, username)),
            Session::Caregiver(username) => Some((AccountKind::Caregiver, username)),
        }
    }

    /// Return [Err] unless somebody is logged in.
    pub fn require_any(&self) -> Result<(AccountKind, &str)> {
        self.identity().ok_or(Error::NotLoggedIn)
    }

    /// Return the logged-in caregiver's username.
    pub fn require_caregiver(&self) -> Result<&str> {
        match self {
            Session::Caregiver(username) => Ok(username),
            _ => Err(Error::CaregiverRequired),
        }
    }

    /// Return the logged-in patient's username. Anonymous users are told to log in at all;
    /// caregivers are told to log in as a patient.
    pub fn require_patient(&self) -> Result<&str> {
        match self {
            Session::Patient(username) => Ok(username),
            Session::Caregiver(_) => Err(Error::PatientRequired),
            Session::Anonymous => Err(Error::NotLoggedIn),
        }
    }

    /// Whether anybody is logged in.
    pub fn is_active(&self) -> bool {
        !matches!(self, Session::Anonymous)
    }
}
