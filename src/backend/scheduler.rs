//! The scheduler workflows. Each one takes the [Vault] and the current [Session] explicitly, checks
//! who is allowed to run it, and then reads or writes the vault.
use chrono::NaiveDate;
use tracing::{debug, warn};

use super::{
    account::{Account, AccountKind},
    appointment::{Appointment, Schedule},
    session::Session,
    vaccine::Vaccine,
    vault::Vault,
};
use crate::{
    error::{Error, Result},
    input_validation::validate_password,
};

/// Register a new account of the given kind.
///
/// The username check comes before the password check, so a taken username is reported even when
/// the password is also weak.
pub fn create_account(
    vault: &mut Vault,
    kind: AccountKind,
    username: &str,
    password: &str,
) -> Result<()> {
    if vault.load_account(kind, username)?.is_some() {
        return Err(Error::UsernameTaken(username.to_owned()));
    }
    validate_password(password)?;
    vault.create_account(Account::new(kind, username, password))
}

/// Log in as the given account. Unknown usernames and wrong passwords fail the same way.
pub fn login(
    vault: &Vault,
    session: &mut Session,
    kind: AccountKind,
    username: &str,
    password: &str,
) -> Result<()> {
    if session.is_active() {
        return Err(Error::AlreadyLoggedIn);
    }
    match vault.load_account(kind, username)? {
        Some(account) if account.check_password(password) => {
            *session = Session::logged_in(kind, account.username());
            debug!(%kind, %username, "logged in");
            Ok(())
        }
        _ => {
            warn!(%kind, %username, "failed login attempt");
            Err(Error::LoginFailed)
        }
    }
}

/// Log out of the current session.
pub fn logout(session: &mut Session) -> Result<()> {
    session.require_any()?;
    *session = Session::Anonymous;
    Ok(())
}

/// Publish the logged-in caregiver's availability for `date`.
pub fn upload_availability(vault: &Vault, session: &Session, date: NaiveDate) -> Result<()> {
    let caregiver = session.require_caregiver()?;
    vault.add_availability(caregiver, date)
}

/// Add doses of a vaccine to the inventory as the logged-in caregiver.
pub fn add_doses(
    vault: &mut Vault,
    session: &Session,
    vaccine: &str,
    doses: i64,
) -> Result<Vaccine> {
    session.require_caregiver()?;
    vault.add_doses(vaccine, doses)
}

/// Find who is available on `date`, together with the current inventory.
pub fn search_caregiver_schedule(
    vault: &Vault,
    session: &Session,
    date: NaiveDate,
) -> Result<Schedule> {
    session.require_any()?;
    Ok(Schedule {
        date,
        caregivers: vault.available_caregivers(date)?,
        inventory: vault.inventory()?,
    })
}

/// Reserve one dose of `vaccine` on `date` for the logged-in patient.
pub fn reserve(
    vault: &mut Vault,
    session: &Session,
    date: NaiveDate,
    vaccine: &str,
) -> Result<Appointment> {
    let patient = session.require_patient()?;
    vault.reserve(patient, date, vaccine)
}

/// List the logged-in user's appointments, whichever role they are logged in as.
pub fn show_appointments(vault: &Vault, session: &Session) -> Result<Vec<Appointment>> {
    let (kind, username) = session.require_any()?;
    vault.appointments(kind, username)
}

/// Cancel an appointment. Not supported: appointments are never removed once reserved.
pub fn cancel(session: &Session, _appointment_id: i64) -> Result<()> {
    session.require_any()?;
    Err(Error::Unsupported("Cancelling appointments"))
}
