//! All saving and loading of `vaxsched` data is handled through here.
use camino::Utf8Path;
use chrono::NaiveDate;
use rusqlite::OptionalExtension;
use tracing::{debug, info};

mod database;
mod database_traits;
mod sql_schemas;
mod sql_statements;

use super::{
    account::{Account, AccountKind},
    appointment::Appointment,
    vaccine::Vaccine,
};
use crate::error::{Error, Result};
use database::{Database, Queries};
use database_traits::Table;
use sql_statements::*;

/// The [Vault] is responsible for all reads and writes of scheduler data. Every operation that
/// touches more than one row runs in a single transaction, so a failed operation never leaves a
/// half-applied change behind.
#[derive(Debug)]
pub struct Vault {
    database: Database,
}
impl Vault {
    /// Connect to the [Vault] stored at `database_path`, creating it if needed.
    pub fn connect<P>(database_path: P) -> Result<Self>
    where
        P: AsRef<Utf8Path>,
    {
        let database = Database::connect(database_path.as_ref())?;
        debug!(path = %database.path(), "connected to vault");
        Ok(Self { database })
    }

    /// Get the path of the database file backing this [Vault].
    pub fn path(&self) -> &Utf8Path {
        self.database.path()
    }

    /// Load the account with the given username and kind.
    ///
    /// Return [Ok<None>] if no such account exists.
    pub fn load_account(&self, kind: AccountKind, username: &str) -> Result<Option<Account>> {
        Ok(self
            .database
            .connection()
            .select_entry(kind.into(), username)?)
    }

    /// Add a new [Account]. Return [Error::UsernameTaken] if an account of the same kind already
    /// uses that username.
    pub fn create_account(&mut self, account: Account) -> Result<()> {
        let kind = account.kind();
        let username = account.username().to_owned();
        self.database.transaction(|tx| {
            if tx
                .select_entry::<Account>(kind.into(), &username)?
                .is_some()
            {
                return Err(Error::UsernameTaken(username.clone()));
            }
            tx.insert_entry(kind.into(), account)?;
            Ok(())
        })?;
        info!(%kind, %username, "created account");
        Ok(())
    }

    /// Record that `caregiver` is available on `date`. Duplicate entries are allowed.
    pub fn add_availability(&self, caregiver: &str, date: NaiveDate) -> Result<()> {
        self.database
            .connection()
            .execute(INSERT_AVAILABILITY, (caregiver, date))?;
        info!(%caregiver, %date, "uploaded availability");
        Ok(())
    }

    /// List the usernames of every caregiver available on `date`, in ascending order.
    pub fn available_caregivers(&self, date: NaiveDate) -> Result<Vec<String>> {
        let connection = self.database.connection();
        let mut statement = connection.prepare(SELECT_AVAILABLE_CAREGIVERS)?;
        let usernames = statement
            .query_map([date], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(usernames)
    }

    /// Load a single [Vaccine] by name.
    pub fn load_vaccine(&self, name: &str) -> Result<Option<Vaccine>> {
        Ok(self
            .database
            .connection()
            .select_entry(Table::Vaccines, name)?)
    }

    /// Load the whole vaccine inventory, ordered by name.
    pub fn inventory(&self) -> Result<Vec<Vaccine>> {
        Ok(self
            .database
            .connection()
            .select_entries(Table::Vaccines, SELECT_ALL_VACCINES, ())?)
    }

    /// Add `doses` to the named vaccine, creating it if it isn't stocked yet. Return the updated
    /// [Vaccine].
    pub fn add_doses(&mut self, name: &str, doses: i64) -> Result<Vaccine> {
        let vaccine = self.database.transaction(|tx| {
            match tx.select_entry::<Vaccine>(Table::Vaccines, name)? {
                Some(existing) => {
                    let total = existing
                        .doses()
                        .checked_add(doses)
                        .ok_or_else(|| Error::DoseCountOutOfRange(name.to_owned()))?;
                    tx.execute(UPDATE_VACCINE_SET_DOSES, (name, total))?;
                    Ok::<_, Error>(Vaccine::from_fields(name.to_owned(), total))
                }
                None => {
                    let vaccine = Vaccine::from_fields(name.to_owned(), doses);
                    tx.insert_entry(Table::Vaccines, vaccine.clone())?;
                    Ok(vaccine)
                }
            }
        })?;
        info!(vaccine = %name, added = doses, total = vaccine.doses(), "updated doses");
        Ok(vaccine)
    }

    /// Reserve an appointment for `patient` on `date` with one dose of `vaccine_name`.
    ///
    /// The caregiver with the lexicographically smallest username among those available on
    /// `date` is assigned. The appointment id is one more than the largest existing id. The
    /// appointment insert and the dose decrement commit together or not at all.
    pub fn reserve(
        &mut self,
        patient: &str,
        date: NaiveDate,
        vaccine_name: &str,
    ) -> Result<Appointment> {
        let appointment = self.database.transaction(|tx| {
            let caregiver: String = tx
                .query_row(SELECT_FIRST_AVAILABLE_CAREGIVER, [date], |row| {
                    row.get::<_, String>(0)
                })
                .optional()?
                .ok_or(Error::NoCaregiverAvailable)?;

            let vaccine: Vaccine = tx
                .select_entry(Table::Vaccines, vaccine_name)?
                .ok_or_else(|| Error::VaccineNotCarried(vaccine_name.to_owned()))?;
            if !vaccine.in_stock() {
                return Err(Error::NotEnoughDoses(vaccine_name.to_owned()));
            }

            let id: i64 = tx.query_row(SELECT_NEXT_APPOINTMENT_ID, (), |row| row.get(0))?;
            let appointment = Appointment::from_fields(
                id,
                caregiver,
                patient.to_owned(),
                date,
                vaccine_name.to_owned(),
            );
            tx.insert_entry(Table::Appointments, appointment.clone())?;

            // Conditional decrement; zero rows means the stock ran out underneath us.
            if tx.execute(UPDATE_VACCINE_TAKE_DOSE, [vaccine_name])? == 0 {
                return Err(Error::NotEnoughDoses(vaccine_name.to_owned()));
            }
            Ok(appointment)
        })?;
        info!(
            id = appointment.id(),
            patient = appointment.patient(),
            caregiver = appointment.caregiver(),
            "reserved appointment"
        );
        Ok(appointment)
    }

    /// List every appointment involving `username` in the role given by `kind`, ordered by id.
    pub fn appointments(&self, kind: AccountKind, username: &str) -> Result<Vec<Appointment>> {
        let sql_statement = match kind {
            AccountKind::Patient => SELECT_PATIENT_APPOINTMENTS,
            AccountKind::Caregiver => SELECT_CAREGIVER_APPOINTMENTS,
        };
        Ok(self.database.connection().select_entries(
            Table::Appointments,
            sql_statement,
            [username],
        )?)
    }
}
