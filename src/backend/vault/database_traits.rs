//! These traits determine how different types are converted to and from rows of the `vaxsched`
//! database.
use base64ct::{Base64, Encoding};
use rusqlite::{types::Type, Row};

use super::super::{
    account::{Account, AccountKind},
    appointment::Appointment,
    hashing::hashed::{Hash, Hashed, Salt, HASH_LEN, SALT_LEN},
    vaccine::Vaccine,
};

/// All the tables stored in the [Database](super::database::Database). Used to determine
/// [Database](super::database::Database) function behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Patients,
    Caregivers,
    Vaccines,
    Appointments,
}
impl From<AccountKind> for Table {
    fn from(kind: AccountKind) -> Self {
        match kind {
            AccountKind::Patient => Table::Patients,
            AccountKind::Caregiver => Table::Caregivers,
        }
    }
}

/// This trait defines how the given struct gets converted into statement parameters for storage
/// in the database.
pub trait IntoDatabase {
    type Params: rusqlite::Params;

    /// This function determines how the struct gets converted into the database format.
    fn into_database(self) -> Self::Params;
}

impl IntoDatabase for Account {
    type Params = (String, String, String);
    fn into_database(self) -> Self::Params {
        (
            self.username().to_owned(),
            Base64::encode_string(self.password_hash().salt()),
            Base64::encode_string(self.password_hash().hash()),
        )
    }
}
impl IntoDatabase for Vaccine {
    type Params = (String, i64);
    fn into_database(self) -> Self::Params {
        (self.name().to_owned(), self.doses())
    }
}
impl IntoDatabase for Appointment {
    type Params = (i64, String, String, chrono::NaiveDate, String);
    fn into_database(self) -> Self::Params {
        (
            self.id(),
            self.caregiver().to_owned(),
            self.patient().to_owned(),
            self.date(),
            self.vaccine().to_owned(),
        )
    }
}

/// This trait defines how the given struct gets converted from a database row.
pub trait TryFromDatabase {
    /// Build the struct from a row selected from `table`.
    fn try_from_database(table: Table, row: &Row) -> rusqlite::Result<Self>
    where
        Self: Sized;
}

impl TryFromDatabase for Account {
    fn try_from_database(table: Table, row: &Row) -> rusqlite::Result<Self> {
        let kind = match table {
            Table::Patients => AccountKind::Patient,
            Table::Caregivers => AccountKind::Caregiver,
            other => {
                return Err(rusqlite::Error::FromSqlConversionFailure(
                    0,
                    Type::Text,
                    format!("{other:?} does not store accounts").into(),
                ))
            }
        };
        let username: String = row.get(0)?;
        let salt: Salt<SALT_LEN> = b64_to_fixed(row, 1)?;
        let hash: Hash<HASH_LEN> = b64_to_fixed(row, 2)?;
        Ok(Self::from_fields(kind, username, Hashed::from_fields(hash, salt)))
    }
}
impl TryFromDatabase for Vaccine {
    fn try_from_database(_: Table, row: &Row) -> rusqlite::Result<Self> {
        Ok(Self::from_fields(row.get(0)?, row.get(1)?))
    }
}
impl TryFromDatabase for Appointment {
    fn try_from_database(_: Table, row: &Row) -> rusqlite::Result<Self> {
        Ok(Self::from_fields(
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    }
}

// Helper function to read a base-64 column into a fixed-length byte array.
fn b64_to_fixed<const N: usize>(row: &Row, idx: usize) -> rusqlite::Result<[u8; N]> {
    let b64: String = row.get(idx)?;
    let conversion_err =
        |msg: String| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, msg.into());
    let bytes = Base64::decode_vec(&b64).map_err(|err| conversion_err(err.to_string()))?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| conversion_err(format!("expected {N} bytes, got {len}")))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rusqlite::Connection;

    use super::*;

    #[test]
    fn account_to_from() {
        let conn = Connection::open_in_memory().unwrap();
        let account = Account::new(AccountKind::Caregiver, "carl", "Abc123!@");
        let (username, salt, hash) = account.clone().into_database();

        let loaded = conn
            .query_row("SELECT ?1, ?2, ?3", (username, salt, hash), |row| {
                Account::try_from_database(Table::Caregivers, row)
            })
            .unwrap();
        assert_eq!(account, loaded);
        assert!(loaded.check_password("Abc123!@"));
    }

    #[test]
    fn bad_b64_is_conversion_failure() {
        let conn = Connection::open_in_memory().unwrap();
        let err = conn
            .query_row("SELECT 'carl', 'not base64!', 'AAAA'", (), |row| {
                Account::try_from_database(Table::Caregivers, row)
            })
            .unwrap_err();
        assert!(matches!(
            err,
            rusqlite::Error::FromSqlConversionFailure(1, Type::Text, _)
        ));
    }

    #[test]
    fn wrong_length_is_conversion_failure() {
        let conn = Connection::open_in_memory().unwrap();
        let err = conn
            .query_row("SELECT 'carl', 'AAAA', 'AAAA'", (), |row| {
                Account::try_from_database(Table::Patients, row)
            })
            .unwrap_err();
        assert!(matches!(
            err,
            rusqlite::Error::FromSqlConversionFailure(1, Type::Text, _)
        ));
    }
}
