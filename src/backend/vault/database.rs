use camino::{Utf8Path, Utf8PathBuf};
use rusqlite::{config::DbConfig, Connection, OpenFlags, OptionalExtension, TransactionBehavior};

use super::{database_traits::*, sql_schemas::*, sql_statements::*};

#[derive(Debug)]
pub struct Database {
    /// Path to .db file.
    path: Utf8PathBuf,
    /// SQLite database connection.
    connection: Connection,
}
impl Database {
    /// Open a connection to the database at the given path, creating the file and tables if they
    /// don't exist yet.
    pub fn connect<P>(path: P) -> rusqlite::Result<Self>
    where
        P: AsRef<Utf8Path>,
    {
        let connection = Connection::open_with_flags(
            path.as_ref(),
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        connection.set_db_config(DbConfig::SQLITE_DBCONFIG_ENABLE_FKEY, true)?;

        // Create tables iff they don't exist
        connection.execute(CREATE_PATIENTS, ())?;
        connection.execute(CREATE_CAREGIVERS, ())?;
        connection.execute(CREATE_AVAILABILITIES, ())?;
        connection.execute(CREATE_VACCINES, ())?;
        connection.execute(CREATE_APPOINTMENTS, ())?;

        Ok(Self {
            path: path.as_ref().to_path_buf(),
            connection,
        })
    }

    /// Run `f` inside a single write transaction. The transaction commits iff `f` returns [Ok];
    /// otherwise every statement `f` executed is rolled back.
    pub fn transaction<T, E, F>(&mut self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Connection) -> Result<T, E>,
        E: From<rusqlite::Error>,
    {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let output = f(&*tx)?;
        tx.commit()?;
        Ok(output)
    }

    /// Get the underlying connection for single-statement reads and writes.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Get the path at which this [Database] is located.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

/// Table-aware reads and writes shared by plain connections and transactions.
pub trait Queries {
    /// Retrieve a specific entry based on the given primary key.
    ///
    /// Return [Ok<None>] if no entry with that primary key exists in the database.
    fn select_entry<T>(&self, table: Table, primary_key: &str) -> rusqlite::Result<Option<T>>
    where
        T: TryFromDatabase;

    /// Retrieve every entry that `sql_statement` selects from `table`.
    fn select_entries<T, P>(
        &self,
        table: Table,
        sql_statement: &str,
        params: P,
    ) -> rusqlite::Result<Vec<T>>
    where
        T: TryFromDatabase,
        P: rusqlite::Params;

    /// Insert a specific entry into the matching table.
    ///
    /// Return [Err] if there is a conflict.
    fn insert_entry<T>(&self, table: Table, entry: T) -> rusqlite::Result<()>
    where
        T: IntoDatabase;
}
impl Queries for Connection {
    fn select_entry<T>(&self, table: Table, primary_key: &str) -> rusqlite::Result<Option<T>>
    where
        T: TryFromDatabase,
    {
        let sql_statement = match table {
            Table::Patients => SELECT_PATIENT,
            Table::Caregivers => SELECT_CAREGIVER,
            Table::Vaccines => SELECT_VACCINE,
            Table::Appointments => SELECT_APPOINTMENT,
        };
        self.query_row(sql_statement, [primary_key], |row| {
            T::try_from_database(table, row)
        })
        .optional()
    }

    fn select_entries<T, P>(
        &self,
        table: Table,
        sql_statement: &str,
        params: P,
    ) -> rusqlite::Result<Vec<T>>
    where
        T: TryFromDatabase,
        P: rusqlite::Params,
    {
        let mut statement = self.prepare(sql_statement)?;
        let rows = statement.query_map(params, |row| T::try_from_database(table, row))?;
        rows.collect()
    }

    fn insert_entry<T>(&self, table: Table, entry: T) -> rusqlite::Result<()>
    where
        T: IntoDatabase,
    {
        let sql_statement = match table {
            Table::Patients => INSERT_PATIENT,
            Table::Caregivers => INSERT_CAREGIVER,
            Table::Vaccines => INSERT_VACCINE,
            Table::Appointments => INSERT_APPOINTMENT,
        };
        self.execute(sql_statement, entry.into_database())?;
        Ok(())
    }
}
