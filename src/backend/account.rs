//! Functionality for patient and caregiver accounts.
use core::fmt;

use super::hashing::hashed::{IntoHashed, PasswordHash};

/// The two kinds of account. They share no identity space: the same username may exist once as a
/// patient and once as a caregiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountKind {
    /// Someone who reserves appointments.
    Patient,
    /// Someone who offers availability and administers vaccines.
    Caregiver,
}
impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AccountKind::Patient => write!(f, "patient"),
            AccountKind::Caregiver => write!(f, "caregiver"),
        }
    }
}

/// A `vaxsched` account with a username and a salted password hash.
///
/// The plaintext password is never stored. Logging in re-hashes the entered password with the
/// stored salt and compares the result against `password_hash`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    kind: AccountKind,
    username: String,
    password_hash: PasswordHash,
}
impl Account {
    /// Create a new [Account], hashing `password` with a fresh random salt.
    pub fn new(kind: AccountKind, username: &str, password: &str) -> Self {
        Self {
            kind,
            username: username.to_owned(),
            password_hash: password.into_hashed_rand_salt(),
        }
    }

    /// Create an [Account] from its fields.
    pub fn from_fields(kind: AccountKind, username: String, password_hash: PasswordHash) -> Self {
        Self {
            kind,
            username,
            password_hash,
        }
    }

    /// Check whether `password` is the password this [Account] was created with.
    pub fn check_password(&self, password: &str) -> bool {
        password.check_match(&self.password_hash)
    }

    /// Get the `kind` of this [Account].
    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Get the `username` of this [Account].
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the `password_hash` of this [Account].
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}
