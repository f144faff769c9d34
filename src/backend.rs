//! All backend functionality.
mod account;
mod appointment;
mod hashing;
pub mod scheduler;
mod session;
mod vaccine;
mod vault;

// Re-imports.
pub use account::{Account, AccountKind};
pub use appointment::{Appointment, Schedule};
pub use hashing::hashed::{Hash, Hashed, PasswordHash, Salt};
pub use session::Session;
pub use vaccine::Vaccine;
pub use vault::Vault;
