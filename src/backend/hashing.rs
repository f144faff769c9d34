//! Salted password hashing.
pub mod hashed;
mod traits;
