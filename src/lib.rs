//! Modules utilised by `vaxsched`, a command-line vaccine appointment scheduler.
//!
//! Patients and caregivers register and log in, caregivers publish availability and stock
//! vaccine doses, and patients reserve appointments against both.
#![warn(missing_docs)]

/// Backend code for `vaxsched`: accounts, the SQLite vault and the scheduler workflows.
pub mod backend;
/// The interactive command line.
pub mod cli;
/// User configuration.
pub mod config;
/// `vaxsched`-specific errors.
pub mod error;
/// Check user input before it reaches the backend.
pub mod input_validation;
/// Log file setup.
pub mod logging;
/// Small, general helper functions.
pub mod utils;
