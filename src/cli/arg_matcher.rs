//! Route commands to different functions.
use super::{command::Command, processes::*};
use crate::{
    backend::{Session, Vault},
    error::Result,
};

/// This statement matches a parsed [Command] with its proper functionality in `processes`.
///
/// [Command::Quit] is handled by the caller; matching it here is a no-op.
pub fn match_command(vault: &mut Vault, session: &mut Session, command: Command) -> Result<String> {
    match command {
        Command::CreateAccount {
            kind,
            username,
            password,
        } => create_account(vault, kind, &username, &password),
        Command::Login {
            kind,
            username,
            password,
        } => login(vault, session, kind, &username, &password),
        Command::SearchCaregiverSchedule { date } => search_caregiver_schedule(vault, session, date),
        Command::Reserve { date, vaccine } => reserve(vault, session, date, &vaccine),
        Command::UploadAvailability { date } => upload_availability(vault, session, date),
        Command::Cancel { appointment_id } => cancel(session, appointment_id),
        Command::AddDoses { vaccine, doses } => add_doses(vault, session, &vaccine, doses),
        Command::ShowAppointments => show_appointments(vault, session),
        Command::Logout => logout(session),
        Command::Quit => Ok(String::new()),
    }
}
