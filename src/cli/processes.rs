//! These are all the functional processes run by `vaxsched` commands. Each one runs a scheduler
//! workflow and turns its outcome into the text shown to the user.
use chrono::NaiveDate;

use crate::{
    backend::{scheduler, AccountKind, Appointment, Schedule, Session, Vault},
    error::Result,
    input_validation::format_date,
};

// ACCOUNTS

/// Create a new patient or caregiver account.
pub fn create_account(
    vault: &mut Vault,
    kind: AccountKind,
    username: &str,
    password: &str,
) -> Result<String> {
    scheduler::create_account(vault, kind, username, password)?;
    Ok(format!("Created user {username}"))
}

/// Log in.
pub fn login(
    vault: &Vault,
    session: &mut Session,
    kind: AccountKind,
    username: &str,
    password: &str,
) -> Result<String> {
    scheduler::login(vault, session, kind, username, password)?;
    Ok(format!("Logged in as: {username}"))
}

/// Log out.
pub fn logout(session: &mut Session) -> Result<String> {
    scheduler::logout(session)?;
    Ok(String::from("Successfully logged out!"))
}

// CAREGIVERS

/// Upload the logged-in caregiver's availability.
pub fn upload_availability(vault: &Vault, session: &Session, date: NaiveDate) -> Result<String> {
    scheduler::upload_availability(vault, session, date)?;
    Ok(String::from("Availability uploaded!"))
}

/// Add vaccine doses to the inventory.
pub fn add_doses(
    vault: &mut Vault,
    session: &Session,
    vaccine: &str,
    doses: i64,
) -> Result<String> {
    scheduler::add_doses(vault, session, vaccine, doses)?;
    Ok(String::from("Doses updated!"))
}

// APPOINTMENTS

/// Show who is available on a date and what is in stock.
pub fn search_caregiver_schedule(
    vault: &Vault,
    session: &Session,
    date: NaiveDate,
) -> Result<String> {
    let schedule = scheduler::search_caregiver_schedule(vault, session, date)?;
    Ok(schedule_text(&schedule))
}

/// Reserve an appointment for the logged-in patient.
pub fn reserve(
    vault: &mut Vault,
    session: &Session,
    date: NaiveDate,
    vaccine: &str,
) -> Result<String> {
    let appointment = scheduler::reserve(vault, session, date, vaccine)?;
    Ok(format!(
        "Appointment ID: {}, Caregiver username: {}",
        appointment.id(),
        appointment.caregiver()
    ))
}

/// List the logged-in user's appointments.
pub fn show_appointments(vault: &Vault, session: &Session) -> Result<String> {
    let appointments = scheduler::show_appointments(vault, session)?;
    if appointments.is_empty() {
        return Ok(String::from("No appointments scheduled."));
    }
    let show_patient = matches!(session, Session::Caregiver(_));
    let lines: Vec<String> = appointments
        .iter()
        .map(|appointment| appointment_line(appointment, show_patient))
        .collect();
    Ok(lines.join("\n"))
}

/// Cancel an appointment.
pub fn cancel(session: &Session, appointment_id: i64) -> Result<String> {
    scheduler::cancel(session, appointment_id)?;
    Ok(format!("Cancelled appointment {appointment_id}."))
}

// Caregivers see who the patient is; patients see who the caregiver is.
fn appointment_line(appointment: &Appointment, show_patient: bool) -> String {
    let other_party = if show_patient {
        appointment.patient()
    } else {
        appointment.caregiver()
    };
    format!(
        "{} {} {} {}",
        appointment.id(),
        appointment.vaccine(),
        format_date(appointment.date()),
        other_party
    )
}

fn schedule_text(schedule: &Schedule) -> String {
    let mut lines = vec![format!(
        "Caregivers available on {}:",
        format_date(schedule.date)
    )];
    if schedule.caregivers.is_empty() {
        lines.push(String::from("No caregivers available."));
    } else {
        lines.extend(schedule.caregivers.iter().cloned());
    }
    lines.push(String::from("Vaccine inventory:"));
    lines.extend(
        schedule
            .inventory
            .iter()
            .map(|vaccine| format!("{}: {} doses", vaccine.name(), vaccine.doses())),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::backend::Vaccine;

    fn march_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn schedule_formatting() {
        let schedule = Schedule {
            date: march_first(),
            caregivers: vec!["beth".into(), "carl".into()],
            inventory: vec![
                Vaccine::from_fields("moderna".into(), 15),
                Vaccine::from_fields("pfizer".into(), 0),
            ],
        };
        assert_eq!(
            schedule_text(&schedule),
            "Caregivers available on 03-01-2024:\nbeth\ncarl\nVaccine inventory:\nmoderna: 15 doses\npfizer: 0 doses"
        );

        let empty = Schedule {
            date: march_first(),
            caregivers: vec![],
            inventory: vec![],
        };
        assert_eq!(
            schedule_text(&empty),
            "Caregivers available on 03-01-2024:\nNo caregivers available.\nVaccine inventory:"
        );
    }

    #[test]
    fn appointment_formatting() {
        let appointment =
            Appointment::from_fields(4, "carl".into(), "pat".into(), march_first(), "moderna".into());
        assert_eq!(
            appointment_line(&appointment, false),
            "4 moderna 03-01-2024 carl"
        );
        assert_eq!(
            appointment_line(&appointment, true),
            "4 moderna 03-01-2024 pat"
        );
    }
}
