mod common;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use vaxsched::backend::{AccountKind, Vaccine};

use common::{responses, run_script, test_vault};

#[test]
fn banner_and_goodbye() {
    let (_dir, mut vault) = test_vault();
    let output = run_script(&mut vault, "quit\nlogout\n");
    assert!(output.contains("Welcome to the COVID-19 Vaccine Reservation Scheduling Application!"));
    assert!(output.contains("> show_appointments"));
    // Nothing after quit is read.
    assert_eq!(
        responses(&output),
        vec!["Thank you for using the scheduler, Goodbye!"]
    );
}

#[test]
fn end_of_input_stops_the_loop() {
    let (_dir, mut vault) = test_vault();
    let output = run_script(&mut vault, "\n   \nlogout");
    assert_eq!(responses(&output), vec!["Please login first!"]);
}

#[test]
fn invalid_commands() {
    let (_dir, mut vault) = test_vault();
    let output = run_script(
        &mut vault,
        "dance\ncreate_patient pat\nlogin_caregiver carl\nreserve 03-01-2024\nquit\n",
    );
    assert_eq!(
        responses(&output),
        vec![
            "Invalid Argument",
            "Failed to create user.",
            "Login failed.",
            "Please login first!",
            "Thank you for using the scheduler, Goodbye!",
        ]
    );
}

#[test]
fn session_checks_come_before_argument_checks() {
    let (_dir, mut vault) = test_vault();
    let output = run_script(
        &mut vault,
        "upload_availability
reserve 13-45-2024 moderna
show_appointments now
logout now
create_caregiver carl Abc123!@
login_caregiver carl Abc123!@
login_caregiver carl
reserve 03-01-2024
upload_availability 13-45-2024
add_doses moderna
logout now
quit
",
    );
    assert_eq!(
        responses(&output),
        vec![
            "Please login as a caregiver first!",
            "Please login first!",
            "Please login first!",
            "Please try again!",
            "Created user carl",
            "Logged in as: carl",
            "User already logged in.",
            "Please login as a patient!",
            "Please enter a valid date!",
            "Please try again!",
            "Please try again!",
            "Thank you for using the scheduler, Goodbye!",
        ]
    );
}

#[test]
fn registration() {
    let (_dir, mut vault) = test_vault();
    let output = run_script(
        &mut vault,
        "create_patient Pat Abc123!@
create_patient pat Xyz789#?
create_caregiver pat Abc123!@
create_caregiver weak abc
create_caregiver weak abcdefgh
create_caregiver weak ABCdefgh
create_caregiver weak ABCdef12
quit
",
    );
    assert_eq!(
        responses(&output),
        vec![
            "Created user pat",
            "Username taken, try again!",
            "Created user pat",
            "Password must be at least 8 characters",
            "Password must be a mixture of both uppercase and lowercase letters.",
            "Password must be a mixture of letters and numbers.",
            "Password must contain at least one special character from !, @, #, ?.",
            "Thank you for using the scheduler, Goodbye!",
        ]
    );
    assert!(vault
        .load_account(AccountKind::Caregiver, "weak")
        .unwrap()
        .is_none());
}

#[test]
fn login_and_logout() {
    let (_dir, mut vault) = test_vault();
    let output = run_script(
        &mut vault,
        "create_patient pat Abc123!@
login_patient pat abc123!@
login_patient nobody Abc123!@
login_caregiver pat Abc123!@
login_patient PAT Abc123!@
login_patient pat Abc123!@
logout
logout
quit
",
    );
    assert_eq!(
        responses(&output),
        vec![
            "Created user pat",
            "Login failed.",
            "Login failed.",
            "Login failed.",
            "Logged in as: pat",
            "User already logged in.",
            "Successfully logged out!",
            "Please login first!",
            "Thank you for using the scheduler, Goodbye!",
        ]
    );
}

#[test]
fn caregiver_only_operations() {
    let (_dir, mut vault) = test_vault();
    let output = run_script(
        &mut vault,
        "upload_availability 03-01-2024
create_patient pat Abc123!@
login_patient pat Abc123!@
upload_availability 03-01-2024
add_doses moderna 5
upload_availability 02-30-2024
quit
",
    );
    assert_eq!(
        responses(&output),
        vec![
            "Please login as a caregiver first!",
            "Created user pat",
            "Logged in as: pat",
            "Please login as a caregiver first!",
            "Please login as a caregiver first!",
            "Please login as a caregiver first!",
            "Thank you for using the scheduler, Goodbye!",
        ]
    );
    assert!(vault.inventory().unwrap().is_empty());
}

#[test]
fn search_schedule() {
    let (_dir, mut vault) = test_vault();
    let output = run_script(
        &mut vault,
        "search_caregiver_schedule 03-01-2024
create_caregiver carl Abc123!@
create_caregiver beth Abc123!@
login_caregiver carl Abc123!@
upload_availability 03-01-2024
upload_availability 03-01-2024
add_doses Moderna 10
add_doses moderna 5
logout
login_caregiver beth Abc123!@
upload_availability 03-01-2024
search_caregiver_schedule 03-01-2024
search_caregiver_schedule 03-02-2024
quit
",
    );
    assert_eq!(
        responses(&output),
        vec![
            "Please login first!",
            "Created user carl",
            "Created user beth",
            "Logged in as: carl",
            "Availability uploaded!",
            "Availability uploaded!",
            "Doses updated!",
            "Doses updated!",
            "Successfully logged out!",
            "Logged in as: beth",
            "Availability uploaded!",
            "Caregivers available on 03-01-2024:",
            "beth",
            "carl",
            "Vaccine inventory:",
            "moderna: 15 doses",
            "Caregivers available on 03-02-2024:",
            "No caregivers available.",
            "Vaccine inventory:",
            "moderna: 15 doses",
            "Thank you for using the scheduler, Goodbye!",
        ]
    );
}

#[test]
fn reservation_flow() {
    let (_dir, mut vault) = test_vault();
    let output = run_script(
        &mut vault,
        "create_caregiver carl Abc123!@
create_caregiver beth Abc123!@
create_patient pat Abc123!@
create_patient paula Abc123!@
login_caregiver carl Abc123!@
upload_availability 03-01-2024
add_doses moderna 1
logout
login_caregiver beth Abc123!@
upload_availability 03-01-2024
logout
login_patient pat Abc123!@
reserve 03-01-2024 pfizer
reserve 03-01-2024 Moderna
show_appointments
logout
login_patient paula Abc123!@
reserve 03-01-2024 moderna
show_appointments
logout
login_caregiver beth Abc123!@
show_appointments
logout
login_caregiver carl Abc123!@
show_appointments
quit
",
    );
    assert_eq!(
        responses(&output),
        vec![
            "Created user carl",
            "Created user beth",
            "Created user pat",
            "Created user paula",
            "Logged in as: carl",
            "Availability uploaded!",
            "Doses updated!",
            "Successfully logged out!",
            "Logged in as: beth",
            "Availability uploaded!",
            "Successfully logged out!",
            "Logged in as: pat",
            "This facility does not carry that brand of vaccines. Please try again!",
            "Appointment ID: 1, Caregiver username: beth",
            "1 moderna 03-01-2024 beth",
            "Successfully logged out!",
            "Logged in as: paula",
            "Not enough available doses!",
            "No appointments scheduled.",
            "Successfully logged out!",
            "Logged in as: beth",
            "1 moderna 03-01-2024 pat",
            "Successfully logged out!",
            "Logged in as: carl",
            "No appointments scheduled.",
            "Thank you for using the scheduler, Goodbye!",
        ]
    );
    assert_eq!(
        vault.load_vaccine("moderna").unwrap(),
        Some(Vaccine::from_fields("moderna".into(), 0))
    );
}

#[test]
fn reservation_without_caregiver_changes_nothing() {
    let (_dir, mut vault) = test_vault();
    let output = run_script(
        &mut vault,
        "create_caregiver carl Abc123!@
login_caregiver carl Abc123!@
add_doses moderna 3
logout
create_patient pat Abc123!@
login_patient pat Abc123!@
reserve 03-01-2024 moderna
reserve 03-01-2024 janssen
search_caregiver_schedule 03-01-2024
quit
",
    );
    let responses = responses(&output);
    assert_eq!(responses[6], "No Caregiver is available!");
    // No caregiver wins over an unknown vaccine.
    assert_eq!(responses[7], "No Caregiver is available!");
    assert!(responses.contains(&"moderna: 3 doses".to_owned()));
    assert!(vault
        .appointments(AccountKind::Patient, "pat")
        .unwrap()
        .is_empty());
}

#[test]
fn state_survives_reconnecting() {
    let (dir, mut vault) = test_vault();
    run_script(
        &mut vault,
        "create_caregiver carl Abc123!@
login_caregiver carl Abc123!@
upload_availability 03-01-2024
add_doses moderna 2
quit
",
    );
    let path = vault.path().to_owned();
    drop(vault);

    let mut vault = vaxsched::backend::Vault::connect(&path).unwrap();
    let output = run_script(
        &mut vault,
        "create_patient pat Abc123!@
login_patient pat Abc123!@
reserve 03-01-2024 moderna
reserve 03-01-2024 moderna
quit
",
    );
    assert_eq!(
        responses(&output)[2..4],
        [
            "Appointment ID: 1, Caregiver username: carl",
            "Appointment ID: 2, Caregiver username: carl",
        ]
    );
    let appointments = vault.appointments(AccountKind::Caregiver, "carl").unwrap();
    assert_eq!(appointments.len(), 2);
    assert_eq!(
        appointments[1].date(),
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    );
    drop(dir);
}

#[test]
fn cancel_is_not_supported() {
    let (_dir, mut vault) = test_vault();
    let output = run_script(
        &mut vault,
        "cancel 1
create_patient pat Abc123!@
login_patient pat Abc123!@
cancel 1
cancel one
quit
",
    );
    assert_eq!(
        responses(&output),
        vec![
            "Please login first!",
            "Created user pat",
            "Logged in as: pat",
            "Cancelling appointments is not supported.",
            "Please try again!",
            "Thank you for using the scheduler, Goodbye!",
        ]
    );
}

#[test]
fn dose_counts_stay_in_range() {
    let (_dir, mut vault) = test_vault();
    let output = run_script(
        &mut vault,
        "create_caregiver carl Abc123!@
login_caregiver carl Abc123!@
add_doses moderna 9223372036854775807
add_doses moderna 1
add_doses pfizer 5
add_doses pfizer -7
search_caregiver_schedule 03-01-2024
quit
",
    );
    assert_eq!(
        responses(&output)[2..],
        [
            "Doses updated!",
            "Too many doses of moderna, please try again!",
            "Doses updated!",
            "Doses updated!",
            "Caregivers available on 03-01-2024:",
            "No caregivers available.",
            "Vaccine inventory:",
            "moderna: 9223372036854775807 doses",
            "pfizer: -2 doses",
            "Thank you for using the scheduler, Goodbye!",
        ]
    );
}
