//! Tokenize one line of user input into a [Command].
use core::fmt;

use chrono::NaiveDate;

use crate::{
    backend::{AccountKind, Session},
    error::{self, Error},
    input_validation::parse_date,
};

/// Every command the scheduler understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `create_patient <username> <password>` / `create_caregiver <username> <password>`
    CreateAccount {
        kind: AccountKind,
        username: String,
        password: String,
    },
    /// `login_patient <username> <password>` / `login_caregiver <username> <password>`
    Login {
        kind: AccountKind,
        username: String,
        password: String,
    },
    /// `search_caregiver_schedule <date>`
    SearchCaregiverSchedule { date: NaiveDate },
    /// `reserve <date> <vaccine>`
    Reserve { date: NaiveDate, vaccine: String },
    /// `upload_availability <date>`
    UploadAvailability { date: NaiveDate },
    /// `cancel <appointment_id>`
    Cancel { appointment_id: i64 },
    /// `add_doses <vaccine> <number>`
    AddDoses { vaccine: String, doses: i64 },
    /// `show_appointments`
    ShowAppointments,
    /// `logout`
    Logout,
    /// `quit`
    Quit,
}

/// Why a line could not be turned into a [Command].
#[derive(Debug)]
pub enum ParseError {
    /// The line held nothing but whitespace.
    Empty,
    /// The first token isn't a known operation.
    UnknownOperation(String),
    /// The operation got the wrong number or shape of arguments. Holds the message to show.
    Usage(&'static str),
    /// The current session may not run the operation at all. Reported before any argument is
    /// looked at.
    Refused(Error),
    /// An argument was well-formed but invalid, e.g. an impossible date.
    Invalid(Error),
}
impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::Empty => Ok(()),
            ParseError::UnknownOperation(_) => write!(f, "Invalid Argument"),
            ParseError::Usage(message) => write!(f, "{message}"),
            ParseError::Refused(err) | ParseError::Invalid(err) => write!(f, "{err}"),
        }
    }
}
impl std::error::Error for ParseError {}

/// The operation named by the first token of a line, before its arguments are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreatePatient,
    CreateCaregiver,
    LoginPatient,
    LoginCaregiver,
    SearchCaregiverSchedule,
    Reserve,
    UploadAvailability,
    Cancel,
    AddDoses,
    ShowAppointments,
    Logout,
    Quit,
}
impl Operation {
    /// Look up an operation by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let operation = match name.to_lowercase().as_str() {
            "create_patient" => Operation::CreatePatient,
            "create_caregiver" => Operation::CreateCaregiver,
            "login_patient" => Operation::LoginPatient,
            "login_caregiver" => Operation::LoginCaregiver,
            "search_caregiver_schedule" => Operation::SearchCaregiverSchedule,
            "reserve" => Operation::Reserve,
            "upload_availability" => Operation::UploadAvailability,
            "cancel" => Operation::Cancel,
            "add_doses" => Operation::AddDoses,
            "show_appointments" => Operation::ShowAppointments,
            "logout" => Operation::Logout,
            "quit" => Operation::Quit,
            _ => return None,
        };
        Some(operation)
    }

    /// The operation name, safe to log.
    pub fn name(self) -> &'static str {
        match self {
            Operation::CreatePatient => "create_patient",
            Operation::CreateCaregiver => "create_caregiver",
            Operation::LoginPatient => "login_patient",
            Operation::LoginCaregiver => "login_caregiver",
            Operation::SearchCaregiverSchedule => "search_caregiver_schedule",
            Operation::Reserve => "reserve",
            Operation::UploadAvailability => "upload_availability",
            Operation::Cancel => "cancel",
            Operation::AddDoses => "add_doses",
            Operation::ShowAppointments => "show_appointments",
            Operation::Logout => "logout",
            Operation::Quit => "quit",
        }
    }

    /// Check that `session` may run this operation at all.
    ///
    /// Registration, `logout` and `quit` accept any session here; `logout` checks its arguments
    /// before the session.
    pub fn check_session(self, session: &Session) -> error::Result<()> {
        match self {
            Operation::LoginPatient | Operation::LoginCaregiver if session.is_active() => {
                Err(Error::AlreadyLoggedIn)
            }
            Operation::UploadAvailability | Operation::AddDoses => {
                session.require_caregiver().map(|_| ())
            }
            Operation::Reserve => session.require_patient().map(|_| ()),
            Operation::SearchCaregiverSchedule
            | Operation::ShowAppointments
            | Operation::Cancel => session.require_any().map(|_| ()),
            _ => Ok(()),
        }
    }
}

const CREATE_USAGE: &str = "Failed to create user.";
const LOGIN_USAGE: &str = "Login failed.";
const RETRY_USAGE: &str = "Please try again!";

impl Command {
    /// Parse a line such as `reserve 03-01-2024 Moderna`, as typed during `session`.
    ///
    /// The session is checked before the arguments, so a user who may not run an operation is
    /// told so whatever they typed after it. The operation name, usernames and vaccine names are
    /// case-insensitive and get lowercased. Passwords keep their case.
    pub fn parse(line: &str, session: &Session) -> Result<Self, ParseError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((name, args)) = tokens.split_first() else {
            return Err(ParseError::Empty);
        };
        let operation = Operation::from_name(name)
            .ok_or_else(|| ParseError::UnknownOperation((*name).to_owned()))?;
        operation.check_session(session).map_err(ParseError::Refused)?;
        Command::from_args(operation, args)
    }

    /// Build the [Command] for `operation` from its argument tokens.
    pub fn from_args(operation: Operation, args: &[&str]) -> Result<Self, ParseError> {
        match operation {
            Operation::CreatePatient => create_args(AccountKind::Patient, args),
            Operation::CreateCaregiver => create_args(AccountKind::Caregiver, args),
            Operation::LoginPatient => login_args(AccountKind::Patient, args),
            Operation::LoginCaregiver => login_args(AccountKind::Caregiver, args),
            Operation::SearchCaregiverSchedule => match args {
                [date] => Ok(Command::SearchCaregiverSchedule {
                    date: date_arg(date)?,
                }),
                _ => Err(ParseError::Usage(RETRY_USAGE)),
            },
            Operation::Reserve => match args {
                [date, vaccine] => Ok(Command::Reserve {
                    date: date_arg(date)?,
                    vaccine: vaccine.to_lowercase(),
                }),
                _ => Err(ParseError::Usage(RETRY_USAGE)),
            },
            Operation::UploadAvailability => match args {
                [date] => Ok(Command::UploadAvailability {
                    date: date_arg(date)?,
                }),
                _ => Err(ParseError::Usage(RETRY_USAGE)),
            },
            Operation::Cancel => match args {
                [id] => Ok(Command::Cancel {
                    appointment_id: id.parse().map_err(|_| ParseError::Usage(RETRY_USAGE))?,
                }),
                _ => Err(ParseError::Usage(RETRY_USAGE)),
            },
            Operation::AddDoses => match args {
                [vaccine, doses] => Ok(Command::AddDoses {
                    vaccine: vaccine.to_lowercase(),
                    doses: doses.parse().map_err(|_| ParseError::Usage(RETRY_USAGE))?,
                }),
                _ => Err(ParseError::Usage(RETRY_USAGE)),
            },
            Operation::ShowAppointments => no_args(args, Command::ShowAppointments),
            Operation::Logout => no_args(args, Command::Logout),
            Operation::Quit => Ok(Command::Quit),
        }
    }

    /// The operation this command runs.
    pub fn operation(&self) -> Operation {
        match self {
            Command::CreateAccount {
                kind: AccountKind::Patient,
                ..
            } => Operation::CreatePatient,
            Command::CreateAccount {
                kind: AccountKind::Caregiver,
                ..
            } => Operation::CreateCaregiver,
            Command::Login {
                kind: AccountKind::Patient,
                ..
            } => Operation::LoginPatient,
            Command::Login {
                kind: AccountKind::Caregiver,
                ..
            } => Operation::LoginCaregiver,
            Command::SearchCaregiverSchedule { .. } => Operation::SearchCaregiverSchedule,
            Command::Reserve { .. } => Operation::Reserve,
            Command::UploadAvailability { .. } => Operation::UploadAvailability,
            Command::Cancel { .. } => Operation::Cancel,
            Command::AddDoses { .. } => Operation::AddDoses,
            Command::ShowAppointments => Operation::ShowAppointments,
            Command::Logout => Operation::Logout,
            Command::Quit => Operation::Quit,
        }
    }

    /// The operation name, safe to log (never includes arguments such as passwords).
    pub fn name(&self) -> &'static str {
        self.operation().name()
    }
}

// Helpers for `<username> <password>` argument pairs.
fn create_args(kind: AccountKind, args: &[&str]) -> Result<Command, ParseError> {
    let (username, password) = account_args(args, CREATE_USAGE)?;
    Ok(Command::CreateAccount {
        kind,
        username,
        password,
    })
}

fn login_args(kind: AccountKind, args: &[&str]) -> Result<Command, ParseError> {
    let (username, password) = account_args(args, LOGIN_USAGE)?;
    Ok(Command::Login {
        kind,
        username,
        password,
    })
}

fn account_args(args: &[&str], usage: &'static str) -> Result<(String, String), ParseError> {
    match args {
        [username, password] => Ok((username.to_lowercase(), (*password).to_owned())),
        _ => Err(ParseError::Usage(usage)),
    }
}

// Helper for commands that take no arguments.
fn no_args(args: &[&str], command: Command) -> Result<Command, ParseError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(ParseError::Usage(RETRY_USAGE))
    }
}

fn date_arg(token: &str) -> Result<NaiveDate, ParseError> {
    parse_date(token).map_err(ParseError::Invalid)
}
