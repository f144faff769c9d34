//! The interactive command loop.
use std::io::{self, BufRead, Write};

use tracing::{debug, error};

use super::{
    arg_matcher::match_command,
    command::{Command, ParseError},
};
use crate::{
    backend::{Session, Vault},
    error::Error,
};

const WELCOME: &str = "Welcome to the COVID-19 Vaccine Reservation Scheduling Application!";
const GOODBYE: &str = "Thank you for using the scheduler, Goodbye!";
const PROMPT: &str = "> Enter: ";

const MENU: &str = " *** Please enter one of the following commands ***
> create_patient <username> <password>
> create_caregiver <username> <password>
> login_patient <username> <password>
> login_caregiver <username> <password>
> search_caregiver_schedule <date>
> reserve <date> <vaccine>
> upload_availability <date>
> cancel <appointment_id>
> add_doses <vaccine> <number>
> show_appointments
> logout
> Quit";

/// Read commands from `input` until `quit` or end of input, writing one status message per
/// command to `output`. The session starts anonymous and lives as long as the loop.
pub fn run<R, W>(vault: &mut Vault, input: R, output: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session::default();

    writeln!(output)?;
    writeln!(output, "{WELCOME}")?;
    writeln!(output)?;
    writeln!(output, "{MENU}")?;
    writeln!(output)?;

    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;

        let command = match Command::parse(&line, &session) {
            Ok(Command::Quit) => {
                writeln!(output, "{GOODBYE}")?;
                break;
            }
            Ok(command) => command,
            Err(ParseError::Empty) => continue,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };
        debug!(command = command.name(), "dispatching");

        match match_command(vault, &mut session, command) {
            Ok(message) => writeln!(output, "{message}")?,
            Err(err) => {
                if let Error::Database(db_err) = &err {
                    error!(error = %db_err, "database error");
                }
                writeln!(output, "{err}")?;
            }
        }
    }
    Ok(())
}
