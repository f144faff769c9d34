//! Functionality related to the command line.
mod arg_matcher;
mod arg_parser;
mod command;
mod processes;
mod repl;

pub use arg_parser::Cli;
pub use command::{Command, ParseError};
pub use repl::run;
