//! Parse command-line arguments for `vaxsched`.
use camino::Utf8PathBuf;
use clap::Parser;

use crate::utils;

/// The command-line interface argument parser.
///
/// Scheduler commands themselves are read interactively from standard input once the program
/// starts; these flags only choose where state lives and how much gets logged.
#[derive(Parser, Debug)]
#[command(name = "vaxsched")]
#[command(author)]
#[command(version = utils::info())]
#[command(about = "Vaccine appointment scheduler.")]
pub struct Cli {
    /// Path to the SQLite database. Overrides the configured path.
    #[arg(long, value_name = "PATH")]
    pub database: Option<Utf8PathBuf>,
    /// Default log level (error, warn, info, debug, trace). `RUST_LOG` still takes precedence.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}
