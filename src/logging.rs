//! Logging setup. Diagnostics go to a log file so they never mix with the interactive prompt on
//! standard output.
use std::{fs::OpenOptions, sync::Mutex};

use camino::Utf8Path;
use color_eyre::eyre::{self, eyre};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging, appending to the file at `log_path`.
///
/// `default_level` is used unless the `RUST_LOG` environment variable is set.
pub fn init(log_path: &Utf8Path, default_level: &str) -> eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|err| eyre!("Invalid log level \"{default_level}\": {err}"))?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(log_file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()?;
    Ok(())
}

/// Initialize logging for testing (captures logs for test output)
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
