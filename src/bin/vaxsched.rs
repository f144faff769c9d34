use std::{fs, io};

use clap::Parser;
use color_eyre::eyre;
use tracing::info;

use vaxsched::{backend::Vault, cli, config::Config, logging, utils};

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::Cli::parse();
    let config = Config::load()?;

    fs::create_dir_all(utils::data_dir()?)?;
    let log_level = args
        .log_level
        .as_deref()
        .unwrap_or(&config.logging.level);
    logging::init(&utils::log_path()?, log_level)?;

    let db_path = match args.database.or(config.database.path) {
        Some(path) => path,
        None => utils::db_path()?,
    };
    if let Some(parent) = db_path.parent().filter(|parent| !parent.as_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut vault = Vault::connect(db_path)?;
    info!(database = %vault.path(), "scheduler started");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    cli::run(&mut vault, stdin.lock(), &mut stdout)?;

    info!("scheduler stopped");
    Ok(())
}
