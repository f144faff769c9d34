//! General utilities used by `vaxsched`.
use std::env;

use camino::Utf8PathBuf;
use color_eyre::eyre::{self, eyre};
use directories::ProjectDirs;

const DATABASE_FILE_NAME: &str = "scheduler.db";

/// Get the version, author info, and directories of `vaxsched`.
pub fn info() -> String {
    let author = clap::crate_authors!();
    let show = |dir: eyre::Result<Utf8PathBuf>| match dir {
        Ok(dir) => dir.to_string(),
        Err(err) => format!("unavailable ({err})"),
    };
    format!(
        "\
{}

Author: {author}

Data Directory: {}
Config Directory: {}",
        env!("CARGO_PKG_VERSION"),
        show(data_dir()),
        show(config_dir()),
    )
}

/// Get the directory where `vaxsched` program data is stored.
pub fn data_dir() -> eyre::Result<Utf8PathBuf> {
    if let Some(utf8_path_buf) = data_dir_env_var() {
        // Prioritise user-set path.
        Ok(utf8_path_buf)
    } else if let Some(proj_dirs) = project_directory() {
        // Next priority: XDG-standardised local dir.
        Utf8PathBuf::from_path_buf(proj_dirs.data_local_dir().to_path_buf()).map_err(|path_buf| {
            eyre!(
                "Path to data directory {:?} contains non-UTF-8 content.",
                path_buf
            )
        })
    } else {
        // Last priority: .vaxsched folder relative to CWD
        Ok(Utf8PathBuf::from(".").join(".vaxsched"))
    }
}

/// Get the directory where `vaxsched` configuration data is stored.
pub fn config_dir() -> eyre::Result<Utf8PathBuf> {
    if let Some(utf8_path_buf) = config_dir_env_var() {
        Ok(utf8_path_buf)
    } else if let Some(proj_dirs) = project_directory() {
        Utf8PathBuf::from_path_buf(proj_dirs.config_local_dir().to_path_buf()).map_err(
            |path_buf| {
                eyre!(
                    "Path to config directory {:?} contains non-UTF-8 content.",
                    path_buf
                )
            },
        )
    } else {
        Ok(Utf8PathBuf::from(".").join(".vaxsched"))
    }
}

/// Default location of the scheduler database, inside the data directory.
pub fn db_path() -> eyre::Result<Utf8PathBuf> {
    Ok(data_dir()?.join(DATABASE_FILE_NAME))
}

/// Location of the log file, inside the data directory.
pub fn log_path() -> eyre::Result<Utf8PathBuf> {
    Ok(data_dir()?.join(log_file_name()))
}

/// Get the log file name.
pub fn log_file_name() -> String {
    format!("{}.log", env!("CARGO_PKG_NAME"))
}

/// Data directory environment variable. Can be set to change the location of the `vaxsched` data
/// directory.
pub fn data_dir_env_var() -> Option<Utf8PathBuf> {
    get_env_var_path("DATA")
}

/// Config directory environment variable. Can be set to change the location of the `vaxsched`
/// config directory.
pub fn config_dir_env_var() -> Option<Utf8PathBuf> {
    get_env_var_path("CONFIG")
}

// Helper function.
fn get_env_var_path(suffix: &str) -> Option<Utf8PathBuf> {
    env::var(format!("{}_{}", crate_name_constant_case(), suffix))
        .ok()
        .map(Utf8PathBuf::from)
}

/// Get the crate name in CONSTANT_CASE.
pub fn crate_name_constant_case() -> String {
    env!("CARGO_CRATE_NAME").to_uppercase()
}

/// Get the directory of this project.
pub fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "vaxsched", env!("CARGO_PKG_NAME"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn names() {
        assert_eq!(crate_name_constant_case(), "VAXSCHED");
        assert_eq!(log_file_name(), "vaxsched.log");
    }
}
