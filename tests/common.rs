// Common functionality for integration tests
#![allow(dead_code)]

use camino::Utf8PathBuf;
use tempfile::TempDir;
use vaxsched::{backend::Vault, cli};

pub const PASSWORD: &str = "Abc123!@";

/// A fresh vault in its own temporary directory. Keep the [TempDir] alive for as long as the
/// vault is used.
pub fn test_vault() -> (TempDir, Vault) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = Utf8PathBuf::from_path_buf(dir.path().join("vaxsched-test.db"))
        .expect("temp dir path is not UTF-8");
    let vault = Vault::connect(path).expect("failed to open vault");
    (dir, vault)
}

/// Feed `script` to the command loop and return everything it printed.
pub fn run_script(vault: &mut Vault, script: &str) -> String {
    let mut output = Vec::new();
    cli::run(vault, script.as_bytes(), &mut output).expect("command loop failed");
    String::from_utf8(output).expect("output is not UTF-8")
}

/// The lines the command loop printed in response to commands, with the banner and prompts
/// stripped.
pub fn responses(output: &str) -> Vec<String> {
    output
        .split("> Enter: ")
        .skip(1)
        .flat_map(|chunk| chunk.lines())
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
