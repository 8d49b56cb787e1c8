// tests/common.rs

use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by the integration tests, but not all of them.
pub fn csvclean_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("csvclean"))
}
