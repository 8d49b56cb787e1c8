// src/input.rs

use crate::errors::{open_error_with_path, CleanError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Opens the input path as a buffered reader.
/// Wraps open failures with path context.
pub fn open_input(path: &Path) -> Result<BufReader<File>, CleanError> {
    let file = File::open(path).map_err(|e| open_error_with_path(e, path))?;
    Ok(BufReader::new(file))
}
