//! Defines application-specific error types.
//!
//! This module provides the `CleanError` enum, which categorizes the three
//! failure phases of a run (usage, open, scan), offering more context than
//! generic I/O or `anyhow` errors. The `Display` impl of each variant is the
//! exact one-line diagnostic printed to stderr before exiting.

use crate::constants::USAGE;
use thiserror::Error;

/// Application-specific errors used throughout `csvclean`.
///
/// Every variant is fatal by design: the binary prints the `Display` form to
/// stderr and exits with code 1. There is no retry or skip-and-continue path.
#[derive(Error, Debug)]
pub enum CleanError {
    /// Wrong number of command-line arguments. No I/O is attempted.
    #[error("{}", USAGE)]
    Usage,

    /// The input path could not be opened for reading (missing file,
    /// permission denied, is-a-directory, ...).
    #[error("open: {path}: {source}")]
    Open {
        /// The path that failed to open.
        path: String, // Use String to avoid lifetime issues if PathBuf is dropped
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Failure while iterating lines after a successful open (I/O fault,
    /// invalid UTF-8, or a failed write to the output stream).
    #[error("scan: {source}")]
    Scan {
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },
}

/// Helper to create a `CleanError::Open` with path context.
pub fn open_error_with_path<P: AsRef<std::path::Path>>(
    source: std::io::Error,
    path: P,
) -> CleanError {
    CleanError::Open {
        path: path.as_ref().display().to_string(),
        source,
    }
}

/// Helper to wrap a mid-stream I/O failure as a `CleanError::Scan`.
pub fn scan_error(source: std::io::Error) -> CleanError {
    CleanError::Scan { source }
}
