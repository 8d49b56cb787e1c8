//! `csvclean` is a library and command-line tool for light text cleanup:
//! it trims leading and trailing whitespace from every line of a file,
//! discards lines that become empty, and writes the rest to stdout in their
//! original order.
//!
//! It is a single-pass filter intended to tidy CSV-ish files before
//! downstream processing. Despite the name it is not CSV-aware: commas and
//! quoting are never interpreted, and the input is treated as raw
//! newline-delimited text.
//!
//! As a library it exposes the core loop as a pure function over injected
//! streams, so it can be used (and tested) without touching the filesystem:
//!
//! ```
//! use std::io::Cursor;
//!
//! let input = Cursor::new("  name, qty  \n\n  widget, 3\n   \n");
//! let mut output = Vec::new();
//!
//! let counts = csvclean::clean(input, &mut output).unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "name, qty\nwidget, 3\n");
//! assert_eq!(counts.written, 2);
//! assert_eq!(counts.dropped, 2);
//! ```

pub mod cleaner;
pub mod cli;
pub mod constants;
pub mod errors;
pub mod input;

// Re-export key public types for easier use as a library
pub use cleaner::{clean, CleanCounts};
pub use errors::CleanError;

use crate::errors::scan_error;
use std::io::Write;
use std::path::Path;

/// Opens `path` and cleans it into `writer`.
///
/// This is the entry point mirroring command-line execution: it resolves the
/// path to a buffered reader, runs [`clean`], and flushes the writer. The
/// file handle is released on every exit path, including errors, when the
/// reader is dropped.
///
/// # Errors
/// Returns `CleanError::Open` if the path cannot be opened for reading and
/// `CleanError::Scan` on a mid-stream read or write failure. All errors are
/// fatal; there is no skip-and-continue.
pub fn run<W: Write>(path: impl AsRef<Path>, writer: &mut W) -> Result<CleanCounts, CleanError> {
    let path = path.as_ref();
    log::debug!("cleaning '{}'", path.display());

    let reader = input::open_input(path)?;
    let counts = clean(reader, writer)?;
    writer.flush().map_err(scan_error)?;

    Ok(counts)
}
