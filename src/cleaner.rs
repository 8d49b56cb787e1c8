// src/cleaner.rs

//! The core read-trim-filter-print loop.
//!
//! This module is deliberately free of filesystem and process concerns: it
//! operates on any `BufRead`/`Write` pair, which keeps the loop testable with
//! in-memory streams. The binary wires it to a real file and stdout.

use crate::errors::{scan_error, CleanError};
use std::io::{BufRead, Write};

/// Line statistics for a single cleaning run.
///
/// Invariant: `read == written + dropped`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanCounts {
    /// Lines read from the input.
    pub read: usize,
    /// Lines emitted to the output.
    pub written: usize,
    /// Lines discarded because they were empty after trimming.
    pub dropped: usize,
}

/// Trims every line from `reader`, drops lines that become empty, and writes
/// the survivors to `writer` in input order, each terminated by a single `\n`.
///
/// Trimming uses `str::trim`, i.e. the Unicode whitespace class; this also
/// strips the `\r` left over from CRLF line endings. The input is consumed in
/// one forward pass and nothing is retained across lines.
///
/// # Errors
/// Returns `CleanError::Scan` on the first read or write failure (I/O fault,
/// invalid UTF-8). Lines written before the failure remain written.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// let input = Cursor::new("  a,b,c  \n\n  \n d,e,f\n");
/// let mut output = Vec::new();
///
/// let counts = csvclean::clean(input, &mut output).unwrap();
///
/// assert_eq!(output, b"a,b,c\nd,e,f\n");
/// assert_eq!(counts.read, 4);
/// assert_eq!(counts.written, 2);
/// assert_eq!(counts.dropped, 2);
/// ```
pub fn clean<R: BufRead, W: Write>(reader: R, writer: &mut W) -> Result<CleanCounts, CleanError> {
    let mut counts = CleanCounts::default();

    for line in reader.lines() {
        let line = line.map_err(scan_error)?;
        counts.read += 1;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            counts.dropped += 1;
            continue;
        }

        writeln!(writer, "{trimmed}").map_err(scan_error)?;
        counts.written += 1;
    }

    log::debug!(
        "cleaned {} lines: {} written, {} dropped",
        counts.read,
        counts.written,
        counts.dropped
    );
    Ok(counts)
}
