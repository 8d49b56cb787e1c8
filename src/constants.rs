// src/constants.rs

/// One-line usage diagnostic printed to stderr on argument errors.
pub const USAGE: &str = "usage: csvclean <input.csv>";
