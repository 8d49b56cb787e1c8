// src/cli.rs

use clap::Parser;

/// A small utility that trims whitespace and removes empty lines from text files.
///
/// csvclean reads the given file line by line, strips leading and trailing
/// whitespace from each line, discards lines that become empty, and writes the
/// survivors to stdout in their original order. Despite the name it does not
/// parse CSV structure; the input is treated as raw newline-delimited text.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the text file to clean.
    #[arg(value_name = "input.csv")]
    pub input_path: String,
}
