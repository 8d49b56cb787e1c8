// src/main.rs

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use csvclean::cli::Cli;
use csvclean::errors::CleanError;
use std::io;

fn main() -> Result<()> {
    // Initialize logging to stderr, controlled by RUST_LOG. Off by default so
    // stderr stays reserved for diagnostics.
    env_logger::Builder::from_env(env_logger::Env::default())
        .target(env_logger::Target::Stderr)
        .init();

    log::debug!("Starting csvclean v{}", env!("CARGO_PKG_VERSION"));

    // Any argument error other than --help/--version maps to the one-line
    // usage diagnostic and exit code 1, without attempting any I/O.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(());
        }
        Err(e) => {
            log::debug!("argument parsing failed: {e}");
            eprintln!("{}", CleanError::Usage);
            std::process::exit(1);
        }
    };

    // Stdout's line buffering means that on a mid-stream failure every line
    // written so far has already reached the stream; nothing is rolled back.
    let mut stdout = io::stdout().lock();

    match csvclean::run(&cli.input_path, &mut stdout) {
        Ok(counts) => {
            log::info!(
                "done: {} lines written, {} dropped",
                counts.written,
                counts.dropped
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
