//! RawKeys demo - echo decoded key presses from the terminal.
//!
//! Switches the terminal to raw mode and prints one line per key press until
//! the quit rune (or Escape) is pressed.

mod cli;
mod config;
mod logging;
mod session;
mod terminal;

use std::io;

use anyhow::Context;
use clap::Parser;
use rawkeys::{DecodeError, Decoder};
use tracing::{error, info};

use crate::cli::Cli;
use crate::session::Session;
use crate::terminal::{InputSource, RawModeGuard};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", error_message(&e));
        if let Some(dir) = logging::log_directory() {
            eprintln!("logs: {}", dir.display());
        }
        std::process::exit(1);
    }
}

/// Message shown to the user when the demo fails.
fn error_message(e: &anyhow::Error) -> String {
    match e.downcast_ref::<DecodeError>() {
        Some(decode_err) => decode_err.user_message(),
        None => format!("{:#}", e),
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = config::config_path(cli.config.as_deref())?;
    let settings = cli.apply(config::load(&path)?);

    logging::init(settings.log_filter.as_deref())?;

    let source = InputSource::detect();
    info!(config = %path.display(), ?source, "Settings loaded");

    let input = source
        .open()
        .with_context(|| format!("failed to open {:?} for input", source))?;
    let mut decoder = Decoder::new(input);

    let result = {
        let _raw = RawModeGuard::enable().context("failed to enable raw mode")?;
        let mut stdout = io::stdout().lock();
        Session::new(&settings).run(&mut decoder, &mut stdout)
    };

    match &result {
        Ok(end) => info!(?end, "Exiting"),
        Err(e) => error!(error = %e, "Session failed"),
    }
    logging::shutdown();

    result.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_for_decode_error() {
        let err = anyhow::Error::from(DecodeError::Io(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "tty closed",
        )));
        assert_eq!(
            error_message(&err),
            "Could not read terminal input: tty closed"
        );
    }

    #[test]
    fn test_error_message_for_other_error() {
        let err = anyhow::anyhow!("inner").context("outer");
        assert_eq!(error_message(&err), "outer: inner");
    }
}
