//! Raw mode control for the demo terminal.
//!
//! crossterm switches stdin to raw mode when stdin is a terminal and
//! `/dev/tty` otherwise. Input must be read from that same terminal, so the
//! source is chosen by the same rule.

use std::fs::File;
use std::io::{self, IsTerminal, Read};

use crossterm::terminal;
use tracing::{debug, warn};

/// Path of the controlling terminal.
pub const CONTROLLING_TTY: &str = "/dev/tty";

/// Where the demo reads key presses from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input, which is a terminal.
    Stdin,
    /// The controlling terminal, used when stdin is redirected.
    ControllingTty,
}

impl InputSource {
    /// Pick the terminal that raw mode applies to.
    pub fn select(stdin_is_terminal: bool) -> Self {
        if stdin_is_terminal {
            InputSource::Stdin
        } else {
            InputSource::ControllingTty
        }
    }

    /// Detect the source for the current process.
    pub fn detect() -> Self {
        Self::select(io::stdin().is_terminal())
    }

    /// Open the source for reading.
    pub fn open(self) -> io::Result<Box<dyn Read>> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin())),
            InputSource::ControllingTty => Ok(Box::new(File::open(CONTROLLING_TTY)?)),
        }
    }
}

/// Keeps the terminal in raw mode until dropped.
///
/// Dropping the guard restores the previous mode, including during an early
/// return or an error.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// Enable raw mode.
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        debug!("Raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        match terminal::disable_raw_mode() {
            Ok(()) => debug!("Raw mode disabled"),
            Err(e) => warn!(error = %e, "Failed to restore terminal mode"),
        }
    }
}
