//! Command-line arguments for the demo.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;

/// Print every key press read from a raw-mode terminal.
#[derive(Debug, Parser)]
#[command(name = "rawkeys", version, about)]
pub struct Cli {
    /// Rune that ends the session.
    #[arg(long, value_name = "CHAR")]
    pub quit: Option<char>,

    /// Do not exit when Escape is pressed.
    #[arg(long)]
    pub no_escape_quit: bool,

    /// Hide the shift/ctrl/alt/meta flags.
    #[arg(long)]
    pub no_modifiers: bool,

    /// Configuration file to load.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter directive, e.g. `rawkeys=trace`.
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,
}

impl Cli {
    /// Apply command-line overrides on top of file settings.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(quit) = self.quit {
            settings.quit_rune = quit;
        }
        if self.no_escape_quit {
            settings.quit_on_escape = false;
        }
        if self.no_modifiers {
            settings.show_modifiers = false;
        }
        if let Some(filter) = &self.log_filter {
            settings.log_filter = Some(filter.clone());
        }
        settings
    }
}
