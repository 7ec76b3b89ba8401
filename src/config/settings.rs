//! Demo settings.

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};

/// Settings for the interactive demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Rune that ends the demo.
    pub quit_rune: char,
    /// Whether a bare Escape ends the demo.
    pub quit_on_escape: bool,
    /// Whether to print the modifier predicates next to each key.
    pub show_modifiers: bool,
    /// Log filter directive, overriding the built-in default.
    pub log_filter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quit_rune: 'q',
            quit_on_escape: true,
            show_modifiers: true,
            log_filter: None,
        }
    }
}

impl Settings {
    /// Validate these settings.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` if the quit rune is a
    /// control character (those decode as control keys, never as runes).
    pub fn validate(&self) -> Result<()> {
        if self.quit_rune.is_control() {
            return Err(ConfigError::ValidationError(format!(
                "quit rune {:?} cannot be a control character",
                self.quit_rune
            )));
        }

        Ok(())
    }
}
