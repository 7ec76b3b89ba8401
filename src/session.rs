//! The interactive echo loop.
//!
//! Reads key presses until the quit key is seen and prints a line for each
//! one. Output lines end in `\r\n` because raw mode disables the terminal's
//! newline translation.

use std::io::{Read, Write};

use rawkeys::{Decoder, Key, KeyEvent};
use tracing::{debug, info, warn};

use crate::config::Settings;

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The quit rune or Escape was pressed.
    Quit,
    /// The byte source reached end of stream.
    InputClosed,
}

/// Drives one decode/print loop over a byte source.
pub struct Session<'a> {
    settings: &'a Settings,
}

impl<'a> Session<'a> {
    /// Create a session with the given settings.
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Greeting printed before the first key press.
    pub fn greeting(&self) -> String {
        format!(
            "Type something, use '{}' to exit.\r\n",
            self.settings.quit_rune
        )
    }

    /// Check if `event` ends the session.
    pub fn is_quit(&self, event: &KeyEvent) -> bool {
        (self.settings.quit_on_escape && event.key() == Key::ESCAPE)
            || event.is_rune(self.settings.quit_rune)
    }

    /// Render one output line for `event`.
    pub fn format_event(&self, event: &KeyEvent) -> String {
        if self.settings.show_modifiers {
            format!(
                "{} - shift={} ctrl={} alt={} meta={}\r\n",
                event.describe(),
                event.shift(),
                event.ctrl(),
                event.alt(),
                event.meta()
            )
        } else {
            format!("{}\r\n", event.describe())
        }
    }

    /// Run until quit or end of input.
    ///
    /// Chunks that are not valid UTF-8 are logged and skipped. Any other
    /// read failure ends the session with an error.
    pub fn run<R: Read, W: Write>(
        &self,
        decoder: &mut Decoder<R>,
        out: &mut W,
    ) -> anyhow::Result<SessionEnd> {
        out.write_all(self.greeting().as_bytes())?;
        out.flush()?;

        let mut count: u64 = 0;
        let end = loop {
            let event = match decoder.next_event() {
                Ok(event) => event,
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, "Discarding undecodable input");
                    continue;
                }
                Err(e) if e.is_eof() => break SessionEnd::InputClosed,
                Err(e) => return Err(e.into()),
            };

            debug!(key = ?event.key(), modifiers = ?event.modifiers(), "{}", event);

            if self.is_quit(&event) {
                break SessionEnd::Quit;
            }

            count += 1;
            out.write_all(self.format_event(&event).as_bytes())?;
            out.flush()?;
        };

        info!(events = count, end = ?end, "Session finished");
        Ok(end)
    }
}
