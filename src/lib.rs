//! RawKeys - decode raw terminal input into keyboard events.
//!
//! Terminals deliver key presses as unframed bytes: single control codes,
//! UTF-8 runes, or ANSI escape sequences. This crate turns one read's worth
//! of those bytes into a [`KeyEvent`].
//!
//! The terminal must already be in raw mode (unbuffered, no echo). Setting
//! that up is the caller's job.
//!
//! ```no_run
//! use std::fs::File;
//!
//! use rawkeys::{Decoder, Key};
//!
//! let tty = File::open("/dev/tty")?;
//! let mut decoder = Decoder::new(tty);
//! loop {
//!     let event = decoder.next_event()?;
//!     if event.key() == Key::ESCAPE {
//!         break;
//!     }
//!     print!("{}\r\n", event);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod decoder;
mod error;
mod event;
mod keys;

pub use decoder::{decode, decode_bytes, Decoder, READ_BUFFER_SIZE};
pub use error::{DecodeError, Result};
pub use event::KeyEvent;
pub use keys::{Key, Modifier};
