//! Terminal input decoding.
//!
//! Each call performs exactly one read and turns whatever bytes arrived into
//! one [`KeyEvent`]. The decoder keeps nothing between calls, so an escape
//! sequence split across two reads decodes as `Escape` followed by runes.
//!
//! The terminal must already be in raw mode; this module only sees bytes.

use std::io::{self, Read};

use tracing::trace;

use crate::error::{DecodeError, Result};
use crate::event::KeyEvent;
use crate::keys::{sequences, Key, Modifier};

/// Capacity of the buffer handed to each read.
///
/// Must exceed the longest entry of the sequence table.
pub const READ_BUFFER_SIZE: usize = 256;

/// Literal reported for keys matched through the sequence table.
const PLACEHOLDER: char = ' ';

/// Read one chunk from `source` and decode it.
///
/// Blocks for as long as the underlying read blocks. A read of zero bytes is
/// reported as [`DecodeError::Io`] with kind `UnexpectedEof`.
///
/// # Example
///
/// ```
/// use rawkeys::{decode, Key, Modifier};
///
/// let mut input: &[u8] = b"\x1b[1;2D";
/// let event = decode(&mut input).unwrap();
/// assert_eq!(event.key(), Key::Left);
/// assert_eq!(event.modifiers(), Modifier::SHIFT);
/// assert_eq!(event.describe(), "Shift+Left");
/// ```
pub fn decode<R: Read + ?Sized>(source: &mut R) -> Result<KeyEvent> {
    let mut buf = [0u8; READ_BUFFER_SIZE];

    let n = source.read(&mut buf)?;
    if n == 0 {
        return Err(DecodeError::Io(io::ErrorKind::UnexpectedEof.into()));
    }

    decode_bytes(&buf[..n])
}

/// Decode a chunk of input that has already been read.
///
/// `bytes` is treated as the complete result of a single read: the control
/// fast path fires only for a one-byte chunk and the sequence table is
/// matched against the whole chunk.
pub fn decode_bytes(bytes: &[u8]) -> Result<KeyEvent> {
    let c = leading_scalar(bytes).ok_or(DecodeError::InvalidEncoding)?;

    // control characters
    if let [byte] = bytes {
        if let Some(key) = Key::from_control(*byte) {
            trace!(?key, "control character");
            return Ok(KeyEvent::new(key, c, Modifier::NONE));
        }
    }

    // sequences
    if let Some(entry) = sequences::lookup(bytes) {
        let (key, modifiers) = entry.resolve();
        trace!(?key, ?modifiers, len = bytes.len(), "matched sequence");
        return Ok(KeyEvent::new(key, PLACEHOLDER, modifiers));
    }

    trace!(rune = ?c, len = bytes.len(), "rune");
    Ok(KeyEvent::new(Key::Rune, c, Modifier::NONE))
}

/// First UTF-8 scalar of `bytes`, if the input starts with a complete one.
fn leading_scalar(bytes: &[u8]) -> Option<char> {
    let valid = match std::str::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => std::str::from_utf8(&bytes[..e.valid_up_to()]).ok()?,
    };
    valid.chars().next()
}

/// Decodes key presses from an owned byte source.
///
/// Holds only the source; every [`next_event`](Decoder::next_event) call is
/// independent of the previous one.
#[derive(Debug)]
pub struct Decoder<R> {
    source: R,
}

impl<R: Read> Decoder<R> {
    /// Create a decoder reading from `source`.
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Block until input arrives and decode it.
    pub fn next_event(&mut self) -> Result<KeyEvent> {
        decode(&mut self.source)
    }

    /// Get a reference to the byte source.
    pub fn get_ref(&self) -> &R {
        &self.source
    }

    /// Consume the decoder, returning the byte source.
    pub fn into_inner(self) -> R {
        self.source
    }
}
