//! Error types for key decoding.
//!
//! Decoding fails in exactly two ways: the byte source could not be read, or
//! the bytes read do not start with a UTF-8 scalar. An unrecognized escape
//! sequence is never an error.

use thiserror::Error;

/// Errors that can occur while decoding a key press.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Reading from the byte source failed.
    ///
    /// End of stream is reported here with kind `UnexpectedEof`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input does not begin with a valid UTF-8 scalar.
    #[error("invalid rune")]
    InvalidEncoding,
}

impl DecodeError {
    /// Check if the caller can discard the input and read again.
    ///
    /// Only `InvalidEncoding` is recoverable; a failed read means the byte
    /// source itself is broken.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DecodeError::InvalidEncoding)
    }

    /// Check if the byte source reached end of stream.
    pub fn is_eof(&self) -> bool {
        matches!(self, DecodeError::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }

    /// Get a user-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            DecodeError::Io(_) if self.is_eof() => "Input closed.".to_string(),
            DecodeError::Io(e) => format!("Could not read terminal input: {}", e),
            DecodeError::InvalidEncoding => {
                "Received bytes that are not valid UTF-8 and were ignored.".to_string()
            }
        }
    }
}

/// Result type for decode operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_decode_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "gone");
        let err: DecodeError = io_err.into();
        assert!(matches!(err, DecodeError::Io(_)));
    }

    #[test]
    fn test_is_recoverable() {
        assert!(DecodeError::InvalidEncoding.is_recoverable());
        let err = DecodeError::Io(io::Error::new(io::ErrorKind::Other, "boom"));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_is_eof() {
        let err = DecodeError::Io(io::ErrorKind::UnexpectedEof.into());
        assert!(err.is_eof());
        assert!(!DecodeError::InvalidEncoding.is_eof());
    }

    #[test]
    fn test_user_message() {
        let err = DecodeError::Io(io::ErrorKind::UnexpectedEof.into());
        assert_eq!(err.user_message(), "Input closed.");

        let err = DecodeError::Io(io::Error::new(io::ErrorKind::Other, "boom"));
        assert!(err.user_message().contains("boom"));

        assert!(DecodeError::InvalidEncoding.user_message().contains("UTF-8"));
    }

    #[test]
    fn test_display() {
        assert_eq!(DecodeError::InvalidEncoding.to_string(), "invalid rune");
    }
}
