//! Error type shared by every routine in the crate.

use thiserror::Error;

use crate::alphabet::Alphabet;

/// Errors produced by the kata routines, the configuration layer and the
/// line-protocol server.
#[derive(Error, Debug)]
pub enum KataError {
    /// A caller-supplied argument is inconsistent (e.g. mismatched bound lists).
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument
        message: String,
    },

    /// A symbol does not belong to the configured alphabet.
    #[error("symbol {symbol:?} is outside the {alphabet} alphabet")]
    OutOfAlphabet {
        /// The offending symbol
        symbol: char,
        /// The alphabet in effect
        alphabet: Alphabet,
    },

    /// A compared word contains a symbol the custom ordering does not rank.
    #[error("symbol {symbol:?} has no rank in the custom ordering")]
    Unranked {
        /// The offending symbol
        symbol: char,
    },

    /// Configuration could not be loaded or holds an invalid value.
    #[error("invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },

    /// A protocol line could not be parsed into a command.
    #[error("malformed command: {message}")]
    Protocol {
        /// What was malformed
        message: String,
    },

    /// I/O errors from the server loop and the binaries
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KataError {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a protocol error
    pub fn protocol<S: Into<String>>(message: S) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }
}

/// Result type specialised for [`KataError`].
pub type Result<T> = std::result::Result<T, KataError>;
