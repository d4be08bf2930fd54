//! Color parsing and emotion derivation errors.

use serde::Serialize;
use thiserror::Error;

/// Coarse classification of a [`ColorError`], used by the transport layer
/// to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed hex input: wrong length or non-hex characters.
    Parse,
    /// Hex channel value not representable as a signed 8-bit integer.
    Range,
    /// Unknown operator name.
    Lookup,
    /// Division operator applied with a zero divisor.
    DivisionByZero,
    /// Emotion table index out of bounds.
    Index,
}

/// Errors that can occur while parsing colors or computing an emotion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input does not have the expected number of characters.
    #[error("Invalid color length: expected {expected} characters, found {found}")]
    InvalidLength { expected: usize, found: usize },

    /// Input contains a character that is not a hexadecimal digit.
    #[error("Invalid hex digits in '{0}'")]
    InvalidHex(String),

    /// Hex pair is above the signed 8-bit maximum (0x7f).
    #[error("Channel '{pair}' ({value}) is out of signed 8-bit range")]
    OutOfRange { pair: String, value: u8 },

    /// Operator name is not one of add/sub/mul/div.
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    /// Division operator hit a zero divisor, on `channel` when known.
    #[error("Division by zero{}", channel_suffix(.channel))]
    DivisionByZero { channel: Option<&'static str> },

    /// Channel sum reduced to an index outside the emotion table.
    #[error("Emotion index {index} out of range for table of {len} entries")]
    EmotionIndexOutOfRange { index: i32, len: usize },
}

fn channel_suffix(channel: &Option<&'static str>) -> String {
    channel
        .map(|c| format!(" in {} channel", c))
        .unwrap_or_default()
}

impl ColorError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ColorError::InvalidLength { .. } | ColorError::InvalidHex(_) => ErrorKind::Parse,
            ColorError::OutOfRange { .. } => ErrorKind::Range,
            ColorError::UnknownOperator(_) => ErrorKind::Lookup,
            ColorError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            ColorError::EmotionIndexOutOfRange { .. } => ErrorKind::Index,
        }
    }
}
