//! Hex color codec.
//!
//! Colors are six hex digits split into three pairs. Each pair is read as a
//! signed 8-bit integer, so only `00`..=`7f` are accepted; `80`..=`ff` are
//! rejected instead of wrapping to negative values.
//!
//! Pairs bind to fields in the order red, blue, green: the second pair is the
//! blue channel and the third is green.

use serde::{Deserialize, Serialize};

use super::error::ColorError;

/// One color component.
pub type Channel = i8;

/// Number of characters in a hex color.
pub const HEX_COLOR_LEN: usize = 6;

/// Three channels parsed from a hex color, in pair order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// First hex pair.
    pub red: Channel,
    /// Second hex pair.
    pub blue: Channel,
    /// Third hex pair.
    pub green: Channel,
}

impl Rgb {
    pub fn new(red: Channel, blue: Channel, green: Channel) -> Self {
        Self { red, blue, green }
    }
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parse two hex digits as a signed 8-bit channel.
pub fn parse_channel_pair(pair: &str) -> Result<Channel, ColorError> {
    let bytes = pair.as_bytes();
    if bytes.len() != 2 {
        return Err(ColorError::InvalidLength {
            expected: 2,
            found: pair.chars().count(),
        });
    }

    let invalid = || ColorError::InvalidHex(pair.to_string());
    let hi = nibble(bytes[0]).ok_or_else(invalid)?;
    let lo = nibble(bytes[1]).ok_or_else(invalid)?;
    let value = hi << 4 | lo;

    Channel::try_from(value).map_err(|_| ColorError::OutOfRange {
        pair: pair.to_string(),
        value,
    })
}

/// Parse a six-digit hex color.
pub fn parse(color: &str) -> Result<Rgb, ColorError> {
    let found = color.chars().count();
    if found != HEX_COLOR_LEN {
        return Err(ColorError::InvalidLength {
            expected: HEX_COLOR_LEN,
            found,
        });
    }
    // Six chars but more bytes means something non-ASCII; slicing would
    // split a code point.
    if !color.is_ascii() {
        return Err(ColorError::InvalidHex(color.to_string()));
    }

    Ok(Rgb {
        red: parse_channel_pair(&color[0..2])?,
        blue: parse_channel_pair(&color[2..4])?,
        green: parse_channel_pair(&color[4..6])?,
    })
}

/// Render channels back to six lowercase hex digits.
pub fn format(rgb: &Rgb) -> String {
    format!(
        "{:02x}{:02x}{:02x}",
        rgb.red as u8, rgb.blue as u8, rgb.green as u8
    )
}
