//! Well-known HTML color names.
//!
//! Only used by structured retrieval, so that a store holding a name such as
//! the default `"white"` can still report channel values.

/// The sixteen HTML 4 colors as `(name, r, g, b)`.
pub const NAMED_COLORS: [(&str, u8, u8, u8); 16] = [
    ("black", 0x00, 0x00, 0x00),
    ("silver", 0xc0, 0xc0, 0xc0),
    ("gray", 0x80, 0x80, 0x80),
    ("white", 0xff, 0xff, 0xff),
    ("maroon", 0x80, 0x00, 0x00),
    ("red", 0xff, 0x00, 0x00),
    ("purple", 0x80, 0x00, 0x80),
    ("fuchsia", 0xff, 0x00, 0xff),
    ("green", 0x00, 0x80, 0x00),
    ("lime", 0x00, 0xff, 0x00),
    ("olive", 0x80, 0x80, 0x00),
    ("yellow", 0xff, 0xff, 0x00),
    ("navy", 0x00, 0x00, 0x80),
    ("blue", 0x00, 0x00, 0xff),
    ("teal", 0x00, 0x80, 0x80),
    ("aqua", 0x00, 0xff, 0xff),
];

/// Resolve a color name, ignoring ASCII case.
pub fn lookup(name: &str) -> Option<(u8, u8, u8)> {
    NAMED_COLORS
        .iter()
        .find(|(n, ..)| n.eq_ignore_ascii_case(name))
        .map(|&(_, r, g, b)| (r, g, b))
}
