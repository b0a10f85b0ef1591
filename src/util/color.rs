//! Color parsing and derived color scalars.
//!
//! DTU documents store colors as HTML-style strings (`#RRGGBB`, `#RRGGBBAA`,
//! short `#RGB`/`#RGBA` forms, or a small set of color names). Parsed colors
//! are linear `Vec4` RGBA values with every channel in `0..=1`.

use glam::Vec4;
use std::fmt;

/// Function deriving a single intensity scalar from a color.
pub type StrengthFn = fn(Vec4) -> f32;

/// Named colors accepted in place of a hex code, as 8-bit RGB.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("red", [255, 0, 0]),
    ("cyan", [0, 255, 255]),
    ("blue", [0, 0, 255]),
    ("darkblue", [0, 0, 160]),
    ("lightblue", [173, 216, 230]),
    ("purple", [128, 0, 128]),
    ("yellow", [255, 255, 0]),
    ("lime", [0, 255, 0]),
    ("fuchsia", [255, 0, 255]),
    ("white", [255, 255, 255]),
    ("silver", [192, 192, 192]),
    ("grey", [128, 128, 128]),
    ("black", [0, 0, 0]),
    ("orange", [255, 165, 0]),
    ("brown", [165, 42, 42]),
    ("maroon", [128, 0, 0]),
    ("green", [0, 128, 0]),
    ("olive", [128, 128, 0]),
    ("navy", [0, 0, 128]),
    ("teal", [0, 128, 128]),
    ("aqua", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
];

/// Parse an HTML-style color string.
///
/// Returns `None` for anything that is not a well-formed hex code or a known
/// color name. Alpha defaults to 1.0 when the encoding omits it.
pub fn parse_html_color(s: &str) -> Option<Vec4> {
    match s.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => named_color(s),
    }
}

fn parse_hex(hex: &str) -> Option<Vec4> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channels: Vec<u8> = match hex.len() {
        // Short forms: each nibble is doubled (#F80 == #FF8800)
        3 | 4 => hex
            .bytes()
            .map(|b| hex_digit(b) * 0x11)
            .collect(),
        6 | 8 => hex
            .as_bytes()
            .chunks(2)
            .map(|pair| (hex_digit(pair[0]) << 4) | hex_digit(pair[1]))
            .collect(),
        _ => return None,
    };

    let alpha = channels.get(3).copied().unwrap_or(255);
    Some(from_rgba8([channels[0], channels[1], channels[2], alpha]))
}

#[inline]
fn hex_digit(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

fn named_color(name: &str) -> Option<Vec4> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, [r, g, b])| from_rgba8([*r, *g, *b, 255]))
}

/// Convert 8-bit RGBA channels to a normalized color.
#[inline]
pub fn from_rgba8(c: [u8; 4]) -> Vec4 {
    Vec4::new(c[0] as f32, c[1] as f32, c[2] as f32, c[3] as f32) / 255.0
}

/// Default intensity of a color: the mean of its RGB channels.
///
/// Alpha does not contribute.
pub fn strength(color: Vec4) -> f32 {
    (color.x + color.y + color.z) / 3.0
}

/// Display adapter rendering a color as `RGBA(r, g, b, a)`.
pub struct Rgba(pub Vec4);

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0;
        write!(f, "RGBA({:.3}, {:.3}, {:.3}, {:.3})", c.x, c.y, c.z, c.w)
    }
}
