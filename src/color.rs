//! CSS color checks for palette entries
//!
//! Colors are passed to the rendering layer untouched; parsing only exists so
//! validation can warn about entries a browser would ignore. Hex colors take
//! a fast path, everything else (`rgb()`, `hsl()`, named colors, ...) goes
//! through lightningcss.

use lightningcss::traits::Parse;
use lightningcss::values::color::{CssColor, FloatColor};
use thiserror::Error;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Invalid length (must be 3, 4, 6, or 8 hex chars after #)
    #[error("invalid color length {0}, expected 3, 4, 6, or 8")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
    /// CSS parsing error from lightningcss
    #[error("CSS parse error: {0}")]
    CssParse(String),
}

/// Parse a CSS color string into `[r, g, b, a]`.
///
/// ```
/// use confetti::color::parse_color;
///
/// assert_eq!(parse_color("#FFC700").unwrap(), [255, 199, 0, 255]);
/// assert_eq!(parse_color("#F00").unwrap(), [255, 0, 0, 255]);
/// assert_eq!(parse_color("blue").unwrap(), [0, 0, 255, 255]);
/// ```
pub fn parse_color(s: &str) -> Result<[u8; 4], ColorError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ColorError::Empty);
    }

    match s.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => parse_css(s),
    }
}

/// Whether a browser would accept `s` as a color
pub fn is_valid_color(s: &str) -> bool {
    parse_color(s).is_ok()
}

fn parse_hex(hex: &str) -> Result<[u8; 4], ColorError> {
    if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(bad));
    }

    // All characters are ASCII hex digits past this point
    let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).unwrap_or(0);
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);

    match hex.len() {
        3 => Ok([digit(0) * 17, digit(1) * 17, digit(2) * 17, 255]),
        4 => Ok([digit(0) * 17, digit(1) * 17, digit(2) * 17, digit(3) * 17]),
        6 => Ok([pair(0), pair(2), pair(4), 255]),
        8 => Ok([pair(0), pair(2), pair(4), pair(6)]),
        len => Err(ColorError::InvalidLength(len)),
    }
}

fn parse_css(s: &str) -> Result<[u8; 4], ColorError> {
    let color = CssColor::parse_string(s).map_err(|e| ColorError::CssParse(e.to_string()))?;
    let rgb = color
        .to_rgb()
        .map_err(|_| ColorError::CssParse("cannot convert color to RGB".to_string()))?;

    match rgb {
        CssColor::RGBA(c) => Ok([c.red, c.green, c.blue, c.alpha]),
        CssColor::Float(float_color) => match float_color.as_ref() {
            FloatColor::RGB(c) => {
                let channel = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
                Ok([channel(c.r), channel(c.g), channel(c.b), channel(c.alpha)])
            }
            _ => Err(ColorError::CssParse("unexpected float color format".to_string())),
        },
        _ => Err(ColorError::CssParse("color conversion did not produce RGB".to_string())),
    }
}
