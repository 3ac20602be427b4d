//! Hex color strings (`#RRGGBB`, `#AARRGGBB`) to ARGB channels.

use std::fmt;

use thiserror::Error;

/// Most hex digits a color can carry (`AARRGGBB`).
const MAX_DIGITS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argb {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color value is empty")]
    Empty,
    #[error("'{0}' is not a hexadecimal digit")]
    InvalidDigit(char),
    #[error("color has {0} hex digits, at most 8 are allowed")]
    TooLong(usize),
}

/// Parses a hex color. Every `#` is removed first.
///
/// Exactly eight digits carry alpha in the top byte; shorter values are
/// opaque (alpha 255) and read as `0xRRGGBB`, so `"FF"` is blue.
pub fn parse_hex_color(text: &str) -> Result<Argb, ColorError> {
    let digits: String = text.chars().filter(|&c| c != '#').collect();

    if digits.is_empty() {
        return Err(ColorError::Empty);
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit(bad));
    }
    if digits.len() > MAX_DIGITS {
        return Err(ColorError::TooLong(digits.len()));
    }

    let value = u32::from_str_radix(&digits, 16).map_err(|_| ColorError::TooLong(digits.len()))?;
    let a = if digits.len() == MAX_DIGITS {
        (value >> 24) as u8
    } else {
        0xff
    };

    Ok(Argb {
        a,
        r: ((value >> 16) & 0xff) as u8,
        g: ((value >> 8) & 0xff) as u8,
        b: (value & 0xff) as u8,
    })
}
