use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("Colour \"{0}\" must start with '#'")]
    MissingHash(String),

    #[error("Colour \"{0}\" must have 3 or 6 hex digits")]
    BadLength(String),

    #[error("Unexpected character '{0}' in colour, expected a hex digit")]
    NotHex(char),
}

/// An opaque RGB colour, written as `#rgb` or `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Same as `rgb` but for the shorthand `#rgb` notation, where each digit is doubled
    const fn short(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r * 0x11, g * 0x11, b * 0x11)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(hex) = s.trim().strip_prefix('#') else {
            return Err(ColorError::MissingHash(s.to_string()));
        };

        let digits = hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8).ok_or(ColorError::NotHex(c)))
            .collect::<Result<Vec<u8>, _>>()?;

        match digits[..] {
            [r, g, b] => Ok(Color::short(r, g, b)),
            [r1, r0, g1, g0, b1, b0] => Ok(Color::rgb(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0)),
            _ => Err(ColorError::BadLength(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Color> for crossterm::style::Color {
    fn from(c: Color) -> Self {
        crossterm::style::Color::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}
