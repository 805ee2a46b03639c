// Copyright 2026 the circle-points Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display colors.

use core::fmt;
use core::str::FromStr;

/// An opaque 8-bit sRGB color.
///
/// Parses from and prints as the `#rrggbb` notation used by HTML color
/// pickers.
///
/// ```
/// use circle_points::Color;
///
/// let c: Color = "#FF8000".parse().unwrap();
/// assert_eq!(c, Color::rgb8(255, 128, 0));
/// assert_eq!(c.to_string(), "#ff8000");
/// assert_eq!("#f80".parse::<Color>().unwrap(), Color::rgb8(0xff, 0x88, 0x00));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Pure red, the default point color.
    pub const RED: Color = Color::rgb8(0xff, 0x00, 0x00);
    /// Pure blue.
    pub const BLUE: Color = Color::rgb8(0x00, 0x00, 0xff);
    /// Mid gray.
    pub const GRAY: Color = Color::rgb8(0x80, 0x80, 0x80);
    /// Black.
    pub const BLACK: Color = Color::rgb8(0x00, 0x00, 0x00);
    /// White.
    pub const WHITE: Color = Color::rgb8(0xff, 0xff, 0xff);

    /// A color from its three channels.
    #[inline]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb`, with hex digits in either case.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] if the `#` is missing, a character is not
    /// a hex digit, or the digit count is neither 3 nor 6.
    pub fn from_hex(s: &str) -> Result<Color, ColorParseError> {
        let digits = s.strip_prefix('#').ok_or(ColorParseError::MissingHash)?;
        let mut values = [0_u8; 6];
        let mut len = 0;
        for c in digits.chars() {
            let v = c.to_digit(16).ok_or(ColorParseError::BadDigit(c))?;
            if len == values.len() {
                return Err(ColorParseError::BadLength(digits.chars().count()));
            }
            values[len] = v as u8;
            len += 1;
        }
        match len {
            3 => Ok(Color::rgb8(
                values[0] * 0x11,
                values[1] * 0x11,
                values[2] * 0x11,
            )),
            6 => Ok(Color::rgb8(
                (values[0] << 4) | values[1],
                (values[2] << 4) | values[3],
                (values[4] << 4) | values[5],
            )),
            _ => Err(ColorParseError::BadLength(len)),
        }
    }
}

impl Default for Color {
    fn default() -> Color {
        Color::RED
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Color, ColorParseError> {
        Color::from_hex(s.trim())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// An error which can be returned when parsing a [`Color`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorParseError {
    /// The text did not start with `#`.
    MissingHash,
    /// The number of hex digits was neither 3 nor 6.
    BadLength(usize),
    /// Encountered a character that is not a hex digit.
    BadDigit(char),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::MissingHash => write!(f, "Color must start with \"#\""),
            ColorParseError::BadLength(n) => {
                write!(f, "Expected 3 or 6 hex digits, found {n}")
            }
            ColorParseError::BadDigit(c) => write!(f, "Not a hex digit, \"{c}\""),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ColorParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_long_and_short() {
        assert_eq!(Color::from_hex("#ff0000"), Ok(Color::RED));
        assert_eq!(Color::from_hex("#00F"), Ok(Color::BLUE));
        assert_eq!(" #808080 ".parse::<Color>(), Ok(Color::GRAY));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Color::from_hex("ff0000"),
            Err(ColorParseError::MissingHash)
        );
        assert_eq!(
            Color::from_hex("#ff00"),
            Err(ColorParseError::BadLength(4))
        );
        assert_eq!(
            Color::from_hex("#ff00000"),
            Err(ColorParseError::BadLength(7))
        );
        assert_eq!(
            Color::from_hex("#gg0000"),
            Err(ColorParseError::BadDigit('g'))
        );
        assert_eq!(Color::from_hex("#"), Err(ColorParseError::BadLength(0)));
    }

    #[test]
    fn display_round_trips_through_lowercase() {
        assert_eq!(Color::rgb8(1, 0xab, 0xcd).to_string(), "#01abcd");
        assert_eq!(Color::default().to_string(), "#ff0000");
    }
}
