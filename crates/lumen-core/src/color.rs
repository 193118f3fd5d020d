//! Color token parsing.
//!
//! Accepts two token forms, each with an optional `#` or `0x` prefix:
//! - 6-digit hex: `RRGGBB`
//! - decimal triplet: `R,G,B` with each channel an integer 0-255
//!
//! 3-digit hex shorthand is not expanded and whitespace is not trimmed;
//! both are rejected.

use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, Result};

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from three 8-bit channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a color token into an `Rgb`.
    ///
    /// Strips one optional leading `#` or `0x`, then treats the token as a
    /// decimal triplet if splitting on `,` yields exactly 3 parts, or as hex
    /// if exactly 6 characters remain. Anything else is rejected.
    pub fn parse(token: &str) -> Result<Self> {
        let stripped = token
            .strip_prefix('#')
            .or_else(|| token.strip_prefix("0x"))
            .unwrap_or(token);

        let parts: Vec<&str> = stripped.split(',').collect();
        if parts.len() == 3 {
            return Self::parse_decimal(token, &parts);
        }

        let chars: Vec<char> = stripped.chars().collect();
        if chars.len() == 6 {
            return Self::parse_hex(token, &chars);
        }

        Err(ColorError::InvalidFormat { token: token.to_string() })
    }

    /// Parse the decimal `R,G,B` form.
    ///
    /// `u8::from_str` covers both failure modes the same way: a non-integer
    /// part and an integer outside 0-255 both fail to parse.
    fn parse_decimal(token: &str, parts: &[&str]) -> Result<Self> {
        let channel = |part: &str| -> Result<u8> {
            part.parse::<u8>().map_err(|_| ColorError::InvalidRgbValue {
                token: token.to_string(),
                part: part.to_string(),
            })
        };

        Ok(Self::new(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?))
    }

    /// Parse the 6-digit hex form from character pairs at offsets 0, 2, 4.
    ///
    /// Two hex digits always land in 0-255, so no range check is needed.
    fn parse_hex(token: &str, chars: &[char]) -> Result<Self> {
        let channel = |pair: &[char]| -> Result<u8> {
            let digits: String = pair.iter().collect();
            u8::from_str_radix(&digits, 16).map_err(|_| ColorError::InvalidHexValue {
                token: token.to_string(),
                digits,
            })
        };

        Ok(Self::new(channel(&chars[0..2])?, channel(&chars[2..4])?, channel(&chars[4..6])?))
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgb::parse("FF0080").unwrap(), Rgb::new(255, 0, 128));
    }

    #[test]
    fn test_parse_hex_lowercase() {
        assert_eq!(Rgb::parse("ff0080").unwrap(), Rgb::new(255, 0, 128));
    }

    #[test]
    fn test_parse_hash_prefix() {
        assert_eq!(Rgb::parse("#FF0080").unwrap(), Rgb::new(255, 0, 128));
    }

    #[test]
    fn test_parse_0x_prefix() {
        assert_eq!(Rgb::parse("0xFF0080").unwrap(), Rgb::new(255, 0, 128));
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(Rgb::parse("255,0,128").unwrap(), Rgb::new(255, 0, 128));
    }

    #[test]
    fn test_decimal_out_of_range() {
        let err = Rgb::parse("256,0,0").unwrap_err();
        assert!(matches!(err, ColorError::InvalidRgbValue { .. }));
    }

    #[test]
    fn test_decimal_negative() {
        let err = Rgb::parse("-1,0,0").unwrap_err();
        assert!(matches!(err, ColorError::InvalidRgbValue { .. }));
    }

    #[test]
    fn test_decimal_non_integer() {
        let err = Rgb::parse("12,abc,34").unwrap_err();
        assert!(matches!(err, ColorError::InvalidRgbValue { .. }));
    }

    #[test]
    fn test_non_hex_digits() {
        let err = Rgb::parse("GG0080").unwrap_err();
        assert!(matches!(err, ColorError::InvalidHexValue { .. }));
    }

    #[test]
    fn test_wrong_length_rejected() {
        let err = Rgb::parse("12345").unwrap_err();
        assert!(matches!(err, ColorError::InvalidFormat { .. }));
    }

    #[test]
    fn test_two_part_decimal_rejected() {
        let err = Rgb::parse("1,2").unwrap_err();
        assert!(matches!(err, ColorError::InvalidFormat { .. }));
    }

    #[test]
    fn test_shorthand_hex_rejected() {
        // 3-digit shorthand is deliberately not expanded
        let err = Rgb::parse("#F08").unwrap_err();
        assert!(matches!(err, ColorError::InvalidFormat { .. }));
    }

    #[test]
    fn test_whitespace_not_trimmed() {
        let err = Rgb::parse(" 255,0,128").unwrap_err();
        assert!(matches!(err, ColorError::InvalidRgbValue { .. }));
    }

    #[test]
    fn test_error_message_names_original_token() {
        let err = Rgb::parse("#F08").unwrap_err();
        assert!(err.to_string().contains("#F08"));
    }

    #[test]
    fn test_from_str() {
        let color: Rgb = "10,20,30".parse().unwrap();
        assert_eq!(color, Rgb::new(10, 20, 30));
    }

    #[test]
    fn test_display_round_trip() {
        let color = Rgb::new(255, 0, 128);
        assert_eq!(color.to_string(), "#FF0080");
        assert_eq!(Rgb::parse(&color.to_string()).unwrap(), color);
    }
}
