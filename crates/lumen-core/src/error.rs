//! Error types for color token parsing.

use thiserror::Error;

/// Errors that can occur while parsing a color token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Token is neither a 3-part decimal triplet nor a 6-character hex
    /// string after optional prefix stripping.
    #[error("Invalid color format: '{token}' (expected RRGGBB or R,G,B)")]
    InvalidFormat {
        /// The original, unstripped token.
        token: String,
    },

    /// A decimal channel failed integer parsing or fell outside 0-255.
    #[error("Invalid RGB value '{part}' in '{token}' (each channel must be an integer 0-255)")]
    InvalidRgbValue {
        /// The original, unstripped token.
        token: String,
        /// The offending comma-separated part.
        part: String,
    },

    /// A 2-character hex substring failed base-16 parsing.
    #[error("Invalid hex value '{digits}' in '{token}'")]
    InvalidHexValue {
        /// The original, unstripped token.
        token: String,
        /// The offending 2-character substring.
        digits: String,
    },
}

/// Result type for color parsing operations.
pub type Result<T> = std::result::Result<T, ColorError>;
