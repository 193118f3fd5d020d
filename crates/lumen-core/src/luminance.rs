//! Relative luminance under the sRGB gamma model.
//!
//! Implements the WCAG relative-luminance formula: each 8-bit channel is
//! normalized to 0-1, linearized, and the linear channels are combined with
//! the standard sRGB weights.

use crate::color::Rgb;

/// Linear cut-off below which the sRGB transfer function is a straight line.
const LINEAR_CUTOFF: f64 = 0.03928;

/// Linearize one normalized sRGB channel value.
fn partial_luminance(c: f64) -> f64 {
    if c <= LINEAR_CUTOFF {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color, in 0-1.
///
/// Deterministic and infallible: channels are pre-validated 8-bit integers.
/// The 0.2126/0.7152/0.0722 weights are the standard sRGB coefficients.
pub fn relative_luminance(color: Rgb) -> f64 {
    let r = partial_luminance(f64::from(color.r) / 255.0);
    let g = partial_luminance(f64::from(color.g) / 255.0);
    let b = partial_luminance(f64::from(color.b) / 255.0);

    0.2126 * r + 0.7152 * g + 0.0722 * b
}
