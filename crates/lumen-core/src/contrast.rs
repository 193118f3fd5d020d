//! WCAG contrast ratios and conformance grading.

use serde::Serialize;
use tracing::debug;

use crate::color::Rgb;
use crate::luminance::relative_luminance;

/// WCAG 2.1 minimum ratio for AA conformance, normal text.
pub const AA_NORMAL: f64 = 4.5;
/// WCAG 2.1 minimum ratio for AA conformance, large text.
pub const AA_LARGE: f64 = 3.0;
/// WCAG 2.1 minimum ratio for AAA conformance, normal text.
pub const AAA_NORMAL: f64 = 7.0;
/// WCAG 2.1 minimum ratio for AAA conformance, large text.
pub const AAA_LARGE: f64 = 4.5;

/// Contrast ratio between two relative luminances.
///
/// Each luminance is offset by 0.05 (modelling ambient light, and keeping
/// the division away from zero), then the larger is divided by the smaller.
/// The result is in 1-21 and symmetric in its arguments.
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let lighter = l1.max(l2) + 0.05;
    let darker = l1.min(l2) + 0.05;
    lighter / darker
}

/// Contrast ratio between two colors.
pub fn contrast(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    debug!(color_a = %a, luminance_a = la, color_b = %b, luminance_b = lb, "computed luminances");
    contrast_ratio(la, lb)
}

/// Pass/fail of the WCAG 2.1 conformance thresholds for one ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grade {
    /// AA, normal text (4.5:1).
    pub aa: bool,
    /// AA, large text (3:1).
    pub aa_large: bool,
    /// AAA, normal text (7:1).
    pub aaa: bool,
    /// AAA, large text (4.5:1).
    pub aaa_large: bool,
}

impl Grade {
    /// Evaluate a contrast ratio against all four thresholds.
    pub fn evaluate(ratio: f64) -> Self {
        Self {
            aa: ratio >= AA_NORMAL,
            aa_large: ratio >= AA_LARGE,
            aaa: ratio >= AAA_NORMAL,
            aaa_large: ratio >= AAA_LARGE,
        }
    }
}
