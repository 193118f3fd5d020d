//! Lumen Core - WCAG contrast computation.
//!
//! This crate provides the core functionality for Lumen, including:
//! - Color token parsing (hex and decimal RGB forms)
//! - Relative luminance under the sRGB gamma model
//! - WCAG 2.1 contrast ratios and conformance grading
//!
//! # Example
//!
//! ```rust
//! use lumen_core::{Rgb, contrast};
//!
//! fn main() -> lumen_core::error::Result<()> {
//!     let fg = Rgb::parse("#1e293b")?;
//!     let bg = Rgb::parse("255,255,255")?;
//!     println!("{:.2}:1", contrast(fg, bg));
//!     Ok(())
//! }
//! ```

pub mod color;
pub mod contrast;
pub mod error;
pub mod luminance;

pub use color::Rgb;
pub use contrast::{Grade, contrast, contrast_ratio};
pub use error::{ColorError, Result};
pub use luminance::relative_luminance;
