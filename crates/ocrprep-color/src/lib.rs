//! ocrprep-color - Binarization and display conversion
//!
//! This crate provides:
//!
//! - Adaptive thresholding of a gray image against a local reference
//!   (typically the output of an ocrprep box filter)
//! - Conversion of a gray region of interest into opaque ARGB words for
//!   display surfaces

pub mod convert;
mod error;
pub mod threshold;

pub use error::{ColorError, ColorResult};

pub use convert::{gray_to_argb, gray_to_argb_vec};
pub use threshold::{AdaptiveThresholdOptions, adaptive_threshold, adaptive_threshold_in_place};
