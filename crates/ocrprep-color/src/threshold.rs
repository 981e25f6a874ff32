//! Adaptive thresholding against a local reference
//!
//! A sample becomes `hi` when it lies less than `bias` above its reference
//! (usually the local mean from a box filter) and `lo` otherwise:
//!
//! ```text
//! dst = if (src - reference) < bias { hi } else { lo }
//! ```
//!
//! The difference is signed and nothing is clamped, so a negative bias is
//! meaningful.

use crate::ColorResult;
use ocrprep_core::{GrayImage, GrayImageMut, check_same_size};

/// Output levels and bias for [`adaptive_threshold`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdaptiveThresholdOptions {
    /// Value written where `src - reference < bias`
    pub hi: u8,
    /// Value written elsewhere
    pub lo: u8,
    /// Signed offset compared against `src - reference`
    pub bias: i32,
}

impl Default for AdaptiveThresholdOptions {
    fn default() -> Self {
        Self {
            hi: 255,
            lo: 0,
            bias: 0,
        }
    }
}

impl AdaptiveThresholdOptions {
    /// Levels for dark text on a light background: `hi = 255`, `lo = 0`.
    pub fn dark_text(bias: i32) -> Self {
        Self {
            hi: 255,
            lo: 0,
            bias,
        }
    }

    /// Levels for light text on a dark background: `hi = 0`, `lo = 255`.
    pub fn light_text(bias: i32) -> Self {
        Self {
            hi: 0,
            lo: 255,
            bias,
        }
    }

    #[inline]
    fn classify(&self, v: u8, reference: u8) -> u8 {
        if (v as i32 - reference as i32) < self.bias {
            self.hi
        } else {
            self.lo
        }
    }
}

/// Binarize `src` against `reference` into `dst`.
///
/// # Errors
///
/// Fails without writing unless all three images share dimensions.
pub fn adaptive_threshold(
    src: &GrayImage<'_>,
    reference: &GrayImage<'_>,
    dst: &mut GrayImageMut<'_>,
    options: &AdaptiveThresholdOptions,
) -> ColorResult<()> {
    check_same_size(src.dimensions(), reference.dimensions())?;
    check_same_size(src.dimensions(), dst.dimensions())?;
    for ((o, &v), &r) in dst
        .as_mut_slice()
        .iter_mut()
        .zip(src.as_slice())
        .zip(reference.as_slice())
    {
        *o = options.classify(v, r);
    }
    Ok(())
}

/// Binarize `image` against `reference`, overwriting `image`.
///
/// Each sample is read before it is replaced.
pub fn adaptive_threshold_in_place(
    image: &mut GrayImageMut<'_>,
    reference: &GrayImage<'_>,
    options: &AdaptiveThresholdOptions,
) -> ColorResult<()> {
    check_same_size(image.dimensions(), reference.dimensions())?;
    for (v, &r) in image.as_mut_slice().iter_mut().zip(reference.as_slice()) {
        *v = options.classify(*v, r);
    }
    Ok(())
}
