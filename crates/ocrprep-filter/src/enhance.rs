//! Contrast enhancement
//!
//! Linear stretching of a gray range onto the full 0..=255 scale, applied
//! through a 256-entry lookup table.

use crate::FilterResult;
use log::debug;
use ocrprep_core::{GrayImage, GrayImageMut, check_same_size};

/// Build the lookup table mapping `[lo, hi]` linearly onto `[0, 255]`.
///
/// Values at or below `lo` map to 0, values at or above `hi` to 255. When
/// `hi <= lo` the table is the identity.
pub fn stretch_lut(lo: u8, hi: u8) -> [u8; 256] {
    let mut lut = [0u8; 256];
    for (v, out) in lut.iter_mut().enumerate() {
        let v = v as u32;
        *out = if hi <= lo {
            v as u8
        } else if v <= lo as u32 {
            0
        } else if v >= hi as u32 {
            255
        } else {
            ((v - lo as u32) * 255 / (hi - lo) as u32) as u8
        };
    }
    lut
}

/// Stretch the gray range `[lo, hi]` of `src` onto `[0, 255]` in `dst`.
///
/// `hi <= lo` copies `src` unchanged.
///
/// # Errors
///
/// Fails without writing if `src` and `dst` differ in size.
pub fn contrast_stretch(
    src: &GrayImage<'_>,
    dst: &mut GrayImageMut<'_>,
    lo: u8,
    hi: u8,
) -> FilterResult<()> {
    check_same_size(src.dimensions(), dst.dimensions())?;
    let lut = stretch_lut(lo, hi);
    for (o, &v) in dst.as_mut_slice().iter_mut().zip(src.as_slice()) {
        *o = lut[v as usize];
    }
    Ok(())
}

/// Stretch `src` by its own minimum and maximum.
///
/// Returns the `(min, max)` range that was stretched. An empty image
/// returns `(0, 0)` and writes nothing.
pub fn contrast_stretch_auto(
    src: &GrayImage<'_>,
    dst: &mut GrayImageMut<'_>,
) -> FilterResult<(u8, u8)> {
    check_same_size(src.dimensions(), dst.dimensions())?;
    let (lo, hi) = src
        .as_slice()
        .iter()
        .fold(None, |acc: Option<(u8, u8)>, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((0, 0));
    debug!("contrast stretch range [{}, {}]", lo, hi);
    contrast_stretch(src, dst, lo, hi)?;
    Ok((lo, hi))
}
