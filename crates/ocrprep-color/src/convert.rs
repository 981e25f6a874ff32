//! Region-of-interest conversion from gray samples to ARGB words
//!
//! Each sample `g` becomes the opaque word `0xFF000000 | g<<16 | g<<8 | g`,
//! written row-major into a caller-supplied `u32` buffer of at least
//! `roi.w * roi.h` words.
//!
//! The region must start inside the image and end strictly before its
//! right and bottom edges: `x + w < width` and `y + h < height`. A region
//! touching the last column or row is rejected.

use crate::ColorResult;
use log::debug;
use ocrprep_core::argb::gray_to_argb as pack;
use ocrprep_core::{Error, GrayImage, Rect, try_alloc_zeroed};

fn check_roi(src: &GrayImage<'_>, roi: &Rect) -> ColorResult<usize> {
    let (iw, ih) = src.dimensions();
    let right = roi.x as i64 + roi.w as i64;
    let bottom = roi.y as i64 + roi.h as i64;
    if roi.x < 0
        || roi.y < 0
        || roi.w < 0
        || roi.h < 0
        || right >= iw as i64
        || bottom >= ih as i64
    {
        debug!(
            "rejecting ROI ({}, {}, {}, {}) for {}x{} image",
            roi.x, roi.y, roi.w, roi.h, iw, ih
        );
        return Err(roi.out_of_bounds(iw, ih).into());
    }
    Ok(roi.w as usize * roi.h as usize)
}

/// Convert the region `roi` of `src` into opaque ARGB words in `dst`.
///
/// # Errors
///
/// [`Error::RoiOutOfBounds`] if the region violates the bounds above,
/// [`Error::BufferTooShort`] if `dst` holds fewer than `roi.w * roi.h`
/// words. Nothing is written on error.
pub fn gray_to_argb(src: &GrayImage<'_>, roi: &Rect, dst: &mut [u32]) -> ColorResult<()> {
    let required = check_roi(src, roi)?;
    if dst.len() < required {
        return Err(Error::BufferTooShort {
            name: "output",
            len: dst.len(),
            required,
        }
        .into());
    }
    if required == 0 {
        return Ok(());
    }
    let (x0, w) = (roi.x as usize, roi.w as usize);
    for (r, out_row) in dst[..required].chunks_exact_mut(w).enumerate() {
        let row = src.row((roi.y as usize + r) as u32);
        for (o, &g) in out_row.iter_mut().zip(&row[x0..x0 + w]) {
            *o = pack(g);
        }
    }
    Ok(())
}

/// Like [`gray_to_argb`], allocating the output buffer.
pub fn gray_to_argb_vec(src: &GrayImage<'_>, roi: &Rect) -> ColorResult<Vec<u32>> {
    let required = check_roi(src, roi)?;
    let mut out: Vec<u32> = try_alloc_zeroed(required, "ARGB output")?;
    gray_to_argb(src, roi, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorError;

    #[test]
    fn test_single_pixel() {
        let src = [128u8, 0, 0, 0];
        let img = GrayImage::new(&src, 2, 2).unwrap();
        let mut out = [0u32; 1];
        gray_to_argb(&img, &Rect::new(0, 0, 1, 1).unwrap(), &mut out).unwrap();
        assert_eq!(out, [0xFF80_8080]);
    }

    #[test]
    fn test_region_rows() {
        let src: Vec<u8> = (0..16).collect();
        let img = GrayImage::new(&src, 4, 4).unwrap();
        let out = gray_to_argb_vec(&img, &Rect::new(1, 1, 2, 2).unwrap()).unwrap();
        assert_eq!(out, vec![0xFF05_0505, 0xFF06_0606, 0xFF09_0909, 0xFF0A_0A0A]);
    }

    #[test]
    fn test_edge_is_exclusive() {
        let src = [7u8; 9];
        let img = GrayImage::new(&src, 3, 3).unwrap();
        let mut out = [0u32; 9];
        let err = gray_to_argb(&img, &Rect::new(0, 0, 3, 1).unwrap(), &mut out).unwrap_err();
        assert!(matches!(err, ColorError::Core(Error::RoiOutOfBounds { .. })));
        assert!(gray_to_argb(&img, &Rect::new(0, 0, 2, 2).unwrap(), &mut out).is_ok());
        assert!(gray_to_argb(&img, &Rect::new_unchecked(0, 0, -1, 1), &mut out).is_err());
        assert!(gray_to_argb(&img, &Rect::new(-1, 0, 1, 1).unwrap(), &mut out).is_err());
    }

    #[test]
    fn test_short_output_writes_nothing() {
        let src = [7u8; 9];
        let img = GrayImage::new(&src, 3, 3).unwrap();
        let mut out = [1u32; 3];
        let err = gray_to_argb(&img, &Rect::new(0, 0, 2, 2).unwrap(), &mut out).unwrap_err();
        assert!(matches!(err, ColorError::Core(Error::BufferTooShort { .. })));
        assert_eq!(out, [1u32; 3]);
    }

    #[test]
    fn test_empty_region() {
        let src = [7u8; 9];
        let img = GrayImage::new(&src, 3, 3).unwrap();
        let mut out: [u32; 0] = [];
        assert!(gray_to_argb(&img, &Rect::new(1, 1, 0, 1).unwrap(), &mut out).is_ok());
    }
}
