//! Word extent search
//!
//! Starting from a seed rectangle inside a binarized crop, grow the
//! rectangle one pixel at a time on each side whose adjacent one-pixel
//! strip contains an ink sample. Growth stops when no side can move.

use crate::{BinarizeOptions, BinarizeOutcome, RecogResult, binarize_word};
use log::debug;
use ocrprep_core::{GrayImage, GrayImageMut, Rect};

/// True if any sample of `image` in columns `[x0, x1)` of rows `[y0, y1)`
/// equals `ink`.
fn strip_has_ink(image: &GrayImage<'_>, x0: i32, x1: i32, y0: i32, y1: i32, ink: u8) -> bool {
    (y0..y1).any(|y| image.row(y as u32)[x0 as usize..x1 as usize].contains(&ink))
}

/// Grow `seed` over the connected `ink` around it.
///
/// Sides are tried in the order top, bottom, left, right within each pass;
/// a side moves when the strip just outside it, spanning the current
/// extent, lies in the image and contains `ink`.
///
/// # Errors
///
/// [`ocrprep_core::Error::RoiOutOfBounds`] if `seed` is not inside the
/// image.
pub fn find_word_extent(binary: &GrayImage<'_>, seed: &Rect, ink: u8) -> RecogResult<Rect> {
    let (iw, ih) = binary.dimensions();
    seed.check_inside(iw, ih)?;
    let (iw, ih) = (iw as i32, ih as i32);
    let (mut left, mut top, mut right, mut bottom) = (seed.x, seed.y, seed.right(), seed.bottom());

    let mut passes = 0u32;
    loop {
        let mut extended = false;
        if top > 0 && strip_has_ink(binary, left, right, top - 1, top, ink) {
            top -= 1;
            extended = true;
        }
        if bottom < ih && strip_has_ink(binary, left, right, bottom, bottom + 1, ink) {
            bottom += 1;
            extended = true;
        }
        if left > 0 && strip_has_ink(binary, left - 1, left, top, bottom, ink) {
            left -= 1;
            extended = true;
        }
        if right < iw && strip_has_ink(binary, right, right + 1, top, bottom, ink) {
            right += 1;
            extended = true;
        }
        if !extended {
            break;
        }
        passes += 1;
    }

    let extent = Rect::from_edges(left, top, right, bottom)?;
    debug!("word extent {:?} -> {:?} after {} passes", seed, extent, passes);
    Ok(extent)
}

/// Binarize `src` into `dst` and grow `seed` over the resulting ink (0).
pub fn locate_word(
    src: &GrayImage<'_>,
    dst: &mut GrayImageMut<'_>,
    seed: &Rect,
    options: &BinarizeOptions,
) -> RecogResult<(Rect, BinarizeOutcome)> {
    let (w, h) = src.dimensions();
    seed.check_inside(w, h)?;
    let outcome = binarize_word(src, dst, options)?;
    let extent = find_word_extent(&dst.as_image(), seed, 0)?;
    Ok((extent, outcome))
}
