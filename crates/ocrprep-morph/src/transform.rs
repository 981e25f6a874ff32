//! Generic structuring-element transform
//!
//! Every output pixel is the reduction (minimum for erosion, maximum for
//! dilation) of the source samples at `(x + dx, y + dy)` over the element's
//! offsets. Offsets landing outside the image are skipped; a pixel with no
//! in-image offset keeps the reducer's seed.
//!
//! # Regions
//!
//! With bounding box `[min_x, max_x] x [min_y, max_y]` the image splits
//! into five disjoint regions:
//!
//! ```text
//! +---------------------------+  rows [0, -min_y)
//! |            top            |
//! +------+-------------+------+
//! | left |  interior   | right|  rows [-min_y, h - max_y)
//! +------+-------------+------+
//! |          bottom           |  rows [h - max_y, h)
//! +---------------------------+
//! ```
//!
//! The four strips check every offset against the image bounds. Interior
//! pixels have their whole neighborhood inside the image and add
//! pre-flattened offsets to the linear index instead. Region limits are
//! clamped so the strips never overlap, also when the element is larger
//! than the image.

use crate::MorphResult;
use crate::sel::StructuringElement;
use log::trace;
use ocrprep_core::{GrayImage, GrayImageMut, check_same_size};

/// A reduction strategy for [`structural_transform`].
pub trait Reducer {
    /// Identity of [`Reducer::reduce`]; the value of a pixel with no
    /// in-image neighbor.
    const SEED: u8;

    /// Combine the running value with one neighbor sample.
    fn reduce(acc: u8, v: u8) -> u8;
}

/// Minimum reducer (erosion)
#[derive(Debug, Clone, Copy)]
pub struct Min;

/// Maximum reducer (dilation)
#[derive(Debug, Clone, Copy)]
pub struct Max;

impl Reducer for Min {
    const SEED: u8 = u8::MAX;

    #[inline]
    fn reduce(acc: u8, v: u8) -> u8 {
        acc.min(v)
    }
}

impl Reducer for Max {
    const SEED: u8 = u8::MIN;

    #[inline]
    fn reduce(acc: u8, v: u8) -> u8 {
        acc.max(v)
    }
}

/// Row and column limits of the border strips and the interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Regions {
    top_end: usize,
    bottom_start: usize,
    left_end: usize,
    right_start: usize,
}

impl Regions {
    fn new(sel: &StructuringElement, w: usize, h: usize) -> Self {
        let b = sel.bounds();
        let clamp = |v: i64, hi: usize| v.clamp(0, hi as i64) as usize;
        let top_end = clamp(-(b.min_y as i64), h);
        let bottom_start = clamp(h as i64 - b.max_y as i64, h).max(top_end);
        let left_end = clamp(-(b.min_x as i64), w);
        let right_start = clamp(w as i64 - b.max_x as i64, w).max(left_end);
        Self {
            top_end,
            bottom_start,
            left_end,
            right_start,
        }
    }

    fn has_interior(&self) -> bool {
        self.top_end < self.bottom_start && self.left_end < self.right_start
    }
}

/// Reduce one pixel, checking every offset against the image bounds.
fn border_pixel<R: Reducer>(
    data: &[u8],
    w: usize,
    h: usize,
    sel: &StructuringElement,
    x: usize,
    y: usize,
) -> u8 {
    let mut acc = R::SEED;
    for (dx, dy) in sel.offsets() {
        let sx = x as i64 + dx as i64;
        let sy = y as i64 + dy as i64;
        if sx >= 0 && sy >= 0 && (sx as usize) < w && (sy as usize) < h {
            acc = R::reduce(acc, data[sy as usize * w + sx as usize]);
        }
    }
    acc
}

fn border_span<R: Reducer>(
    data: &[u8],
    out: &mut [u8],
    w: usize,
    h: usize,
    sel: &StructuringElement,
    y: usize,
    cols: std::ops::Range<usize>,
) {
    for x in cols {
        out[y * w + x] = border_pixel::<R>(data, w, h, sel, x, y);
    }
}

/// Apply the reducer `R` over `sel` to `src`, writing into `dst`.
///
/// # Errors
///
/// Fails without writing if `src` and `dst` differ in size.
pub fn structural_transform<R: Reducer>(
    src: &GrayImage<'_>,
    dst: &mut GrayImageMut<'_>,
    sel: &StructuringElement,
) -> MorphResult<()> {
    check_same_size(src.dimensions(), dst.dimensions())?;
    if src.is_empty() {
        return Ok(());
    }
    let (w, h) = (src.width() as usize, src.height() as usize);
    let regions = Regions::new(sel, w, h);
    trace!(
        "structural transform {}x{}, {} offsets: rows [0,{}) [{},{}) cols [0,{}) [{},{})",
        w,
        h,
        sel.len(),
        regions.top_end,
        regions.bottom_start,
        h,
        regions.left_end,
        regions.right_start,
        w
    );

    let data = src.as_slice();
    let out = dst.as_mut_slice();

    for y in (0..regions.top_end).chain(regions.bottom_start..h) {
        border_span::<R>(data, out, w, h, sel, y, 0..w);
    }
    for y in regions.top_end..regions.bottom_start {
        border_span::<R>(data, out, w, h, sel, y, 0..regions.left_end);
        border_span::<R>(data, out, w, h, sel, y, regions.right_start..w);
    }

    if regions.has_interior() {
        let linear = sel.linear_offsets(w as u32);
        for y in regions.top_end..regions.bottom_start {
            let base = y * w;
            for x in regions.left_end..regions.right_start {
                let center = (base + x) as i64;
                out[base + x] = linear
                    .iter()
                    .fold(R::SEED, |acc, &o| R::reduce(acc, data[(center + o) as usize]));
            }
        }
    }
    Ok(())
}
