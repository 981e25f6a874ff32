//! Local mean (box) filters
//!
//! Each output sample is the truncating average of the source samples in
//! the `(2r+1) x (2r+1)` window centered on it, clipped to the image. Near
//! the borders the clipped window is smaller and the divisor shrinks with
//! it, so a constant image is a fixed point of the filter.
//!
//! Two strategies implement [`BoxFilter`]:
//!
//! - [`NaiveBoxFilter`] recomputes every window sum. O(w·h·r²); kept as the
//!   reference the fast path is tested against.
//! - [`IncrementalBoxFilter`] keeps one running sum per column and slides a
//!   horizontal window over them. O(w·h) for any radius.
//!
//! Both return the truncating global mean of the source, computed during the
//! same scan.

use std::str::FromStr;

use crate::{FilterError, FilterResult};
use log::debug;
use ocrprep_core::{GrayImage, GrayImageMut, check_same_size, try_alloc_zeroed};

/// A local mean filter strategy.
pub trait BoxFilter {
    /// Write the local mean of `src` with window radius `radius` into `dst`
    /// and return the global mean of `src`.
    ///
    /// # Errors
    ///
    /// Fails without writing if `src` and `dst` differ in size, or if a
    /// scratch buffer cannot be allocated.
    fn apply(
        &self,
        src: &GrayImage<'_>,
        dst: &mut GrayImageMut<'_>,
        radius: u32,
    ) -> FilterResult<u8>;
}

/// Reference box filter summing every window from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveBoxFilter;

/// Running-sum box filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncrementalBoxFilter;

/// Selects a [`BoxFilter`] strategy at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxFilterKind {
    /// [`NaiveBoxFilter`]
    Naive,
    /// [`IncrementalBoxFilter`]
    #[default]
    Incremental,
}

impl BoxFilter for BoxFilterKind {
    fn apply(
        &self,
        src: &GrayImage<'_>,
        dst: &mut GrayImageMut<'_>,
        radius: u32,
    ) -> FilterResult<u8> {
        match self {
            BoxFilterKind::Naive => NaiveBoxFilter.apply(src, dst, radius),
            BoxFilterKind::Incremental => IncrementalBoxFilter.apply(src, dst, radius),
        }
    }
}

impl FromStr for BoxFilterKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "naive" => Ok(Self::Naive),
            "incremental" => Ok(Self::Incremental),
            other => Err(FilterError::InvalidParameters(format!(
                "unknown box filter '{}' (expected 'naive' or 'incremental')",
                other
            ))),
        }
    }
}

/// Local mean with the incremental filter.
///
/// # Example
///
/// ```
/// use ocrprep_core::{GrayImage, GrayImageMut};
/// use ocrprep_filter::mean_filter;
///
/// let src = [10u8, 20, 30, 40];
/// let mut out = [0u8; 4];
/// let img = GrayImage::new(&src, 4, 1).unwrap();
/// let mut dst = GrayImageMut::new(&mut out, 4, 1).unwrap();
/// let mean = mean_filter(&img, &mut dst, 1).unwrap();
/// assert_eq!(out, [15, 20, 30, 35]);
/// assert_eq!(mean, 25);
/// ```
pub fn mean_filter(src: &GrayImage<'_>, dst: &mut GrayImageMut<'_>, radius: u32) -> FilterResult<u8> {
    IncrementalBoxFilter.apply(src, dst, radius)
}

/// Local mean with the naive filter.
pub fn mean_filter_naive(
    src: &GrayImage<'_>,
    dst: &mut GrayImageMut<'_>,
    radius: u32,
) -> FilterResult<u8> {
    NaiveBoxFilter.apply(src, dst, radius)
}

fn log_clipping(w: u32, h: u32, radius: u32) {
    if radius >= w || radius >= h {
        debug!(
            "box filter radius {} exceeds {}x{} image; windows clip to the image",
            radius, w, h
        );
    }
}

impl BoxFilter for NaiveBoxFilter {
    fn apply(
        &self,
        src: &GrayImage<'_>,
        dst: &mut GrayImageMut<'_>,
        radius: u32,
    ) -> FilterResult<u8> {
        check_same_size(src.dimensions(), dst.dimensions())?;
        if src.is_empty() {
            return Ok(0);
        }
        let (w, h) = src.dimensions();
        log_clipping(w, h, radius);

        let (w, h, r) = (w as usize, h as usize, radius as usize);
        let data = src.as_slice();
        let out = dst.as_mut_slice();
        let mut total = 0u64;

        for i in 0..h {
            let y0 = i.saturating_sub(r);
            let y1 = i.saturating_add(r).min(h - 1);
            for j in 0..w {
                let x0 = j.saturating_sub(r);
                let x1 = j.saturating_add(r).min(w - 1);
                let mut sum = 0u64;
                for y in y0..=y1 {
                    let row = &data[y * w..(y + 1) * w];
                    sum += row[x0..=x1].iter().map(|&v| v as u64).sum::<u64>();
                }
                let area = ((y1 - y0 + 1) * (x1 - x0 + 1)) as u64;
                out[i * w + j] = (sum / area) as u8;
                total += data[i * w + j] as u64;
            }
        }

        Ok((total / (w * h) as u64) as u8)
    }
}

impl BoxFilter for IncrementalBoxFilter {
    fn apply(
        &self,
        src: &GrayImage<'_>,
        dst: &mut GrayImageMut<'_>,
        radius: u32,
    ) -> FilterResult<u8> {
        check_same_size(src.dimensions(), dst.dimensions())?;
        if src.is_empty() {
            return Ok(0);
        }
        let (w, h) = src.dimensions();
        log_clipping(w, h, radius);

        let (w, h, r) = (w as usize, h as usize, radius as usize);
        let mut col_sum: Vec<u64> = try_alloc_zeroed(w, "column sum")?;
        let mut total = 0u64;

        // Vertical window of row 0: rows 0..=r, clipped.
        for y in 0..=r.min(h - 1) {
            total += add_row(&mut col_sum, src.row(y as u32));
        }

        for i in 0..h {
            if i > 0 {
                let incoming = i.saturating_add(r);
                if incoming < h {
                    total += add_row(&mut col_sum, src.row(incoming as u32));
                }
                if i > r {
                    drop_row(&mut col_sum, src.row((i - r - 1) as u32));
                }
            }
            let y0 = i.saturating_sub(r);
            let y1 = i.saturating_add(r).min(h - 1);
            let rows = (y1 - y0 + 1) as u64;
            slide_row(&col_sum, rows, r, dst.row_mut(i as u32));
        }

        Ok((total / (w * h) as u64) as u8)
    }
}

/// Add a source row to the column sums, returning the row's sum.
fn add_row(col_sum: &mut [u64], row: &[u8]) -> u64 {
    let mut row_total = 0u64;
    for (c, &v) in col_sum.iter_mut().zip(row) {
        *c += v as u64;
        row_total += v as u64;
    }
    row_total
}

fn drop_row(col_sum: &mut [u64], row: &[u8]) {
    for (c, &v) in col_sum.iter_mut().zip(row) {
        *c -= v as u64;
    }
}

/// Slide a horizontal window of radius `r` across the column sums.
///
/// Output column `j` needs column `j + r` added while `j < w - r` and column
/// `j - r - 1` dropped once `j > r`. The row is split on those two limits
/// so that no pass tests either condition per sample:
///
/// 1. growing: add only, `1 <= j < min(add_end, drop_start)`
/// 2. interior: add and drop with a constant area, or, when the window is
///    wider than the row, neither
/// 3. shrinking: drop only, up to `w`
fn slide_row(col_sum: &[u64], rows: u64, r: usize, out: &mut [u8]) {
    let w = col_sum.len();
    let first = r.min(w - 1);
    let mut sum: u64 = col_sum[..=first].iter().sum();
    let mut cols = (first + 1) as u64;
    out[0] = (sum / (cols * rows)) as u8;

    let add_end = w.saturating_sub(r);
    let drop_start = r.saturating_add(1);
    let grow_end = add_end.min(drop_start).max(1);

    for j in 1..grow_end {
        sum += col_sum[j + r];
        cols += 1;
        out[j] = (sum / (cols * rows)) as u8;
    }

    if add_end > drop_start {
        let area = cols * rows;
        let incoming = &col_sum[drop_start + r..];
        let outgoing = &col_sum[..add_end - drop_start];
        for ((o, &inc), &outg) in out[drop_start..add_end]
            .iter_mut()
            .zip(incoming)
            .zip(outgoing)
        {
            sum = sum + inc - outg;
            *o = (sum / area) as u8;
        }
    } else {
        let value = (sum / (cols * rows)) as u8;
        let stop = drop_start.min(w);
        if grow_end < stop {
            out[grow_end..stop].fill(value);
        }
    }

    for j in add_end.max(drop_start)..w {
        sum -= col_sum[j - r - 1];
        cols -= 1;
        out[j] = (sum / (cols * rows)) as u8;
    }
}
