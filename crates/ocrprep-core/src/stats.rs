//! Sample statistics over whole images and rectangular regions
//!
//! The global [`mean`] matches the value the box filters return. The
//! `*_in_rect` functions take an optional [`Rect`]; `None` selects the
//! whole image.

use crate::error::{Error, Result};
use crate::gray::GrayImage;
use crate::rect::Rect;

/// Truncating mean of all samples.
///
/// Returns 0 for an empty image.
pub fn mean(image: &GrayImage<'_>) -> u8 {
    let n = image.len() as u64;
    if n == 0 {
        return 0;
    }
    let sum: u64 = image.as_slice().iter().map(|&v| v as u64).sum();
    (sum / n) as u8
}

/// Resolve an optional region against the image and iterate its rows.
fn region_rows<'a>(
    image: &GrayImage<'a>,
    rect: Option<&Rect>,
) -> Result<impl Iterator<Item = &'a [u8]> + 'a> {
    let r = match rect {
        Some(r) => {
            r.check_inside(image.width(), image.height())?;
            *r
        }
        None => Rect::full(image.width(), image.height()),
    };
    if r.is_empty() {
        return Err(Error::InvalidParameter(format!(
            "empty region ({}, {}, {}, {})",
            r.x, r.y, r.w, r.h
        )));
    }
    let img = *image;
    let (x0, x1) = (r.x as usize, r.right() as usize);
    Ok((r.y as u32..r.bottom() as u32).map(move |y| &img.row(y)[x0..x1]))
}

/// Minimum sample in the region.
///
/// # Errors
///
/// [`Error::RoiOutOfBounds`] if the region leaves the image,
/// [`Error::InvalidParameter`] if it is empty.
pub fn min_in_rect(image: &GrayImage<'_>, rect: Option<&Rect>) -> Result<u8> {
    let mut min = u8::MAX;
    for row in region_rows(image, rect)? {
        for &v in row {
            min = min.min(v);
        }
    }
    Ok(min)
}

/// Maximum sample in the region.
pub fn max_in_rect(image: &GrayImage<'_>, rect: Option<&Rect>) -> Result<u8> {
    let mut max = u8::MIN;
    for row in region_rows(image, rect)? {
        for &v in row {
            max = max.max(v);
        }
    }
    Ok(max)
}

/// Floating-point mean of the region.
pub fn mean_in_rect(image: &GrayImage<'_>, rect: Option<&Rect>) -> Result<f32> {
    let mut sum = 0u64;
    let mut n = 0u64;
    for row in region_rows(image, rect)? {
        sum += row.iter().map(|&v| v as u64).sum::<u64>();
        n += row.len() as u64;
    }
    Ok((sum as f64 / n as f64) as f32)
}

/// Population variance of the region.
pub fn variance_in_rect(image: &GrayImage<'_>, rect: Option<&Rect>) -> Result<f32> {
    let mut sum = 0u64;
    let mut sum_sq = 0u64;
    let mut n = 0u64;
    for row in region_rows(image, rect)? {
        for &v in row {
            let v = v as u64;
            sum += v;
            sum_sq += v * v;
        }
        n += row.len() as u64;
    }
    let n = n as f64;
    let mean = sum as f64 / n;
    let var = sum_sq as f64 / n - mean * mean;
    Ok(var.max(0.0) as f32)
}

/// 256-bin histogram of the region.
pub fn histogram_in_rect(image: &GrayImage<'_>, rect: Option<&Rect>) -> Result<[u32; 256]> {
    let mut hist = [0u32; 256];
    for row in region_rows(image, rect)? {
        for &v in row {
            hist[v as usize] += 1;
        }
    }
    Ok(hist)
}
