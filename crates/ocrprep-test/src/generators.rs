//! Deterministic synthetic test images
//!
//! Every generator returns a row-major `width * height` sample vector.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random samples from a seeded generator.
pub fn random_image(width: u32, height: u32, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..width as usize * height as usize)
        .map(|_| rng.random())
        .collect()
}

/// Random samples restricted to `[lo, hi]`.
pub fn random_image_in(width: u32, height: u32, lo: u8, hi: u8, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..width as usize * height as usize)
        .map(|_| rng.random_range(lo..=hi))
        .collect()
}

/// Every sample set to `value`.
pub fn constant(width: u32, height: u32, value: u8) -> Vec<u8> {
    vec![value; width as usize * height as usize]
}

/// Horizontal ramp from 0 at the left edge to 255 at the right edge.
pub fn gradient(width: u32, height: u32) -> Vec<u8> {
    let span = width.saturating_sub(1).max(1) as u64;
    let row: Vec<u8> = (0..width as u64).map(|x| (x * 255 / span) as u8).collect();
    row.iter()
        .copied()
        .cycle()
        .take(width as usize * height as usize)
        .collect()
}

/// A connected, word-like block of `ink` strokes on `paper`.
///
/// The strokes fill the band of columns `[width/4, 3*width/4)` and rows
/// `[height/3, 2*height/3)`: a rail along the top and bottom rows of the
/// band joined by two-pixel vertical bars every five columns. Returns the
/// image together with the band as `(left, top, right, bottom)`, right and
/// bottom exclusive.
pub fn text_line(width: u32, height: u32, ink: u8, paper: u8) -> (Vec<u8>, [u32; 4]) {
    let mut data = constant(width, height, paper);
    let (left, right) = (width / 4, 3 * width / 4);
    let (top, bottom) = (height / 3, 2 * height / 3);
    let w = width as usize;
    for y in top..bottom {
        for x in left..right {
            let rail = y == top || y + 1 == bottom;
            let bar = (x - left) % 5 < 2 || x + 1 == right;
            if rail || bar {
                data[y as usize * w + x as usize] = ink;
            }
        }
    }
    (data, [left, top, right, bottom])
}
