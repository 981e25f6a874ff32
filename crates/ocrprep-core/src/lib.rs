//! ocrprep core - Borrowed grayscale views for OCR preprocessing
//!
//! This crate provides the data types shared by every ocrprep kernel:
//!
//! - [`GrayImage`] / [`GrayImageMut`] - Row-major 8-bit sample views over
//!   caller-owned buffers (read-only / writable)
//! - [`Rect`] - Rectangular regions of interest
//! - [`stats`] - Global mean and per-region min/max/mean/variance/histogram
//! - [`argb`] - Opaque ARGB packing helpers
//!
//! Nothing here allocates image memory; callers own every buffer.

pub mod error;
pub mod gray;
pub mod rect;
pub mod stats;

pub use error::{Error, ErrorKind, Result, try_alloc_zeroed};
pub use gray::{GrayImage, GrayImageMut, check_same_size, required_len};
pub use rect::Rect;

/// Channel helpers for 32-bit ARGB words.
///
/// # Pixel format
///
/// Words are laid out as `0xAARRGGBB` (alpha in the MSB, blue in the LSB),
/// the layout expected by display surfaces consuming converted regions.
pub mod argb {
    /// Shift amounts for extracting color channels
    pub const ALPHA_SHIFT: u32 = 24;
    pub const RED_SHIFT: u32 = 16;
    pub const GREEN_SHIFT: u32 = 8;
    pub const BLUE_SHIFT: u32 = 0;

    /// Fully opaque alpha
    pub const OPAQUE: u32 = 0xff00_0000;

    /// Extract alpha component from an ARGB word.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Extract red component from an ARGB word.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from an ARGB word.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from an ARGB word.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Compose an ARGB word from its channels.
    #[inline]
    pub fn compose_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
        ((a as u32) << ALPHA_SHIFT)
            | ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
    }

    /// Opaque ARGB word with all three color channels set to `gray`.
    #[inline]
    pub fn gray_to_argb(gray: u8) -> u32 {
        let g = gray as u32;
        OPAQUE | (g << RED_SHIFT) | (g << GREEN_SHIFT) | g
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_gray_to_argb() {
            assert_eq!(gray_to_argb(128), 0xFF80_8080);
            assert_eq!(gray_to_argb(0), 0xFF00_0000);
            assert_eq!(gray_to_argb(255), 0xFFFF_FFFF);
            assert_eq!(gray_to_argb(0x12), compose_argb(0xff, 0x12, 0x12, 0x12));
        }

        #[test]
        fn test_channels() {
            let p = compose_argb(1, 2, 3, 4);
            assert_eq!((alpha(p), red(p), green(p), blue(p)), (1, 2, 3, 4));
        }
    }
}
