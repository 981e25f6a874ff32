//! ocrprep - Grayscale preprocessing for OCR
//!
//! A stateless compute layer over caller-owned 8-bit grayscale buffers.
//!
//! # Overview
//!
//! - Local mean (box) filtering, naive and incremental
//! - Grayscale erosion, dilation, opening and closing with arbitrary
//!   structuring elements
//! - Adaptive thresholding against a local reference
//! - Region-of-interest conversion to opaque ARGB words
//! - Region statistics, contrast stretching and word extent search
//!
//! # Example
//!
//! ```
//! use ocrprep::color::{AdaptiveThresholdOptions, adaptive_threshold};
//! use ocrprep::filter::mean_filter;
//! use ocrprep::morph::{StructuringElement, erode_gray};
//! use ocrprep::{GrayImage, GrayImageMut};
//!
//! let (w, h) = (16, 8);
//! let src: Vec<u8> = (0..w * h).map(|i| (i * 7 % 256) as u8).collect();
//! let img = GrayImage::new(&src, w as i32, h as i32).unwrap();
//!
//! // Local means
//! let mut means = vec![0u8; src.len()];
//! let mut mean_view = GrayImageMut::new(&mut means, w as i32, h as i32).unwrap();
//! let global = mean_filter(&img, &mut mean_view, 2).unwrap();
//! assert_eq!(global, ocrprep::stats::mean(&img));
//!
//! // Binarize against them
//! let mut bin = vec![0u8; src.len()];
//! let mut bin_view = GrayImageMut::new(&mut bin, w as i32, h as i32).unwrap();
//! let opts = AdaptiveThresholdOptions { bias: 4, ..Default::default() };
//! adaptive_threshold(&img, &mean_view.as_image(), &mut bin_view, &opts).unwrap();
//!
//! // Join strokes
//! let mut joined = vec![0u8; src.len()];
//! let mut joined_view = GrayImageMut::new(&mut joined, w as i32, h as i32).unwrap();
//! let sel = StructuringElement::horizontal(1).unwrap();
//! erode_gray(&bin_view.as_image(), &mut joined_view, &sel).unwrap();
//! assert!(joined.iter().all(|&v| v == 0 || v == 255));
//! ```

// Re-export core types (views, regions, statistics)
pub use ocrprep_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use ocrprep_color as color;
pub use ocrprep_filter as filter;
pub use ocrprep_morph as morph;
pub use ocrprep_recog as recog;
