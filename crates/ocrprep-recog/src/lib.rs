//! ocrprep-recog - Word binarization and extent search
//!
//! Composes the ocrprep kernels into the word-capture pipeline:
//!
//! - [`binarize_word`]: contrast stretch, polarity detection, local-mean
//!   adaptive threshold and stroke erosion
//! - [`find_word_extent`]: grow a seed rectangle over connected ink
//!
//! # Quick Start
//!
//! ```
//! use ocrprep_core::{GrayImage, GrayImageMut, Rect};
//! use ocrprep_recog::{BinarizeOptions, locate_word};
//!
//! let (w, h) = (32, 12);
//! let mut src = vec![220u8; w * h];
//! for x in 8..24 {
//!     for y in 4..8 {
//!         src[y * w + x] = 30;
//!     }
//! }
//! let mut out = vec![0u8; w * h];
//! let img = GrayImage::new(&src, w as i32, h as i32).unwrap();
//! let mut dst = GrayImageMut::new(&mut out, w as i32, h as i32).unwrap();
//! let seed = Rect::new(15, 5, 1, 1).unwrap();
//! let (extent, outcome) = locate_word(&img, &mut dst, &seed, &BinarizeOptions::default()).unwrap();
//! assert!(extent.area() >= seed.area());
//! println!("{:?} {:?}", extent, outcome.polarity);
//! ```

pub mod binarize;
mod error;
pub mod extent;

pub use error::{RecogError, RecogResult};

pub use binarize::{BinarizeOptions, BinarizeOutcome, Polarity, binarize_word};
pub use extent::{find_word_extent, locate_word};
