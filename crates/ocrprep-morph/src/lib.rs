//! ocrprep-morph - Grayscale morphology for OCR preprocessing
//!
//! This crate provides:
//!
//! - [`StructuringElement`] construction from offsets, masks and named
//!   shapes (line, brick, square, cross)
//! - A generic min/max [`structural_transform`] with a bounds-checked
//!   border path and a flattened-offset interior path
//! - Erosion, dilation, opening and closing built on it

mod error;
pub mod grayscale;
pub mod sel;
pub mod transform;

pub use error::{MorphError, MorphResult};
pub use grayscale::{close_gray, dilate_gray, erode_gray, open_gray};
pub use sel::{MAX_SEL_RADIUS, SelBounds, StructuringElement};
pub use transform::{Max, Min, Reducer, structural_transform};
