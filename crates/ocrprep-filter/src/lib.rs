//! ocrprep-filter - Local mean filtering and contrast enhancement
//!
//! This crate provides:
//!
//! - Box (local mean) filters: a naive reference and an incremental
//!   running-sum implementation behind the [`BoxFilter`] trait
//! - Linear contrast stretching

pub mod box_filter;
pub mod enhance;
mod error;

pub use error::{FilterError, FilterResult};

pub use box_filter::{
    BoxFilter, BoxFilterKind, IncrementalBoxFilter, NaiveBoxFilter, mean_filter,
    mean_filter_naive,
};
pub use enhance::{contrast_stretch, contrast_stretch_auto, stretch_lut};
