//! Word binarization
//!
//! Turns a grayscale crop around a word into a binary image by chaining
//! the ocrprep kernels:
//!
//! 1. Contrast stretch by the crop's own minimum and maximum
//! 2. Polarity guess from the stretched mean
//! 3. Local means with a box filter
//! 4. Adaptive threshold against the local means, biased by a fraction of
//!    the standard deviation
//! 5. Horizontal then vertical erosion to join strokes

use crate::{RecogError, RecogResult};
use log::debug;
use ocrprep_color::{AdaptiveThresholdOptions, adaptive_threshold_in_place};
use ocrprep_core::{GrayImage, GrayImageMut, check_same_size, stats, try_alloc_zeroed};
use ocrprep_filter::{BoxFilter, BoxFilterKind, contrast_stretch_auto};
use ocrprep_morph::{MAX_SEL_RADIUS, StructuringElement, erode_gray};

/// Brightness of text relative to its background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Dark text on a light background
    DarkOnLight,
    /// Light text on a dark background
    LightOnDark,
}

impl Polarity {
    /// Guess polarity from the mean of a stretched image: a bright mean
    /// means mostly paper, so the text is dark.
    pub fn from_mean(mean: f32) -> Self {
        if mean > 127.0 {
            Polarity::DarkOnLight
        } else {
            Polarity::LightOnDark
        }
    }

    /// Threshold output levels for this polarity.
    pub fn threshold_options(self, bias: i32) -> AdaptiveThresholdOptions {
        match self {
            Polarity::DarkOnLight => AdaptiveThresholdOptions::dark_text(bias),
            Polarity::LightOnDark => AdaptiveThresholdOptions::light_text(bias),
        }
    }
}

/// Options for [`binarize_word`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinarizeOptions {
    /// Box filter radius for the local means
    pub radius: u32,
    /// Threshold bias as a fraction of the standard deviation
    pub bias_factor: f32,
    /// Radius of the horizontal and vertical erosion lines
    pub stroke_radius: u32,
    /// Box filter strategy
    pub filter: BoxFilterKind,
}

impl Default for BinarizeOptions {
    fn default() -> Self {
        Self {
            radius: 10,
            bias_factor: 0.33,
            stroke_radius: 2,
            filter: BoxFilterKind::Incremental,
        }
    }
}

impl BinarizeOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the box filter radius
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the bias factor
    pub fn with_bias_factor(mut self, factor: f32) -> Self {
        self.bias_factor = factor;
        self
    }

    /// Set the erosion radius
    pub fn with_stroke_radius(mut self, radius: u32) -> Self {
        self.stroke_radius = radius;
        self
    }

    /// Set the box filter strategy
    pub fn with_filter(mut self, filter: BoxFilterKind) -> Self {
        self.filter = filter;
        self
    }

    /// Validate options
    pub fn validate(&self) -> RecogResult<()> {
        if !self.bias_factor.is_finite() || self.bias_factor < 0.0 {
            return Err(RecogError::InvalidParameter(format!(
                "bias_factor must be finite and non-negative, got {}",
                self.bias_factor
            )));
        }
        if self.stroke_radius > MAX_SEL_RADIUS {
            return Err(RecogError::InvalidParameter(format!(
                "stroke_radius must be at most {}, got {}",
                MAX_SEL_RADIUS, self.stroke_radius
            )));
        }
        Ok(())
    }
}

/// What [`binarize_word`] decided along the way
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinarizeOutcome {
    /// Gray range that was stretched to 0..=255
    pub range: (u8, u8),
    /// Detected polarity
    pub polarity: Polarity,
    /// Mean of the stretched image
    pub stretched_mean: f32,
    /// Truncating global mean reported by the box filter
    pub mean: u8,
    /// Threshold bias
    pub bias: i32,
}

/// Binarize a word crop from `src` into `dst`.
///
/// # Errors
///
/// [`RecogError::EmptyImage`] for an image without samples, invalid
/// options, size mismatches, or scratch allocation failure. `dst` may hold
/// intermediate results if a later stage fails to allocate.
pub fn binarize_word(
    src: &GrayImage<'_>,
    dst: &mut GrayImageMut<'_>,
    options: &BinarizeOptions,
) -> RecogResult<BinarizeOutcome> {
    options.validate()?;
    check_same_size(src.dimensions(), dst.dimensions())?;
    if src.is_empty() {
        return Err(RecogError::EmptyImage);
    }
    let (w, h) = src.dimensions();
    let mut scratch: Vec<u8> = try_alloc_zeroed(src.len(), "binarize scratch")?;

    let range = contrast_stretch_auto(src, dst)?;

    let stretched = dst.as_image();
    let stretched_mean = stats::mean_in_rect(&stretched, None)?;
    let polarity = Polarity::from_mean(stretched_mean);
    let variance = stats::variance_in_rect(&stretched, None)?;
    let bias = (options.bias_factor * variance.sqrt()) as i32;
    debug!(
        "binarize {}x{}: range {:?}, mean {:.1}, {:?}, bias {}",
        w, h, range, stretched_mean, polarity, bias
    );

    let mean = {
        let mut means = GrayImageMut::from_parts(&mut scratch, w, h, "scratch")?;
        let mean = options.filter.apply(&stretched, &mut means, options.radius)?;
        adaptive_threshold_in_place(
            dst,
            &means.as_image(),
            &polarity.threshold_options(bias),
        )?;
        mean
    };

    // Line offsets at or beyond the image extent never land on a sample.
    let hline = StructuringElement::horizontal(options.stroke_radius.min(w))?;
    let vline = StructuringElement::vertical(options.stroke_radius.min(h))?;
    let mut tmp = GrayImageMut::from_parts(&mut scratch, w, h, "scratch")?;
    erode_gray(&dst.as_image(), &mut tmp, &hline)?;
    erode_gray(&tmp.as_image(), dst, &vline)?;

    Ok(BinarizeOutcome {
        range,
        polarity,
        stretched_mean,
        mean,
        bias,
    })
}
