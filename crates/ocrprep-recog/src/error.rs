//! Error types for ocrprep-recog

use ocrprep_core::ErrorKind;
use thiserror::Error;

/// Errors that can occur during word binarization and extent search
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] ocrprep_core::Error),

    /// Filter library error
    #[error("filter error: {0}")]
    Filter(#[from] ocrprep_filter::FilterError),

    /// Morphology library error
    #[error("morphology error: {0}")]
    Morph(#[from] ocrprep_morph::MorphError),

    /// Threshold library error
    #[error("threshold error: {0}")]
    Color(#[from] ocrprep_color::ColorError),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The image has no samples
    #[error("empty image: no pixels to process")]
    EmptyImage,
}

impl RecogError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RecogError::Core(e) => e.kind(),
            RecogError::Filter(e) => e.kind(),
            RecogError::Morph(e) => e.kind(),
            RecogError::Color(e) => e.kind(),
            RecogError::InvalidParameter(_) | RecogError::EmptyImage => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
