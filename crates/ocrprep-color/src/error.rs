//! Error types for ocrprep-color

use ocrprep_core::ErrorKind;
use thiserror::Error;

/// Errors that can occur during thresholding and color conversion
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] ocrprep_core::Error),
}

impl ColorError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ColorError::Core(e) => e.kind(),
        }
    }
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
