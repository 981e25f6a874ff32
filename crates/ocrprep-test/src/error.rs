//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to write a regression output
    #[error("failed to write '{path}': {message}")]
    OutputWrite { path: String, message: String },

    /// Sample buffer does not match the stated dimensions
    #[error("sample buffer of {len} bytes does not hold a {width}x{height} image")]
    BadDimensions { len: usize, width: u32, height: u32 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
