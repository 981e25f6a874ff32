//! Error types for ocrprep-core
//!
//! Provides a unified error type for the buffer views, regions and
//! statistics in this crate. Every fallible operation validates its inputs
//! completely before touching an output buffer, so an `Err` always means
//! that nothing was written.

use thiserror::Error;

/// Broad classification of an [`Error`].
///
/// Callers that only need to decide between "fix the arguments" and
/// "retry with more memory" can match on this instead of on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller passed a malformed argument (dimension, buffer, region,
    /// structuring element, parameter).
    InvalidArgument,
    /// A scratch buffer could not be obtained.
    ResourceExhausted,
}

/// ocrprep error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Negative image dimensions
    #[error("width and height must be non-negative: {width}x{height}")]
    InvalidDimension { width: i64, height: i64 },

    /// A sample or color buffer holds fewer elements than the image needs
    #[error("{name} array too short: {len} < {required}")]
    BufferTooShort {
        name: &'static str,
        len: usize,
        required: usize,
    },

    /// Two images that must share dimensions do not
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Region of interest outside the image
    #[error("ROI exceeds image: ({x}, {y}, {w}, {h}) in {image_width}x{image_height}")]
    RoiOutOfBounds {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        image_width: u32,
        image_height: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Scratch allocation failed
    #[error("failed to allocate {0} buffer")]
    AllocationFailed(&'static str),
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::AllocationFailed(_) => ErrorKind::ResourceExhausted,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

/// Result type alias for ocrprep core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Allocate a zero-filled scratch vector, reporting failure instead of aborting.
///
/// `name` identifies the buffer in the resulting [`Error::AllocationFailed`].
pub fn try_alloc_zeroed<T: Clone + Default>(len: usize, name: &'static str) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailed(name))?;
    buf.resize(len, T::default());
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            Error::AllocationFailed("sums").kind(),
            ErrorKind::ResourceExhausted
        );
        assert_eq!(
            Error::InvalidDimension {
                width: -1,
                height: 3
            }
            .kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            Error::InvalidParameter("x".into()).kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_messages() {
        let e = Error::BufferTooShort {
            name: "input",
            len: 3,
            required: 4,
        };
        assert_eq!(e.to_string(), "input array too short: 3 < 4");
        let e = Error::DimensionMismatch {
            expected: (4, 2),
            actual: (2, 4),
        };
        assert_eq!(e.to_string(), "dimension mismatch: expected 4x2, got 2x4");
    }

    #[test]
    fn test_try_alloc_zeroed() {
        let v: Vec<u64> = try_alloc_zeroed(5, "sums").unwrap();
        assert_eq!(v, vec![0; 5]);
        let v: Vec<u8> = try_alloc_zeroed(0, "empty").unwrap();
        assert!(v.is_empty());
    }
}
