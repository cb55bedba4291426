//! Error types for detpost.

use thiserror::Error;

/// Result alias for detpost operations.
pub type DetPostResult<T> = std::result::Result<T, DetPostError>;

/// Errors that can occur while post-processing a frame.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DetPostError {
    /// The output buffer length disagrees with the declared tensor shape.
    #[error("output buffer holds {got} values but the declared shape needs {expected}")]
    ShapeMismatch {
        /// Number of values implied by `rows * cols`.
        expected: usize,
        /// Actual buffer length.
        got: usize,
    },
    /// The declared tensor shape cannot describe a detector output.
    #[error("invalid output shape {rows}x{cols}: need at least 5 rows (4 box channels + 1 class) and 1 anchor")]
    InvalidShape {
        /// Declared channel count.
        rows: usize,
        /// Declared anchor count.
        cols: usize,
    },
    /// The inference session has no loaded model yet.
    #[error("inference session is not ready")]
    NotReady,
    /// The external inference call failed.
    #[error("inference failed: {0}")]
    Inference(String),
    /// A wire-format record could not be parsed.
    #[error("malformed wire record: {record:?}")]
    MalformedRecord {
        /// The offending record text.
        record: String,
    },
}
