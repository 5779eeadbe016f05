//! Error types for palette lookup, stretching and tile colorizing.

use thiserror::Error;

/// Errors produced by the colormap engine.
///
/// Every error is returned before any output is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColormapError {
    #[error("unknown palette: {name}")]
    UnknownPalette { name: String },

    /// A stretch range with non-finite or decreasing bounds, a table of
    /// zero values, or a table of more than one value over a degenerate
    /// range.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    #[error("shape mismatch: expected {}x{}, found {}x{}",
            expected.0, expected.1, found.0, found.1)]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("buffer of {len} samples does not hold a {width}x{height} tile")]
    InvalidBuffer {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("invalid palette {name:?}: {reason}")]
    InvalidPalette { name: String, reason: String },
}

/// Result alias for colormap operations.
pub type Result<T> = std::result::Result<T, ColormapError>;
