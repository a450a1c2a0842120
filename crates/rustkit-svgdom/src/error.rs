//! Error types shared by every SVG DOM value and list.

use thiserror::Error;

/// Errors that can occur in SVG DOM operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SvgError {
    /// A list was indexed past its end.
    #[error("Index out of range: {index} (list has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The matrix has no inverse.
    #[error("Singular matrix: determinant {determinant} is too close to zero")]
    SingularMatrix { determinant: f64 },

    /// `rotate_from_vector` was called with the zero vector.
    #[error("Degenerate vector: cannot derive a rotation from (0, 0)")]
    DegenerateVector,

    /// Malformed attribute text.
    #[error("Format error at byte {position} ({token:?}): {reason}")]
    Format {
        position: usize,
        token: String,
        reason: String,
    },
}

impl SvgError {
    /// Create a format error.
    pub fn format(position: usize, token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format {
            position,
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Get the error category for log fields.
    pub fn category(&self) -> &'static str {
        match self {
            SvgError::IndexOutOfRange { .. } => "index_out_of_range",
            SvgError::SingularMatrix { .. } => "singular_matrix",
            SvgError::DegenerateVector => "degenerate_vector",
            SvgError::Format { .. } => "format",
        }
    }
}

/// Result type alias for SVG DOM operations.
pub type Result<T> = std::result::Result<T, SvgError>;
