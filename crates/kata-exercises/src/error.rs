//! Errors for exercises whose inputs can fall outside their domain.

use thiserror::Error;

/// Errors returned by the exercise functions.
#[derive(Error, Debug)]
pub enum ExerciseError {
    /// The result does not fit in the return type.
    #[error("arithmetic overflow")]
    Overflow,

    /// Radix outside the supported `2..=10` range.
    #[error("radix {0} is not in 2..=10")]
    InvalidRadix(u32),

    /// Matrix shapes cannot be multiplied, or a matrix has ragged rows.
    #[error("cannot multiply a {left_rows}x{left_cols} matrix by a {right_rows}x{right_cols} matrix")]
    DimensionMismatch {
        /// Rows in the left operand.
        left_rows: usize,
        /// Columns in the left operand.
        left_cols: usize,
        /// Rows in the right operand.
        right_rows: usize,
        /// Columns in the right operand.
        right_cols: usize,
    },

    /// A matrix has rows of different lengths.
    #[error("matrix rows have different lengths")]
    RaggedMatrix,

    /// JSON could not be produced or parsed.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}
