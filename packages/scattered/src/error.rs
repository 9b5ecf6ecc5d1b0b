//! Container error types.

use thiserror::Error;

/// Columnar container errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScatteredError {
    /// Checked element access past the end of the container
    #[error("Index {index} is out of bounds [0, {len})")]
    OutOfRange { index: usize, len: usize },

    /// Column growth could not be satisfied
    #[error("Capacity overflow during {operation} (requested {requested} additional elements)")]
    CapacityOverflow {
        operation: &'static str,
        requested: usize,
    },
}

pub type Result<T> = std::result::Result<T, ScatteredError>;
