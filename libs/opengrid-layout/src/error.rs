//! # Layout Errors
//!
//! Error types for building and editing tile layouts.

use crate::grid::Axis;
use thiserror::Error;

/// Errors that can occur while constructing or mutating a layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A grid needs at least one row and one column.
    #[error("Grid dimensions must be >= 1, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    /// Rows of different lengths were supplied.
    #[error("Layout is not rectangular: row 0 has {expected} columns but row {row} has {found}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Grid exceeds the configured size limit.
    #[error("Grid {rows}x{cols} exceeds the maximum dimension of {max}")]
    TooLarge { rows: usize, cols: usize, max: usize },

    /// Attempted to remove the only remaining row or column.
    #[error("Cannot remove the last {0}")]
    MinimumSize(Axis),

    /// Slot coordinates outside the grid.
    #[error("Slot ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Unparseable `ROWSxCOLS` size string.
    #[error("Expected ROWSxCOLS (e.g. 2x4), got {0:?}")]
    InvalidSize(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LayoutError::EmptyGrid { rows: 0, cols: 3 };
        assert!(err.to_string().contains("0x3"));

        let err = LayoutError::MinimumSize(Axis::Column);
        assert_eq!(err.to_string(), "Cannot remove the last column");
    }
}
