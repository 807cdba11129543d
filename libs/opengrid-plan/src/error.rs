//! # Plan Errors
//!
//! Error types for plan construction, validation and editing.

use opengrid_layout::{FeatureKind, LayoutError};
use thiserror::Error;

/// Errors that can occur while building, validating or editing a plan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Layout construction or mutation failed.
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Screw dimensions violate the size invariants.
    #[error("Invalid screw size: {0}")]
    InvalidScrewSize(String),

    /// Summit grid does not match the tile grid.
    #[error(
        "Summit grid is {found_rows}x{found_cols} but a {rows}x{cols} layout needs {}x{}",
        .rows + 1,
        .cols + 1
    )]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        found_rows: usize,
        found_cols: usize,
    },

    /// A feature is active where the layout does not allow it.
    #[error("Summit ({row}, {col}) has an active {kind} but is not eligible for it")]
    IneligibleFeature {
        row: usize,
        col: usize,
        kind: FeatureKind,
    },

    /// A connector's stored rotation disagrees with the layout.
    #[error("Connector at summit ({row}, {col}) is rotated {found}° but the layout implies {expected}°")]
    StaleConnector {
        row: usize,
        col: usize,
        found: f64,
        expected: f64,
    },

    /// A summit record activates more than one feature.
    #[error("Summit record activates more than one feature")]
    ConflictingFeatures,

    /// Connector rotation outside -90, 0, 90, 180.
    #[error("Invalid connector angle: {0}")]
    InvalidAngle(f64),

    /// Toggled summit has no eligible feature.
    #[error("Summit ({row}, {col}) is not eligible for any feature")]
    NothingToToggle { row: usize, col: usize },

    /// Unknown grid type or screw placement name.
    #[error("Unknown {what}: {value:?}")]
    UnknownVariant { what: &'static str, value: String },

    /// Structured export failed to parse or serialize.
    #[error("JSON error: {0}")]
    Json(String),
}

impl PlanError {
    /// Creates an invalid screw size error.
    pub fn invalid_screw(message: impl Into<String>) -> Self {
        Self::InvalidScrewSize(message.into())
    }
}

impl From<serde_json::Error> for PlanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlanError::IneligibleFeature {
            row: 1,
            col: 2,
            kind: FeatureKind::Screw,
        };
        assert_eq!(
            err.to_string(),
            "Summit (1, 2) has an active screw but is not eligible for it"
        );

        let err = PlanError::DimensionMismatch {
            rows: 2,
            cols: 2,
            found_rows: 2,
            found_cols: 3,
        };
        assert!(err.to_string().contains("needs 3x3"));
    }

    #[test]
    fn test_layout_error_converts() {
        let err: PlanError = LayoutError::InvalidSize("x".into()).into();
        assert!(matches!(err, PlanError::Layout(_)));
    }
}
