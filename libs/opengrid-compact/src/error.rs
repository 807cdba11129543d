//! # Compact Code Errors
//!
//! Every way a compact code can be malformed gets its own variant, so
//! callers can tell a truncated paste from a code produced by an
//! incompatible tool.

use opengrid_plan::PlanError;
use thiserror::Error;

/// Errors that can occur while encoding or decoding a compact code.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompactError {
    #[error("Expected {expected} dot-separated parts, got {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("Unsupported version: {0:?}")]
    UnsupportedVersion(String),

    #[error("Invalid type: {0:?}")]
    InvalidType(String),

    /// Row or column field is not an integer.
    #[error("Invalid dimensions: {rows:?} x {cols:?}")]
    InvalidDimensions { rows: String, cols: String },

    #[error("Dimensions must be >= 1, got {rows}x{cols}")]
    DimensionTooSmall { rows: i64, cols: i64 },

    #[error("Dimensions {rows}x{cols} exceed the maximum of {max}")]
    DimensionTooLarge { rows: i64, cols: i64, max: usize },

    /// A payload field is not valid unpadded or padded base64url.
    #[error("Invalid base64 in {field} field: {reason}")]
    InvalidBase64 { field: &'static str, reason: String },

    #[error("Screw data must be {expected} bytes, got {found}")]
    ScrewLength { expected: usize, found: usize },

    #[error("Insufficient tile data: need {needed} bytes, got {found}")]
    InsufficientTiles { needed: usize, found: usize },

    #[error("Insufficient feature data: need {needed} bytes, got {found}")]
    InsufficientFeatures { needed: usize, found: usize },

    /// A summit bit is set where the layout allows no feature.
    #[error("Summit ({row}, {col}) is marked active but is not eligible for any feature")]
    InconsistentSummit { row: usize, col: usize },

    /// Screw dimension cannot be stored in one byte of 0.1 mm units.
    #[error("Screw {name} {value} mm is outside the encodable range {min}-{max} mm")]
    ScrewOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Head and shaft diameters round to the same 0.1 mm step or cross over.
    #[error("Screw head diameter {head_diameter} mm is not wider than diameter {diameter} mm at 0.1 mm resolution")]
    ScrewHeadCollapsed { diameter: f64, head_diameter: f64 },

    /// Decoded plan failed validation.
    #[error("Invalid plan: {0}")]
    Plan(#[from] PlanError),
}

impl CompactError {
    pub(crate) fn base64(field: &'static str, err: base64::DecodeError) -> Self {
        Self::InvalidBase64 {
            field,
            reason: err.to_string(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
