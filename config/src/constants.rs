//! # Configuration Constants
//!
//! Centralized constants for the openGrid planner. Screw defaults, compact
//! code parameters and grid limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Screws**: Default screw dimensions per grid type
//! - **Compact Code**: Wire format parameters
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for millimeter comparisons.
///
/// Screw dimensions are carried at 0.1 mm resolution, so anything well below
/// that is numerical noise.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(4.2, 42.0 / 10.0));
/// ```
pub const EPSILON: f64 = 1e-9;

// =============================================================================
// SCREW CONSTANTS (full grid)
// =============================================================================

/// Default screw shaft diameter for full tiles, in millimeters.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_SCREW_DIAMETER, DEFAULT_SCREW_HEAD_DIAMETER};
/// assert!(DEFAULT_SCREW_HEAD_DIAMETER > DEFAULT_SCREW_DIAMETER);
/// ```
pub const DEFAULT_SCREW_DIAMETER: f64 = 4.2;

/// Default countersunk head diameter for full tiles, in millimeters.
pub const DEFAULT_SCREW_HEAD_DIAMETER: f64 = 8.0;

/// Default head inset for full tiles, in millimeters.
pub const DEFAULT_SCREW_HEAD_INSET: f64 = 1.0;

// =============================================================================
// SCREW CONSTANTS (lite grid)
// =============================================================================

/// Default screw shaft diameter for lite tiles, in millimeters.
///
/// Lite tiles are thinner, so the reference models use a slightly smaller
/// screw than full tiles.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_SCREW_DIAMETER, LITE_DEFAULT_SCREW_DIAMETER};
/// assert!(LITE_DEFAULT_SCREW_DIAMETER < DEFAULT_SCREW_DIAMETER);
/// ```
pub const LITE_DEFAULT_SCREW_DIAMETER: f64 = 4.1;

/// Default countersunk head diameter for lite tiles, in millimeters.
pub const LITE_DEFAULT_SCREW_HEAD_DIAMETER: f64 = 7.2;

/// Default head inset for lite tiles, in millimeters.
pub const LITE_DEFAULT_SCREW_HEAD_INSET: f64 = 1.0;

// =============================================================================
// COMPACT CODE CONSTANTS
// =============================================================================

/// Version field written as the first part of every compact code.
///
/// # Example
///
/// ```rust
/// use config::constants::{COMPACT_FORMAT_VERSION, COMPACT_FIELD_SEPARATOR};
///
/// let code = "0.f.2.2.KlAK.8A._4A";
/// let version = code.split(COMPACT_FIELD_SEPARATOR).next();
/// assert_eq!(version, Some(COMPACT_FORMAT_VERSION));
/// ```
pub const COMPACT_FORMAT_VERSION: &str = "0";

/// Separator between the fields of a compact code.
pub const COMPACT_FIELD_SEPARATOR: char = '.';

/// Number of fields in a version 0 compact code.
///
/// version, type, rows, cols, screw, tiles, features.
pub const COMPACT_FIELD_COUNT: usize = 7;

/// Number of bytes in the screw payload (diameter, head diameter, head inset).
pub const SCREW_PAYLOAD_BYTES: usize = 3;

/// Scale from millimeters to the integer units stored in the screw payload.
///
/// # Example
///
/// ```rust
/// use config::constants::SCREW_UNITS_PER_MM;
///
/// let stored: u8 = 80;
/// assert_eq!(stored as f64 / SCREW_UNITS_PER_MM, 8.0);
/// ```
pub const SCREW_UNITS_PER_MM: f64 = 10.0;

/// Largest screw dimension representable in one payload byte, in millimeters.
pub const MAX_SCREW_MM: f64 = u8::MAX as f64 / SCREW_UNITS_PER_MM;

/// Smallest non-zero screw dimension the payload can carry, in millimeters.
///
/// Decoded screws must be positive, so a dimension stored as 0 units is
/// unusable.
pub const MIN_SCREW_MM: f64 = 1.0 / SCREW_UNITS_PER_MM;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of rows or columns in a layout.
///
/// Real panels are tens of tiles across; the limit keeps a forged compact
/// code from requesting huge allocations.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_GRID_DIMENSION;
///
/// let rows = 12;
/// assert!(rows <= MAX_GRID_DIMENSION);
/// ```
pub const MAX_GRID_DIMENSION: usize = 1024;

// =============================================================================
// DEFAULTS SNAPSHOT
// =============================================================================

/// Immutable snapshot of the screw defaults for one grid variant.
///
/// # Examples
/// ```
/// use config::constants::PlannerDefaults;
/// let defaults = PlannerDefaults::default();
/// assert_eq!(defaults.screw_diameter, 4.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerDefaults {
    /// Shaft diameter in millimeters.
    pub screw_diameter: f64,
    /// Countersunk head diameter in millimeters.
    pub screw_head_diameter: f64,
    /// Head inset in millimeters.
    pub screw_head_inset: f64,
}

impl PlannerDefaults {
    /// Defaults for lite grids.
    ///
    /// # Examples
    /// ```
    /// use config::constants::PlannerDefaults;
    /// assert_eq!(PlannerDefaults::lite().screw_head_diameter, 7.2);
    /// ```
    pub fn lite() -> Self {
        Self {
            screw_diameter: LITE_DEFAULT_SCREW_DIAMETER,
            screw_head_diameter: LITE_DEFAULT_SCREW_HEAD_DIAMETER,
            screw_head_inset: LITE_DEFAULT_SCREW_HEAD_INSET,
        }
    }
}

impl Default for PlannerDefaults {
    fn default() -> Self {
        Self {
            screw_diameter: DEFAULT_SCREW_DIAMETER,
            screw_head_diameter: DEFAULT_SCREW_HEAD_DIAMETER,
            screw_head_inset: DEFAULT_SCREW_HEAD_INSET,
        }
    }
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two millimeter values are approximately equal.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(0.1 + 0.2, 0.3));
/// assert!(!approx_equal(4.1, 4.2));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Number of bytes needed to hold `bits` bits.
///
/// # Example
///
/// ```rust
/// use config::constants::packed_len;
///
/// assert_eq!(packed_len(0), 0);
/// assert_eq!(packed_len(9), 2);
/// ```
#[inline]
pub const fn packed_len(bits: usize) -> usize {
    bits.div_ceil(8)
}
