//! # openGrid Layout
//!
//! Tile layout model and summit eligibility for openGrid panels.
//!
//! ## Architecture
//!
//! ```text
//! TileGrid → Eligibility (connector / chamfer / screw) → opengrid-plan → opengrid-compact
//! ```
//!
//! A layout is an R x C grid of [`Slot`]s. Features live on the (R+1) x (C+1)
//! summits between slots, and which feature a summit may carry depends only
//! on its four neighboring slots.
//!
//! ## Example
//!
//! ```rust
//! use opengrid_layout::{Eligibility, Slot, TileGrid};
//!
//! let mut tiles = TileGrid::filled(2, 2).unwrap();
//! tiles.set(0, 1, Slot::Hole).unwrap();
//! let eligibility = Eligibility::compute(&tiles);
//! assert!(eligibility.chamfer(0, 0));
//! assert!(!eligibility.screw(1, 1));
//! ```

pub mod cache;
pub mod corners;
pub mod eligibility;
pub mod error;
pub mod grid;
pub mod slot;
pub mod summit;

// Re-export public API
pub use cache::{CacheStats, EligibilityCache};
pub use corners::corner_screw_positions;
pub use eligibility::{
    chamfer_eligible, compute_chamfer_positions, compute_connector_positions,
    compute_screw_positions, connector_direction, connector_eligible, is_tile, screw_eligible,
    Eligibility,
};
pub use error::LayoutError;
pub use grid::{Axis, GridSize, TileGrid};
pub use slot::Slot;
pub use summit::{ConnectorAngle, FeatureKind, Neighbors, SummitGrid};
