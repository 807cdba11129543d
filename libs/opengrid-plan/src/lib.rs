//! # openGrid Plan
//!
//! Feature selection and plan maintenance for openGrid panels.
//!
//! ## Architecture
//!
//! ```text
//! opengrid-layout (TileGrid, Eligibility) → opengrid-plan (GridPlan) → opengrid-compact
//! ```
//!
//! The central invariant: a [`GridPlan`] never records an active feature at
//! a summit that is not eligible for it. The builder only activates eligible
//! summits, the editor prunes after every layout mutation, and external
//! plans are validated on construction.
//!
//! ## Example
//!
//! ```rust
//! use opengrid_layout::TileGrid;
//! use opengrid_plan::{build_plan, PlanOptions, ScrewPlacement};
//!
//! let tiles = TileGrid::filled(3, 3).unwrap();
//! let options = PlanOptions::default()
//!     .with_connectors(true)
//!     .with_tile_chamfers(true)
//!     .with_screws(ScrewPlacement::All);
//! let plan = build_plan(&tiles, &options);
//!
//! let counts = plan.feature_counts();
//! assert_eq!((counts.connectors, counts.tile_chamfers, counts.screws), (8, 4, 4));
//! ```

pub mod builder;
pub mod editor;
pub mod error;
pub mod export;
pub mod options;
pub mod plan;
pub mod prune;
pub mod types;

// Re-export public API
pub use builder::{build_plan, build_plan_with, select_features};
pub use editor::PlanEditor;
pub use error::PlanError;
pub use options::{PlanOptions, ScrewPlacement};
pub use plan::{check_eligibility, FeatureCounts, GridPlan};
pub use prune::{cleared_count, prune_features};
pub use types::{GridType, ScrewSize, SummitFeature, SummitFeatures};
