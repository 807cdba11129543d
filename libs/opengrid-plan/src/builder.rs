//! # Plan Builder
//!
//! Applies [`PlanOptions`] within the eligibility of a layout.
//!
//! ## Selection Rules
//!
//! - **Connectors**: every connector-eligible summit, rotation stored now
//! - **Tile chamfers**: every chamfer-eligible summit; with
//!   `outer_chamfers_with_screws` and screws enabled, only the four outer
//!   corners of the grid (if eligible)
//! - **Screws**: corner subset or every screw-eligible summit
//!
//! ## Example
//!
//! ```rust
//! use opengrid_layout::TileGrid;
//! use opengrid_plan::{build_plan, PlanOptions};
//!
//! let tiles = TileGrid::filled(2, 2).unwrap();
//! let plan = build_plan(&tiles, &PlanOptions::default().with_connectors(true));
//! assert_eq!(plan.feature_counts().connectors, 4);
//! ```

use opengrid_layout::{Eligibility, EligibilityCache, SummitGrid, TileGrid};
use tracing::debug;

use crate::options::{PlanOptions, ScrewPlacement};
use crate::plan::GridPlan;
use crate::types::SummitFeatures;

/// Builds a plan for `tiles`.
pub fn build_plan(tiles: &TileGrid, options: &PlanOptions) -> GridPlan {
    build_plan_with(&mut EligibilityCache::new(), tiles, options)
}

/// Builds a plan, reusing eligibility from `cache` when the layout is unchanged.
pub fn build_plan_with(
    cache: &mut EligibilityCache,
    tiles: &TileGrid,
    options: &PlanOptions,
) -> GridPlan {
    let summits = select_features(tiles, cache.get(tiles), options);
    let plan = GridPlan::assemble(
        tiles.clone(),
        summits,
        options.grid_type,
        options.resolved_screw_size(),
    );
    let counts = plan.feature_counts();
    debug!(
        rows = tiles.rows(),
        cols = tiles.cols(),
        grid_type = %options.grid_type,
        connectors = counts.connectors,
        tile_chamfers = counts.tile_chamfers,
        screws = counts.screws,
        "built grid plan"
    );
    plan
}

/// Chooses the active feature of every summit.
///
/// Only eligible summits are ever activated, so the result needs no pruning
/// against the same `eligibility`.
pub fn select_features(
    tiles: &TileGrid,
    eligibility: &Eligibility,
    options: &PlanOptions,
) -> SummitGrid<SummitFeatures> {
    let mut summits = SummitGrid::default_for(tiles);

    if options.connectors {
        for (pos, direction) in eligibility.connectors().iter() {
            if let Some(angle) = direction {
                summits[pos] = SummitFeatures::connector(*angle);
            }
        }
    }

    if options.tile_chamfers {
        let chamfers = if options.outer_chamfers_with_screws && options.screws.is_enabled() {
            outer_corners(tiles)
                .into_iter()
                .filter(|&(i, j)| eligibility.chamfer(i, j))
                .collect()
        } else {
            eligibility.chamfers().positions()
        };
        for pos in chamfers {
            summits[pos] = SummitFeatures::tile_chamfer();
        }
    }

    let screws = match options.screws {
        ScrewPlacement::None => Vec::new(),
        ScrewPlacement::Corners => eligibility.corner_screws().positions(),
        ScrewPlacement::All => eligibility.screws().positions(),
    };
    for pos in screws {
        summits[pos] = SummitFeatures::screw();
    }

    summits
}

/// The four outermost summits. A 1x1 grid still has four distinct corners.
fn outer_corners(tiles: &TileGrid) -> [(usize, usize); 4] {
    let (rows, cols) = (tiles.rows(), tiles.cols());
    [(0, 0), (0, cols), (rows, 0), (rows, cols)]
}
