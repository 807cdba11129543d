//! # Feature Pruning
//!
//! Clears every feature the current layout no longer allows. Run after each
//! tile mutation so a plan never holds an ineligible feature.

use opengrid_layout::{Eligibility, SummitGrid};

use crate::types::{SummitFeature, SummitFeatures};

/// Returns `summits` with ineligible features reset.
///
/// A connector that survives takes the rotation the layout implies now.
/// Summits outside `eligibility` are cleared. Idempotent.
///
/// ## Example
///
/// ```rust
/// use opengrid_layout::{Eligibility, Slot, TileGrid};
/// use opengrid_plan::{build_plan, prune_features, PlanOptions};
///
/// let mut tiles = TileGrid::filled(3, 3).unwrap();
/// let plan = build_plan(&tiles, &PlanOptions::all_features());
/// tiles.set(1, 1, Slot::Hole).unwrap();
///
/// let pruned = prune_features(plan.summits(), &Eligibility::compute(&tiles));
/// assert!(pruned.values().all(|s| !s.has_screw()));
/// ```
pub fn prune_features(
    summits: &SummitGrid<SummitFeatures>,
    eligibility: &Eligibility,
) -> SummitGrid<SummitFeatures> {
    summits.map(|(i, j), features| {
        let kept = match features.feature() {
            Some(SummitFeature::Connector(_)) => eligibility
                .connector_direction(i, j)
                .map(SummitFeature::Connector),
            Some(SummitFeature::TileChamfer) if eligibility.chamfer(i, j) => {
                Some(SummitFeature::TileChamfer)
            }
            Some(SummitFeature::Screw) if eligibility.screw(i, j) => Some(SummitFeature::Screw),
            _ => None,
        };
        SummitFeatures::new(kept)
    })
}

/// Number of active features in `before` that are gone from `after`.
pub fn cleared_count(
    before: &SummitGrid<SummitFeatures>,
    after: &SummitGrid<SummitFeatures>,
) -> usize {
    before
        .iter()
        .filter(|(_, features)| features.is_active())
        .filter(|&((i, j), _)| !after.get(i, j).is_some_and(SummitFeatures::is_active))
        .count()
}
