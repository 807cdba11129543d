//! # Grid Plan
//!
//! The complete, eligibility-consistent description of a panel: tiles,
//! per-summit features, grid type and screw size.
//!
//! A plan is an immutable snapshot. Plans coming from outside the builder
//! (JSON, hand assembly) go through [`GridPlan::new`], which rejects any
//! feature the layout does not allow.

use opengrid_layout::{Eligibility, FeatureKind, SummitGrid, TileGrid};
use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::types::{GridType, ScrewSize, SummitFeature, SummitFeatures};

/// Tiles, summit features, grid type and screw size of one panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridPlanRecord", into = "GridPlanRecord")]
pub struct GridPlan {
    tiles: TileGrid,
    summits: SummitGrid<SummitFeatures>,
    grid_type: GridType,
    screw_size: ScrewSize,
}

/// Active feature totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureCounts {
    pub connectors: usize,
    pub tile_chamfers: usize,
    pub screws: usize,
}

impl FeatureCounts {
    pub fn total(&self) -> usize {
        self.connectors + self.tile_chamfers + self.screws
    }
}

impl GridPlan {
    /// Assembles a plan, validating shape and eligibility.
    ///
    /// ## Errors
    ///
    /// - [`PlanError::DimensionMismatch`] if `summits` is not (R+1) x (C+1)
    /// - [`PlanError::IneligibleFeature`] for a feature the layout forbids
    /// - [`PlanError::StaleConnector`] for a connector pointing the wrong way
    pub fn new(
        tiles: TileGrid,
        summits: SummitGrid<SummitFeatures>,
        grid_type: GridType,
        screw_size: ScrewSize,
    ) -> Result<Self, PlanError> {
        check_shape(&tiles, &summits)?;
        check_eligibility(&summits, &Eligibility::compute(&tiles))?;
        Ok(Self::assemble(tiles, summits, grid_type, screw_size))
    }

    /// Plan with no active features.
    pub fn bare(tiles: TileGrid, grid_type: GridType, screw_size: ScrewSize) -> Self {
        let summits = SummitGrid::default_for(&tiles);
        Self::assemble(tiles, summits, grid_type, screw_size)
    }

    /// Caller guarantees the summits were selected or pruned against the
    /// eligibility of `tiles`.
    pub(crate) fn assemble(
        tiles: TileGrid,
        summits: SummitGrid<SummitFeatures>,
        grid_type: GridType,
        screw_size: ScrewSize,
    ) -> Self {
        debug_assert!(check_shape(&tiles, &summits).is_ok());
        Self {
            tiles,
            summits,
            grid_type,
            screw_size,
        }
    }

    pub fn tiles(&self) -> &TileGrid {
        &self.tiles
    }

    pub fn summits(&self) -> &SummitGrid<SummitFeatures> {
        &self.summits
    }

    pub fn grid_type(&self) -> GridType {
        self.grid_type
    }

    pub fn screw_size(&self) -> ScrewSize {
        self.screw_size
    }

    pub fn rows(&self) -> usize {
        self.tiles.rows()
    }

    pub fn cols(&self) -> usize {
        self.tiles.cols()
    }

    /// Features at summit `(i, j)`, `None` when out of range.
    pub fn summit(&self, i: usize, j: usize) -> Option<SummitFeatures> {
        self.summits.get(i, j).copied()
    }

    /// Active features with their summit positions, row-major.
    pub fn active_features(&self) -> impl Iterator<Item = ((usize, usize), SummitFeature)> + '_ {
        self.summits
            .iter()
            .filter_map(|(pos, features)| features.feature().map(|f| (pos, f)))
    }

    pub fn feature_counts(&self) -> FeatureCounts {
        let mut counts = FeatureCounts::default();
        for (_, feature) in self.active_features() {
            match feature.kind() {
                FeatureKind::Connector => counts.connectors += 1,
                FeatureKind::TileChamfer => counts.tile_chamfers += 1,
                FeatureKind::Screw => counts.screws += 1,
            }
        }
        counts
    }

    pub fn into_parts(self) -> (TileGrid, SummitGrid<SummitFeatures>, GridType, ScrewSize) {
        (self.tiles, self.summits, self.grid_type, self.screw_size)
    }
}

fn check_shape(tiles: &TileGrid, summits: &SummitGrid<SummitFeatures>) -> Result<(), PlanError> {
    if summits.rows() != tiles.summit_rows() || summits.cols() != tiles.summit_cols() {
        return Err(PlanError::DimensionMismatch {
            rows: tiles.rows(),
            cols: tiles.cols(),
            found_rows: summits.rows(),
            found_cols: summits.cols(),
        });
    }
    Ok(())
}

/// Fails on the first active feature that `eligibility` does not allow.
pub fn check_eligibility(
    summits: &SummitGrid<SummitFeatures>,
    eligibility: &Eligibility,
) -> Result<(), PlanError> {
    for ((row, col), features) in summits.iter() {
        let Some(feature) = features.feature() else {
            continue;
        };
        let ineligible = || PlanError::IneligibleFeature {
            row,
            col,
            kind: feature.kind(),
        };
        match feature {
            SummitFeature::Connector(found) => {
                let expected = eligibility.connector_direction(row, col).ok_or_else(ineligible)?;
                if found != expected {
                    return Err(PlanError::StaleConnector {
                        row,
                        col,
                        found: found.degrees(),
                        expected: expected.degrees(),
                    });
                }
            }
            SummitFeature::TileChamfer if !eligibility.chamfer(row, col) => return Err(ineligible()),
            SummitFeature::Screw if !eligibility.screw(row, col) => return Err(ineligible()),
            SummitFeature::TileChamfer | SummitFeature::Screw => {}
        }
    }
    Ok(())
}

// =============================================================================
// STRUCTURED RECORD
// =============================================================================

/// Serialized shape of a plan; field names follow the plan files produced
/// by the reference tooling.
#[derive(Serialize, Deserialize)]
pub(crate) struct GridPlanRecord {
    tiles: TileGrid,
    summits: Vec<Vec<SummitFeatures>>,
    #[serde(default)]
    opengrid_type: GridType,
    #[serde(default)]
    screw_size: ScrewSize,
}

impl TryFrom<GridPlanRecord> for GridPlan {
    type Error = PlanError;

    fn try_from(record: GridPlanRecord) -> Result<Self, Self::Error> {
        let summits = SummitGrid::from_rows(record.summits)?;
        Self::new(record.tiles, summits, record.opengrid_type, record.screw_size)
    }
}

impl From<GridPlan> for GridPlanRecord {
    fn from(plan: GridPlan) -> Self {
        Self {
            summits: plan.summits.to_rows(),
            tiles: plan.tiles,
            opengrid_type: plan.grid_type,
            screw_size: plan.screw_size,
        }
    }
}
