//! # Plan Editor
//!
//! Mutable working copy of a plan for interactive editing.
//!
//! Every layout mutation runs the same pipeline: mutate tiles (and resize
//! the summit grid in lockstep), re-derive eligibility, prune. The editor
//! therefore always holds an eligibility-consistent plan, and
//! [`PlanEditor::snapshot`] hands out an immutable [`GridPlan`].
//!
//! ## Example
//!
//! ```rust
//! use opengrid_layout::TileGrid;
//! use opengrid_plan::{PlanEditor, PlanOptions};
//!
//! let tiles = TileGrid::filled(2, 2).unwrap();
//! let mut editor = PlanEditor::new(tiles, &PlanOptions::all_features());
//! editor.add_row().unwrap();
//! editor.toggle_tile(0, 0).unwrap();
//! let plan = editor.snapshot();
//! assert_eq!(plan.rows(), 3);
//! ```

use opengrid_layout::{Eligibility, EligibilityCache, Slot, SummitGrid, TileGrid};
use tracing::{debug, warn};

use crate::builder::select_features;
use crate::error::PlanError;
use crate::options::PlanOptions;
use crate::plan::GridPlan;
use crate::prune::{cleared_count, prune_features};
use crate::types::{GridType, ScrewSize, SummitFeature, SummitFeatures};

/// Live, always-consistent plan under edit.
#[derive(Debug, Clone)]
pub struct PlanEditor {
    tiles: TileGrid,
    summits: SummitGrid<SummitFeatures>,
    grid_type: GridType,
    screw_size: ScrewSize,
    cache: EligibilityCache,
}

impl PlanEditor {
    /// Starts from a freshly built plan.
    pub fn new(tiles: TileGrid, options: &PlanOptions) -> Self {
        let mut cache = EligibilityCache::new();
        let summits = select_features(&tiles, cache.get(&tiles), options);
        Self {
            tiles,
            summits,
            grid_type: options.grid_type,
            screw_size: options.resolved_screw_size(),
            cache,
        }
    }

    /// Starts from an existing plan.
    pub fn from_plan(plan: GridPlan) -> Self {
        let (tiles, summits, grid_type, screw_size) = plan.into_parts();
        Self {
            tiles,
            summits,
            grid_type,
            screw_size,
            cache: EligibilityCache::new(),
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

    /// Eligibility of the current layout.
    pub fn eligibility(&mut self) -> &Eligibility {
        self.cache.get(&self.tiles)
    }

    /// Immutable copy of the current state.
    pub fn snapshot(&self) -> GridPlan {
        GridPlan::assemble(
            self.tiles.clone(),
            self.summits.clone(),
            self.grid_type,
            self.screw_size,
        )
    }

    // =========================================================================
    // TILE EDITS
    // =========================================================================

    /// Sets slot `(row, col)` and re-prunes.
    pub fn set_tile(&mut self, row: usize, col: usize, slot: Slot) -> Result<(), PlanError> {
        let previous = self
            .tiles
            .set(row, col, slot)
            .inspect_err(|err| warn!(%err, "rejected tile edit"))?;
        if previous != slot {
            debug!(row, col, ?slot, "set tile");
            self.revalidate();
        }
        Ok(())
    }

    /// Flips slot `(row, col)` and re-prunes, returning the new state.
    pub fn toggle_tile(&mut self, row: usize, col: usize) -> Result<Slot, PlanError> {
        let slot = self
            .tiles
            .toggle(row, col)
            .inspect_err(|err| warn!(%err, "rejected tile toggle"))?;
        debug!(row, col, ?slot, "toggled tile");
        self.revalidate();
        Ok(slot)
    }

    // =========================================================================
    // RESIZE
    // =========================================================================

    /// Appends a row of tiles at the bottom.
    pub fn add_row(&mut self) -> Result<(), PlanError> {
        self.tiles
            .push_row(Slot::Tile)
            .inspect_err(|err| warn!(%err, "rejected row addition"))?;
        self.summits.push_row_with(|_| SummitFeatures::NONE);
        debug!(rows = self.tiles.rows(), "added row");
        self.revalidate();
        Ok(())
    }

    /// Removes the bottom row; the last row cannot be removed.
    pub fn remove_row(&mut self) -> Result<(), PlanError> {
        self.tiles.pop_row().inspect_err(|err| warn!(%err, "rejected row removal"))?;
        self.summits.pop_row();
        debug!(rows = self.tiles.rows(), "removed row");
        self.revalidate();
        Ok(())
    }

    /// Appends a column of tiles on the right.
    pub fn add_col(&mut self) -> Result<(), PlanError> {
        self.tiles
            .push_col(Slot::Tile)
            .inspect_err(|err| warn!(%err, "rejected column addition"))?;
        self.summits.push_col_with(|_| SummitFeatures::NONE);
        debug!(cols = self.tiles.cols(), "added column");
        self.revalidate();
        Ok(())
    }

    /// Removes the rightmost column; the last column cannot be removed.
    pub fn remove_col(&mut self) -> Result<(), PlanError> {
        self.tiles.pop_col().inspect_err(|err| warn!(%err, "rejected column removal"))?;
        self.summits.pop_col();
        debug!(cols = self.tiles.cols(), "removed column");
        self.revalidate();
        Ok(())
    }

    // =========================================================================
    // FEATURE EDITS
    // =========================================================================

    /// Clears an active summit, or activates its eligible feature.
    ///
    /// Returns the feature now active at `(i, j)`.
    ///
    /// ## Errors
    ///
    /// [`PlanError::NothingToToggle`] when the summit is inactive and not
    /// eligible for anything (or out of range).
    pub fn toggle_summit(&mut self, i: usize, j: usize) -> Result<Option<SummitFeature>, PlanError> {
        let current = self
            .summits
            .get(i, j)
            .copied()
            .ok_or(PlanError::NothingToToggle { row: i, col: j })?;

        let next = if current.is_active() {
            SummitFeatures::NONE
        } else {
            let eligibility = self.cache.get(&self.tiles);
            let feature = match eligibility.connector_direction(i, j) {
                Some(angle) => Some(SummitFeature::Connector(angle)),
                None if eligibility.chamfer(i, j) => Some(SummitFeature::TileChamfer),
                None if eligibility.screw(i, j) => Some(SummitFeature::Screw),
                None => None,
            };
            match feature {
                Some(feature) => SummitFeatures::from(feature),
                None => {
                    warn!(i, j, "summit has no eligible feature");
                    return Err(PlanError::NothingToToggle { row: i, col: j });
                }
            }
        };

        self.summits[(i, j)] = next;
        debug!(i, j, feature = ?next.feature(), "toggled summit");
        Ok(next.feature())
    }

    /// Re-runs feature selection over the current tiles.
    pub fn apply_options(&mut self, options: &PlanOptions) {
        self.summits = select_features(&self.tiles, self.cache.get(&self.tiles), options);
        self.grid_type = options.grid_type;
        self.screw_size = options.resolved_screw_size();
        debug!(grid_type = %self.grid_type, "applied options");
    }

    pub fn set_grid_type(&mut self, grid_type: GridType) {
        self.grid_type = grid_type;
    }

    pub fn set_screw_size(&mut self, screw_size: ScrewSize) {
        self.screw_size = screw_size;
    }

    /// Re-derives eligibility and prunes. Runs after every layout mutation.
    fn revalidate(&mut self) {
        let eligibility = self.cache.get(&self.tiles);
        let pruned = prune_features(&self.summits, eligibility);
        let cleared = cleared_count(&self.summits, &pruned);
        if cleared > 0 {
            debug!(cleared, "pruned ineligible features");
        }
        self.summits = pruned;
    }
}
