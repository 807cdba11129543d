//! # Eligibility Engine
//!
//! Pure functions mapping a tile layout to per-summit feature eligibility.
//!
//! | Neighbor tiles              | Eligible feature |
//! |-----------------------------|------------------|
//! | 2, sharing an edge          | connector        |
//! | exactly 1                   | tile chamfer     |
//! | all 4                       | screw            |
//! | 0, 2 diagonal, or 3         | none             |
//!
//! Every function here is O(R·C) and deterministic.
//!
//! ## Example
//!
//! ```rust
//! use opengrid_layout::{ConnectorAngle, Eligibility, FeatureKind, TileGrid};
//!
//! let tiles = TileGrid::filled(2, 2).unwrap();
//! let eligibility = Eligibility::compute(&tiles);
//! assert_eq!(eligibility.connector_direction(0, 1), Some(ConnectorAngle::Down));
//! assert_eq!(eligibility.kind_at(1, 1), Some(FeatureKind::Screw));
//! ```

use crate::corners::corner_screw_positions;
use crate::grid::TileGrid;
use crate::summit::{ConnectorAngle, FeatureKind, Neighbors, SummitGrid};

// =============================================================================
// SINGLE-SUMMIT PREDICATES
// =============================================================================

/// Bounds-checked lookup; out of range is not a tile.
#[inline]
pub fn is_tile(tiles: &TileGrid, row: isize, col: isize) -> bool {
    tiles.is_tile(row, col)
}

/// Summit `(i, j)` sits on a straight edge between tiles and holes.
pub fn connector_eligible(tiles: &TileGrid, i: usize, j: usize) -> bool {
    Neighbors::around(tiles, i, j).is_connector_eligible()
}

/// Connector rotation at summit `(i, j)`.
///
/// Returns [`ConnectorAngle::Right`] (0°) when the summit is not an edge
/// split; check [`connector_eligible`] first.
pub fn connector_direction(tiles: &TileGrid, i: usize, j: usize) -> ConnectorAngle {
    Neighbors::around(tiles, i, j)
        .split_direction()
        .unwrap_or(ConnectorAngle::Right)
}

/// Exactly one neighboring tile.
pub fn chamfer_eligible(tiles: &TileGrid, i: usize, j: usize) -> bool {
    Neighbors::around(tiles, i, j).is_chamfer_eligible()
}

/// All four neighbors are tiles.
pub fn screw_eligible(tiles: &TileGrid, i: usize, j: usize) -> bool {
    Neighbors::around(tiles, i, j).is_screw_eligible()
}

// =============================================================================
// WHOLE-GRID POSITIONS
// =============================================================================

/// Connector eligibility for every summit of `tiles`.
pub fn compute_connector_positions(tiles: &TileGrid) -> SummitGrid<bool> {
    SummitGrid::for_tiles(tiles, |i, j| connector_eligible(tiles, i, j))
}

/// Tile chamfer eligibility for every summit of `tiles`.
pub fn compute_chamfer_positions(tiles: &TileGrid) -> SummitGrid<bool> {
    SummitGrid::for_tiles(tiles, |i, j| chamfer_eligible(tiles, i, j))
}

/// Screw eligibility for every summit of `tiles`.
pub fn compute_screw_positions(tiles: &TileGrid) -> SummitGrid<bool> {
    SummitGrid::for_tiles(tiles, |i, j| screw_eligible(tiles, i, j))
}

// =============================================================================
// ELIGIBILITY SNAPSHOT
// =============================================================================

/// All three eligibility grids for one tile layout.
///
/// Connector eligibility is held together with its direction: a summit is
/// connector-eligible exactly when its entry is `Some`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eligibility {
    connectors: SummitGrid<Option<ConnectorAngle>>,
    chamfers: SummitGrid<bool>,
    screws: SummitGrid<bool>,
}

impl Eligibility {
    /// Computes eligibility for every summit in a single pass.
    pub fn compute(tiles: &TileGrid) -> Self {
        let neighbors = SummitGrid::for_tiles(tiles, |i, j| Neighbors::around(tiles, i, j));
        Self {
            connectors: neighbors.map(|_, n| n.split_direction()),
            chamfers: neighbors.map(|_, n| n.is_chamfer_eligible()),
            screws: neighbors.map(|_, n| n.is_screw_eligible()),
        }
    }

    /// Summit rows covered.
    pub fn rows(&self) -> usize {
        self.connectors.rows()
    }

    /// Summit columns covered.
    pub fn cols(&self) -> usize {
        self.connectors.cols()
    }

    /// Connector direction at `(i, j)` if the summit is connector-eligible.
    pub fn connector_direction(&self, i: usize, j: usize) -> Option<ConnectorAngle> {
        self.connectors.get(i, j).copied().flatten()
    }

    /// Whether `(i, j)` is connector-eligible.
    pub fn connector(&self, i: usize, j: usize) -> bool {
        self.connector_direction(i, j).is_some()
    }

    /// Whether `(i, j)` is chamfer-eligible; `false` out of range.
    pub fn chamfer(&self, i: usize, j: usize) -> bool {
        self.chamfers.get(i, j).copied().unwrap_or(false)
    }

    /// Whether `(i, j)` is screw-eligible; `false` out of range.
    pub fn screw(&self, i: usize, j: usize) -> bool {
        self.screws.get(i, j).copied().unwrap_or(false)
    }

    /// Resolves the feature kind at `(i, j)`: connector, then chamfer, then
    /// screw.
    pub fn kind_at(&self, i: usize, j: usize) -> Option<FeatureKind> {
        if self.connector(i, j) {
            Some(FeatureKind::Connector)
        } else if self.chamfer(i, j) {
            Some(FeatureKind::TileChamfer)
        } else if self.screw(i, j) {
            Some(FeatureKind::Screw)
        } else {
            None
        }
    }

    /// Connector directions; `None` where not eligible.
    pub fn connectors(&self) -> &SummitGrid<Option<ConnectorAngle>> {
        &self.connectors
    }

    /// Connector eligibility as booleans.
    pub fn connector_positions(&self) -> SummitGrid<bool> {
        self.connectors.map(|_, direction| direction.is_some())
    }

    /// Chamfer eligibility grid.
    pub fn chamfers(&self) -> &SummitGrid<bool> {
        &self.chamfers
    }

    /// Screw eligibility grid.
    pub fn screws(&self) -> &SummitGrid<bool> {
        &self.screws
    }

    /// Screw-eligible summits that are corners of their eligible region.
    pub fn corner_screws(&self) -> SummitGrid<bool> {
        corner_screw_positions(&self.screws)
    }
}
