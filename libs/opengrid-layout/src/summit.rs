//! # Summits
//!
//! Summits are the grid-line intersections of a layout. An R x C grid has
//! (R+1) x (C+1) summits; summit `(i, j)` touches the four slots
//!
//! ```text
//!   (i-1, j-1) | (i-1, j)
//!   -----------+----------
//!   (i,   j-1) | (i,   j)
//! ```
//!
//! read as top-left, top-right, bottom-left, bottom-right. Slots outside the
//! grid count as holes.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::LayoutError;
use crate::grid::TileGrid;

// =============================================================================
// FEATURE KINDS
// =============================================================================

/// The three mutually exclusive features a summit can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    Connector,
    TileChamfer,
    Screw,
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureKind::Connector => f.write_str("connector"),
            FeatureKind::TileChamfer => f.write_str("tile chamfer"),
            FeatureKind::Screw => f.write_str("screw"),
        }
    }
}

/// Z-rotation of a connector cutout.
///
/// The cutout's canonical orientation points along +X; the rotation turns
/// it towards the tile material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectorAngle {
    /// 0°: tiles on the right.
    Right,
    /// 90°: tiles above.
    Up,
    /// 180°: tiles on the left.
    Left,
    /// -90°: tiles below.
    Down,
}

impl ConnectorAngle {
    /// Rotation in degrees, one of `-90, 0, 90, 180`.
    pub fn degrees(self) -> f64 {
        match self {
            ConnectorAngle::Right => 0.0,
            ConnectorAngle::Up => 90.0,
            ConnectorAngle::Left => 180.0,
            ConnectorAngle::Down => -90.0,
        }
    }

    /// Inverse of [`ConnectorAngle::degrees`]. Other angles yield `None`.
    pub fn from_degrees(degrees: f64) -> Option<Self> {
        [
            ConnectorAngle::Right,
            ConnectorAngle::Up,
            ConnectorAngle::Left,
            ConnectorAngle::Down,
        ]
        .into_iter()
        .find(|angle| angle.degrees() == degrees)
    }
}

// =============================================================================
// NEIGHBORS
// =============================================================================

/// Tile occupancy of the four slots around one summit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Neighbors {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
}

impl Neighbors {
    /// Reads the neighbors of summit `(i, j)` from `tiles`.
    pub fn around(tiles: &TileGrid, i: usize, j: usize) -> Self {
        let (i, j) = (i as isize, j as isize);
        Self {
            top_left: tiles.is_tile(i - 1, j - 1),
            top_right: tiles.is_tile(i - 1, j),
            bottom_left: tiles.is_tile(i, j - 1),
            bottom_right: tiles.is_tile(i, j),
        }
    }

    /// Builds a pattern from the low four bits of `bits`:
    /// bit 3 = top-left, bit 2 = top-right, bit 1 = bottom-left,
    /// bit 0 = bottom-right.
    pub fn from_bits(bits: u8) -> Self {
        Self {
            top_left: bits & 0b1000 != 0,
            top_right: bits & 0b0100 != 0,
            bottom_left: bits & 0b0010 != 0,
            bottom_right: bits & 0b0001 != 0,
        }
    }

    /// Number of neighboring tiles, 0 to 4.
    pub fn tile_count(self) -> usize {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
        .into_iter()
        .filter(|&t| t)
        .count()
    }

    /// Top pair equal, bottom pair equal, top differs from bottom.
    pub fn is_horizontal_split(self) -> bool {
        self.top_left == self.top_right
            && self.bottom_left == self.bottom_right
            && self.top_left != self.bottom_left
    }

    /// Left pair equal, right pair equal, left differs from right.
    pub fn is_vertical_split(self) -> bool {
        self.top_left == self.bottom_left
            && self.top_right == self.bottom_right
            && self.top_left != self.top_right
    }

    /// Connector orientation when the pattern is an edge split.
    pub fn split_direction(self) -> Option<ConnectorAngle> {
        if self.is_horizontal_split() {
            Some(if self.bottom_left {
                ConnectorAngle::Down
            } else {
                ConnectorAngle::Up
            })
        } else if self.is_vertical_split() {
            Some(if self.top_right {
                ConnectorAngle::Right
            } else {
                ConnectorAngle::Left
            })
        } else {
            None
        }
    }

    pub fn is_connector_eligible(self) -> bool {
        self.is_horizontal_split() || self.is_vertical_split()
    }

    pub fn is_chamfer_eligible(self) -> bool {
        self.tile_count() == 1
    }

    pub fn is_screw_eligible(self) -> bool {
        self.top_left && self.top_right && self.bottom_left && self.bottom_right
    }

    /// The single feature this pattern qualifies for, if any.
    ///
    /// Checked in the order connector, chamfer, screw. The predicates never
    /// overlap, so the order only matters if the rules change.
    pub fn eligible_feature(self) -> Option<FeatureKind> {
        if self.is_connector_eligible() {
            Some(FeatureKind::Connector)
        } else if self.is_chamfer_eligible() {
            Some(FeatureKind::TileChamfer)
        } else if self.is_screw_eligible() {
            Some(FeatureKind::Screw)
        } else {
            None
        }
    }
}

// =============================================================================
// SUMMIT GRID
// =============================================================================

/// Per-summit values, stored row-major.
///
/// Indexing with `grid[(i, j)]` panics when out of range, like slice
/// indexing; use [`SummitGrid::get`] for a checked lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SummitGrid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> SummitGrid<T> {
    /// Builds a `rows x cols` grid by calling `f(i, j)` for each position.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                cells.push(f(i, j));
            }
        }
        Self { rows, cols, cells }
    }

    /// Builds a grid sized for the summits of `tiles` by calling `f(i, j)`.
    pub fn for_tiles(tiles: &TileGrid, f: impl FnMut(usize, usize) -> T) -> Self {
        Self::from_fn(tiles.summit_rows(), tiles.summit_cols(), f)
    }

    /// Builds a grid from nested rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, LayoutError> {
        let n_rows = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(n_rows * cols);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(LayoutError::RaggedRows {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        if n_rows == 0 || cols == 0 {
            return Err(LayoutError::EmptyGrid { rows: n_rows, cols });
        }
        Ok(Self {
            rows: n_rows,
            cols,
            cells,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Checked lookup.
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i < self.rows && j < self.cols {
            self.cells.get(i * self.cols + j)
        } else {
            None
        }
    }

    /// Checked mutable lookup.
    pub fn get_mut(&mut self, i: usize, j: usize) -> Option<&mut T> {
        if i < self.rows && j < self.cols {
            self.cells.get_mut(i * self.cols + j)
        } else {
            None
        }
    }

    /// Values in row-major order.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter()
    }

    /// `((i, j), value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, value)| ((index / cols, index % cols), value))
    }

    /// Applies `f` to every value, keeping positions.
    pub fn map<U>(&self, mut f: impl FnMut((usize, usize), &T) -> U) -> SummitGrid<U> {
        SummitGrid {
            rows: self.rows,
            cols: self.cols,
            cells: self.iter().map(|(pos, value)| f(pos, value)).collect(),
        }
    }

    /// Appends a bottom row produced by `f(j)`.
    pub fn push_row_with(&mut self, f: impl FnMut(usize) -> T) {
        self.cells.extend((0..self.cols).map(f));
        self.rows += 1;
    }

    /// Drops the bottom row. A single row is kept.
    pub fn pop_row(&mut self) {
        if self.rows > 1 {
            self.rows -= 1;
            self.cells.truncate(self.rows * self.cols);
        }
    }

    /// Appends a right column produced by `f(i)`.
    pub fn push_col_with(&mut self, mut f: impl FnMut(usize) -> T) {
        let cols = self.cols;
        let mut old = std::mem::take(&mut self.cells).into_iter();
        let mut cells = Vec::with_capacity(self.rows * (cols + 1));
        for i in 0..self.rows {
            cells.extend(old.by_ref().take(cols));
            cells.push(f(i));
        }
        self.cells = cells;
        self.cols += 1;
    }

    /// Drops the rightmost column. A single column is kept.
    pub fn pop_col(&mut self) {
        if self.cols <= 1 {
            return;
        }
        let cols = self.cols;
        let cells = std::mem::take(&mut self.cells);
        self.cells = cells
            .into_iter()
            .enumerate()
            .filter(|(index, _)| index % cols != cols - 1)
            .map(|(_, value)| value)
            .collect();
        self.cols -= 1;
    }
}

impl<T: Clone> SummitGrid<T> {
    /// Grid of `rows x cols` copies of `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    /// Nested rows, top to bottom.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.cells.chunks(self.cols.max(1)).map(<[T]>::to_vec).collect()
    }
}

impl<T: Default> SummitGrid<T> {
    /// Default-valued grid sized for the summits of `tiles`.
    pub fn default_for(tiles: &TileGrid) -> Self {
        Self::for_tiles(tiles, |_, _| T::default())
    }
}

impl SummitGrid<bool> {
    /// Number of `true` positions.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&b| b).count()
    }

    /// Positions holding `true`, row-major.
    pub fn positions(&self) -> Vec<(usize, usize)> {
        self.iter()
            .filter(|(_, value)| **value)
            .map(|(pos, _)| pos)
            .collect()
    }
}

impl<T> Index<(usize, usize)> for SummitGrid<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.rows && j < self.cols,
            "summit ({i}, {j}) out of range for {}x{} grid",
            self.rows,
            self.cols
        );
        &self.cells[i * self.cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for SummitGrid<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(
            i < self.rows && j < self.cols,
            "summit ({i}, {j}) out of range for {}x{} grid",
            self.rows,
            self.cols
        );
        &mut self.cells[i * self.cols + j]
    }
}
