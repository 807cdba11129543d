//! # Tile Grid
//!
//! Rectangular R x C layout of [`Slot`]s, stored row-major.
//!
//! Row 0 is the top of the panel and rows grow downwards; column 0 is the
//! left edge and columns grow to the right.
//!
//! ## Example
//!
//! ```rust
//! use opengrid_layout::{Slot, TileGrid};
//!
//! let mut grid = TileGrid::filled(2, 3).unwrap();
//! grid.set(0, 1, Slot::Hole).unwrap();
//! assert!(!grid.is_tile(0, 1));
//! assert!(!grid.is_tile(-1, 0)); // out of range reads as a hole
//! ```

use std::fmt;
use std::str::FromStr;

use config::constants::MAX_GRID_DIMENSION;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::slot::Slot;

// =============================================================================
// AXIS
// =============================================================================

/// Direction of a resize operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

// =============================================================================
// TILE GRID
// =============================================================================

/// An R x C layout of slots, R and C both at least 1.
///
/// Serializes as a nested list of booleans (`true` = tile).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")]
pub struct TileGrid {
    rows: usize,
    cols: usize,
    slots: Vec<Slot>,
}

impl TileGrid {
    /// Creates a grid with every slot set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: Slot) -> Result<Self, LayoutError> {
        check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            slots: vec![fill; rows * cols],
        })
    }

    /// Creates an all-tile grid.
    pub fn filled(rows: usize, cols: usize) -> Result<Self, LayoutError> {
        Self::new(rows, cols, Slot::Tile)
    }

    /// Builds a grid from explicit rows of slots.
    ///
    /// ## Errors
    ///
    /// Fails on an empty layout or on rows of differing length.
    pub fn from_rows(rows: &[Vec<Slot>]) -> Result<Self, LayoutError> {
        Self::collect_rows(rows.iter().map(|row| row.iter().copied()))
    }

    /// Builds a grid from rows of booleans (`true` = tile).
    pub fn from_bools(rows: &[Vec<bool>]) -> Result<Self, LayoutError> {
        Self::collect_rows(rows.iter().map(|row| row.iter().map(|&t| Slot::from(t))))
    }

    fn collect_rows<R, S>(rows: R) -> Result<Self, LayoutError>
    where
        R: ExactSizeIterator<Item = S>,
        S: Iterator<Item = Slot>,
    {
        let n_rows = rows.len();
        let mut cols = None;
        let mut slots = Vec::new();
        for (r, row) in rows.enumerate() {
            let before = slots.len();
            slots.extend(row);
            let found = slots.len() - before;
            match cols {
                None => cols = Some(found),
                Some(expected) if expected != found => {
                    return Err(LayoutError::RaggedRows {
                        row: r,
                        expected,
                        found,
                    })
                }
                Some(_) => {}
            }
        }
        let cols = cols.unwrap_or(0);
        check_dimensions(n_rows, cols)?;
        Ok(Self {
            rows: n_rows,
            cols,
            slots,
        })
    }

    /// Number of slot rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of slot columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of summit rows, `rows + 1`.
    #[inline]
    pub fn summit_rows(&self) -> usize {
        self.rows + 1
    }

    /// Number of summit columns, `cols + 1`.
    #[inline]
    pub fn summit_cols(&self) -> usize {
        self.cols + 1
    }

    /// Slot at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Slot> {
        if row < self.rows && col < self.cols {
            Some(self.slots[row * self.cols + col])
        } else {
            None
        }
    }

    /// Bounds-checked tile lookup. Anything outside the grid is a hole.
    #[inline]
    pub fn is_tile(&self, row: isize, col: isize) -> bool {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) => self.get(r, c).is_some_and(Slot::is_tile),
            _ => false,
        }
    }

    /// Replaces the slot at `(row, col)`, returning the previous value.
    pub fn set(&mut self, row: usize, col: usize, slot: Slot) -> Result<Slot, LayoutError> {
        let index = self.index(row, col)?;
        Ok(std::mem::replace(&mut self.slots[index], slot))
    }

    /// Flips the slot at `(row, col)`, returning the new value.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Slot, LayoutError> {
        let index = self.index(row, col)?;
        let slot = self.slots[index].toggled();
        self.slots[index] = slot;
        Ok(slot)
    }

    /// Appends a row at the bottom.
    pub fn push_row(&mut self, fill: Slot) -> Result<(), LayoutError> {
        check_dimensions(self.rows + 1, self.cols)?;
        self.slots.extend(std::iter::repeat(fill).take(self.cols));
        self.rows += 1;
        Ok(())
    }

    /// Removes the bottom row. The last remaining row cannot be removed.
    pub fn pop_row(&mut self) -> Result<(), LayoutError> {
        if self.rows <= 1 {
            return Err(LayoutError::MinimumSize(Axis::Row));
        }
        self.rows -= 1;
        self.slots.truncate(self.rows * self.cols);
        Ok(())
    }

    /// Appends a column on the right.
    pub fn push_col(&mut self, fill: Slot) -> Result<(), LayoutError> {
        check_dimensions(self.rows, self.cols + 1)?;
        let cols = self.cols;
        let mut slots = Vec::with_capacity(self.rows * (cols + 1));
        for row in self.slots.chunks(cols) {
            slots.extend_from_slice(row);
            slots.push(fill);
        }
        self.slots = slots;
        self.cols += 1;
        Ok(())
    }

    /// Removes the rightmost column. The last remaining column cannot be removed.
    pub fn pop_col(&mut self) -> Result<(), LayoutError> {
        if self.cols <= 1 {
            return Err(LayoutError::MinimumSize(Axis::Column));
        }
        let cols = self.cols;
        self.slots = self
            .slots
            .chunks(cols)
            .flat_map(|row| row[..cols - 1].iter().copied())
            .collect();
        self.cols -= 1;
        Ok(())
    }

    /// Slots in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Slot> + '_ {
        self.slots.iter().copied()
    }

    /// Number of tile slots.
    pub fn tile_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_tile()).count()
    }

    /// Nested boolean rows (`true` = tile).
    pub fn to_bools(&self) -> Vec<Vec<bool>> {
        self.slots
            .chunks(self.cols)
            .map(|row| row.iter().map(|s| s.is_tile()).collect())
            .collect()
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, LayoutError> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(LayoutError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

impl TryFrom<Vec<Vec<bool>>> for TileGrid {
    type Error = LayoutError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Self::from_bools(&rows)
    }
}

impl From<TileGrid> for Vec<Vec<bool>> {
    fn from(grid: TileGrid) -> Self {
        grid.to_bools()
    }
}

impl fmt::Display for TileGrid {
    /// Renders `#` for tiles and `.` for holes, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.slots.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for slot in row {
                f.write_str(if slot.is_tile() { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<(), LayoutError> {
    if rows == 0 || cols == 0 {
        return Err(LayoutError::EmptyGrid { rows, cols });
    }
    if rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
        return Err(LayoutError::TooLarge {
            rows,
            cols,
            max: MAX_GRID_DIMENSION,
        });
    }
    Ok(())
}

// =============================================================================
// GRID SIZE
// =============================================================================

/// A `ROWSxCOLS` size, as typed by users (`"2x4"`, `"3X3"`).
///
/// ## Example
///
/// ```rust
/// use opengrid_layout::GridSize;
///
/// let size: GridSize = "2x4".parse().unwrap();
/// let grid = size.to_grid().unwrap();
/// assert_eq!((grid.rows(), grid.cols()), (2, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    /// All-tile grid of this size.
    pub fn to_grid(self) -> Result<TileGrid, LayoutError> {
        TileGrid::filled(self.rows, self.cols)
    }
}

impl FromStr for GridSize {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LayoutError::InvalidSize(s.to_string());
        let lower = s.trim().to_ascii_lowercase();
        let (rows, cols) = lower.split_once('x').ok_or_else(invalid)?;
        let rows: usize = rows.parse().map_err(|_| invalid())?;
        let cols: usize = cols.parse().map_err(|_| invalid())?;
        if rows < 1 || cols < 1 {
            return Err(invalid());
        }
        Ok(Self { rows, cols })
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
