//! # Corner Screws
//!
//! Restricts screw placement to the corners of each screw-eligible region
//! instead of every interior intersection.

use crate::summit::SummitGrid;

/// Filters screw-eligible positions down to corners.
///
/// A position is a corner when it is eligible and has no pass-through on
/// either axis: its left and right neighbors are not both eligible, and its
/// top and bottom neighbors are not both eligible. Out-of-range neighbors
/// count as not eligible.
///
/// ## Example
///
/// ```rust
/// use opengrid_layout::{compute_screw_positions, corner_screw_positions, TileGrid};
///
/// let tiles = TileGrid::filled(4, 4).unwrap();
/// let corners = corner_screw_positions(&compute_screw_positions(&tiles));
/// assert_eq!(corners.positions(), vec![(1, 1), (1, 3), (3, 1), (3, 3)]);
/// ```
pub fn corner_screw_positions(eligible: &SummitGrid<bool>) -> SummitGrid<bool> {
    let at = |i: usize, di: isize, j: usize, dj: isize| -> bool {
        match (i.checked_add_signed(di), j.checked_add_signed(dj)) {
            (Some(r), Some(c)) => eligible.get(r, c).copied().unwrap_or(false),
            _ => false,
        }
    };

    eligible.map(|(i, j), &is_eligible| {
        if !is_eligible {
            return false;
        }
        let horizontal_through = at(i, 0, j, -1) && at(i, 0, j, 1);
        let vertical_through = at(i, -1, j, 0) && at(i, 1, j, 0);
        !horizontal_through && !vertical_through
    })
}
