//! # openGrid Compact Codes
//!
//! Single-line, URL-safe encoding of a [`GridPlan`](opengrid_plan::GridPlan).
//!
//! ## Format (version 0)
//!
//! ```text
//! 0.{TYPE}.{ROWS}.{COLS}.{SCREW}.{TILES}.{SUMMITS}
//! ```
//!
//! | Field     | Content                                                     |
//! |-----------|-------------------------------------------------------------|
//! | `0`       | format version                                              |
//! | `TYPE`    | `f` full, `l` lite                                          |
//! | `ROWS`    | tile rows, decimal                                          |
//! | `COLS`    | tile columns, decimal                                       |
//! | `SCREW`   | 3 bytes in 0.1 mm: diameter, head diameter, head inset      |
//! | `TILES`   | R×C bits, 1 = tile, row-major, MSB first                    |
//! | `SUMMITS` | (R+1)×(C+1) bits, 1 = feature active, row-major, MSB first  |
//!
//! Binary fields are base64url without `=` padding; padding is accepted on
//! decode. Both dimensions are stored because byte packing loses the exact
//! bit count.
//!
//! Summit bits say only *whether* a summit is active. The decoder recomputes
//! eligibility from the tiles and resolves each set bit to the one feature
//! that summit allows, re-deriving connector rotation. This relies on
//! connector, chamfer and screw eligibility staying mutually exclusive; if
//! that ever changes, codes become ambiguous.
//!
//! ## Example
//!
//! ```rust
//! use opengrid_layout::TileGrid;
//! use opengrid_plan::{build_plan, PlanOptions};
//!
//! let plan = build_plan(&TileGrid::filled(3, 2).unwrap(), &PlanOptions::all_features());
//! let code = opengrid_compact::encode(&plan).unwrap();
//! assert_eq!(opengrid_compact::decode(&code).unwrap(), plan);
//! ```

pub mod bits;
pub mod decode;
pub mod encode;
pub mod error;

pub use decode::decode;
pub use encode::encode;
pub use error::CompactError;

#[cfg(test)]
mod tests;
