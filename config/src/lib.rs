//! # Config Crate
//!
//! Centralized configuration constants for the openGrid planning pipeline.
//! Default screw sizes, codec parameters and grid limits are defined here so
//! the layout, plan and compact crates agree on a single set of values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SCREW_DIAMETER, SCREW_UNITS_PER_MM};
//!
//! // Screw sizes travel through the compact code in 0.1 mm units
//! let units = (DEFAULT_SCREW_DIAMETER * SCREW_UNITS_PER_MM).round_ties_even() as u8;
//! assert_eq!(units, 42);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency Free**: Pure values, usable from any crate in the workspace
//! - **Reference Compatible**: Defaults match the published openGrid tiles

pub mod constants;

#[cfg(test)]
mod tests;
