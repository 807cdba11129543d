//! # Structured Export
//!
//! JSON form of a [`GridPlan`] for the geometry stage and for humans.
//!
//! ```json
//! {
//!   "tiles": [[true, true]],
//!   "summits": [[{"connector_angle": null, "tile_chamfer": true, "screw": false}, ...]],
//!   "opengrid_type": "full",
//!   "screw_size": {"diameter": 4.2, "head_diameter": 8.0, "head_inset": 1.0}
//! }
//! ```
//!
//! Import validates the shape and the eligibility of every active feature,
//! so a plan read back from disk is as trustworthy as a freshly built one.

use tracing::{debug, warn};

use crate::error::PlanError;
use crate::plan::{GridPlan, GridPlanRecord};

/// Compact single-line JSON.
pub fn to_json(plan: &GridPlan) -> Result<String, PlanError> {
    Ok(serde_json::to_string(plan)?)
}

/// Indented JSON.
pub fn to_json_pretty(plan: &GridPlan) -> Result<String, PlanError> {
    Ok(serde_json::to_string_pretty(plan)?)
}

/// Parses and validates a plan.
///
/// Structural problems surface as [`PlanError::Json`]; layout and
/// eligibility problems keep their own variants.
pub fn from_json(json: &str) -> Result<GridPlan, PlanError> {
    let record: GridPlanRecord = serde_json::from_str(json)?;
    let plan = GridPlan::try_from(record).inspect_err(|err| warn!(%err, "rejected plan file"))?;
    debug!(rows = plan.rows(), cols = plan.cols(), "loaded plan");
    Ok(plan)
}
