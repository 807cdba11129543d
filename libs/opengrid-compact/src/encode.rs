//! # Encoder

use config::constants::{
    COMPACT_FIELD_SEPARATOR, COMPACT_FORMAT_VERSION, MAX_SCREW_MM, MIN_SCREW_MM,
    SCREW_UNITS_PER_MM,
};
use opengrid_layout::Slot;
use opengrid_plan::{GridPlan, GridType, ScrewSize, SummitFeatures};
use tracing::debug;

use crate::bits::{encode_payload, pack_bits};
use crate::error::CompactError;

/// Type character of the second field.
pub(crate) fn type_char(grid_type: GridType) -> char {
    match grid_type {
        GridType::Full => 'f',
        GridType::Lite => 'l',
    }
}

/// Encodes a plan as a compact code.
///
/// Only summit activity is stored; which feature a set bit means is
/// recomputed from the tiles on decode.
///
/// ## Errors
///
/// - [`CompactError::ScrewOutOfRange`] if a screw dimension rounds outside
///   0.1-25.5 mm
/// - [`CompactError::ScrewHeadCollapsed`] if the head rounds to no wider
///   than the shaft
///
/// ## Example
///
/// ```rust
/// use opengrid_layout::TileGrid;
/// use opengrid_plan::{build_plan, PlanOptions, ScrewPlacement};
///
/// let options = PlanOptions::all_features().with_screws(ScrewPlacement::All);
/// let plan = build_plan(&TileGrid::filled(2, 2).unwrap(), &options);
/// assert_eq!(opengrid_compact::encode(&plan).unwrap(), "0.f.2.2.KlAK.8A._4A");
/// ```
pub fn encode(plan: &GridPlan) -> Result<String, CompactError> {
    let screw = encode_payload(&screw_bytes(plan.screw_size())?);
    let tiles = encode_payload(&pack_bits(plan.tiles().iter().map(Slot::is_tile)));
    let summits = encode_payload(&pack_bits(plan.summits().values().map(SummitFeatures::is_active)));

    let fields = [
        COMPACT_FORMAT_VERSION.to_string(),
        type_char(plan.grid_type()).to_string(),
        plan.rows().to_string(),
        plan.cols().to_string(),
        screw,
        tiles,
        summits,
    ];
    let code = fields.join(&COMPACT_FIELD_SEPARATOR.to_string());
    debug!(rows = plan.rows(), cols = plan.cols(), len = code.len(), "encoded plan");
    Ok(code)
}

/// `[diameter, head_diameter, head_inset]` in 0.1 mm units.
///
/// Rounds half to even. Every stored dimension must be at least one unit and
/// the head must stay wider than the shaft after rounding, so the bytes
/// decode back to a valid [`ScrewSize`].
fn screw_bytes(screw: ScrewSize) -> Result<[u8; 3], CompactError> {
    let unit = |name: &'static str, value: f64| -> Result<u8, CompactError> {
        let units = (value * SCREW_UNITS_PER_MM).round_ties_even();
        if !(1.0..=f64::from(u8::MAX)).contains(&units) {
            return Err(CompactError::ScrewOutOfRange {
                name,
                value,
                min: MIN_SCREW_MM,
                max: MAX_SCREW_MM,
            });
        }
        Ok(units as u8)
    };
    let diameter = unit("diameter", screw.diameter())?;
    let head_diameter = unit("head_diameter", screw.head_diameter())?;
    let head_inset = unit("head_inset", screw.head_inset())?;
    if head_diameter <= diameter {
        return Err(CompactError::ScrewHeadCollapsed {
            diameter: screw.diameter(),
            head_diameter: screw.head_diameter(),
        });
    }
    Ok([diameter, head_diameter, head_inset])
}
