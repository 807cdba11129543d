//! # Decoder
//!
//! Validation runs field by field in wire order and stops at the first
//! problem. Tiles are unpacked before summits so eligibility is known by the
//! time summit bits are resolved.

use config::constants::{
    packed_len, COMPACT_FIELD_COUNT, COMPACT_FIELD_SEPARATOR, COMPACT_FORMAT_VERSION,
    MAX_GRID_DIMENSION, SCREW_PAYLOAD_BYTES, SCREW_UNITS_PER_MM,
};
use opengrid_layout::{Eligibility, SummitGrid, TileGrid};
use opengrid_plan::{GridPlan, GridType, ScrewSize, SummitFeature, SummitFeatures};
use tracing::{debug, warn};

use crate::bits::{decode_payload, unpack_bits};
use crate::error::CompactError;

/// Decodes and validates a compact code.
///
/// ## Errors
///
/// One [`CompactError`] variant per malformed field, plus
/// [`CompactError::InconsistentSummit`] when a summit bit is set where the
/// layout allows no feature. Such a code is rejected outright rather than
/// decoded with the bit dropped.
///
/// ## Example
///
/// ```rust
/// let plan = opengrid_compact::decode("0.f.2.2.KlAK.8A._4A").unwrap();
/// assert_eq!(plan.tiles().tile_count(), 4);
/// assert_eq!(plan.feature_counts().total(), 9);
/// ```
pub fn decode(code: &str) -> Result<GridPlan, CompactError> {
    decode_fields(code).inspect_err(|err| warn!(%err, code, "rejected compact code"))
}

fn decode_fields(code: &str) -> Result<GridPlan, CompactError> {
    let fields: Vec<&str> = code.split(COMPACT_FIELD_SEPARATOR).collect();
    let [version, type_field, rows_field, cols_field, screw_field, tiles_field, summits_field] =
        fields[..]
    else {
        return Err(CompactError::FieldCount {
            expected: COMPACT_FIELD_COUNT,
            found: fields.len(),
        });
    };

    if version != COMPACT_FORMAT_VERSION {
        return Err(CompactError::UnsupportedVersion(version.to_string()));
    }
    let grid_type = parse_type(type_field)?;
    let (rows, cols) = parse_dimensions(rows_field, cols_field)?;
    let screw_size = decode_screw(screw_field)?;

    let tile_bytes = decode_payload("tiles", tiles_field)?;
    let tile_bits =
        unpack_bits(&tile_bytes, rows * cols).ok_or(CompactError::InsufficientTiles {
            needed: packed_len(rows * cols),
            found: tile_bytes.len(),
        })?;
    let tile_rows: Vec<Vec<bool>> = tile_bits.chunks(cols).map(<[bool]>::to_vec).collect();
    let tiles = TileGrid::from_bools(&tile_rows).map_err(opengrid_plan::PlanError::from)?;

    let summit_count = tiles.summit_rows() * tiles.summit_cols();
    let summit_bytes = decode_payload("summits", summits_field)?;
    let summit_bits =
        unpack_bits(&summit_bytes, summit_count).ok_or(CompactError::InsufficientFeatures {
            needed: packed_len(summit_count),
            found: summit_bytes.len(),
        })?;

    let summits = resolve_summits(&tiles, &summit_bits)?;
    let plan = GridPlan::new(tiles, summits, grid_type, screw_size)?;
    debug!(rows, cols, %grid_type, "decoded plan");
    Ok(plan)
}

fn parse_type(field: &str) -> Result<GridType, CompactError> {
    match field {
        "f" => Ok(GridType::Full),
        "l" => Ok(GridType::Lite),
        _ => Err(CompactError::InvalidType(field.to_string())),
    }
}

fn parse_dimensions(rows: &str, cols: &str) -> Result<(usize, usize), CompactError> {
    let (Ok(r), Ok(c)) = (rows.parse::<i64>(), cols.parse::<i64>()) else {
        return Err(CompactError::InvalidDimensions {
            rows: rows.to_string(),
            cols: cols.to_string(),
        });
    };
    if r < 1 || c < 1 {
        return Err(CompactError::DimensionTooSmall { rows: r, cols: c });
    }
    match (usize::try_from(r), usize::try_from(c)) {
        (Ok(r), Ok(c)) if r <= MAX_GRID_DIMENSION && c <= MAX_GRID_DIMENSION => Ok((r, c)),
        _ => Err(CompactError::DimensionTooLarge {
            rows: r,
            cols: c,
            max: MAX_GRID_DIMENSION,
        }),
    }
}

fn decode_screw(field: &str) -> Result<ScrewSize, CompactError> {
    let bytes = decode_payload("screw", field)?;
    let [diameter, head_diameter, head_inset] = bytes[..] else {
        return Err(CompactError::ScrewLength {
            expected: SCREW_PAYLOAD_BYTES,
            found: bytes.len(),
        });
    };
    let mm = |units: u8| f64::from(units) / SCREW_UNITS_PER_MM;
    Ok(ScrewSize::new(mm(diameter), mm(head_diameter), mm(head_inset))?)
}

/// Turns summit bits into features, connector first, then chamfer, then
/// screw.
///
/// The order only matters if eligibility ever stops being mutually
/// exclusive. Today at most one of the three holds per summit, so a set bit
/// is unambiguous; a layout rule that let two overlap would make the decoder
/// silently pick the first.
fn resolve_summits(
    tiles: &TileGrid,
    bits: &[bool],
) -> Result<SummitGrid<SummitFeatures>, CompactError> {
    let eligibility = Eligibility::compute(tiles);
    let mut summits = SummitGrid::default_for(tiles);
    let cols = summits.cols();

    for (index, _) in bits.iter().enumerate().filter(|(_, bit)| **bit) {
        let (i, j) = (index / cols, index % cols);
        let feature = if let Some(angle) = eligibility.connector_direction(i, j) {
            SummitFeature::Connector(angle)
        } else if eligibility.chamfer(i, j) {
            SummitFeature::TileChamfer
        } else if eligibility.screw(i, j) {
            SummitFeature::Screw
        } else {
            return Err(CompactError::InconsistentSummit { row: i, col: j });
        };
        summits[(i, j)] = SummitFeatures::from(feature);
    }
    Ok(summits)
}
