//! # Compact Code Tests

use approx::assert_relative_eq;
use opengrid_layout::{ConnectorAngle, TileGrid};
use opengrid_plan::{
    build_plan, GridType, PlanEditor, PlanError, PlanOptions, ScrewPlacement, ScrewSize,
    SummitFeatures,
};

use crate::*;

const CANONICAL: &str = "0.f.2.2.KlAK.8A._4A";

fn all_features() -> PlanOptions {
    PlanOptions::all_features().with_screws(ScrewPlacement::All)
}

// =============================================================================
// ENCODE
// =============================================================================

#[test]
fn test_encode_canonical() {
    let plan = build_plan(&TileGrid::filled(2, 2).unwrap(), &all_features());
    assert_eq!(encode(&plan).unwrap(), CANONICAL);
}

#[test]
fn test_encode_bare_lite() {
    let options = PlanOptions::default().with_grid_type(GridType::Lite);
    let plan = build_plan(&TileGrid::filled(2, 2).unwrap(), &options);
    assert_eq!(encode(&plan).unwrap(), "0.l.2.2.KUgK.8A.AAA");
}

#[test]
fn test_encode_rejects_oversized_screw() {
    let screw = ScrewSize::new(30.0, 40.0, 1.0).unwrap();
    let options = PlanOptions::default().with_screw_size(screw);
    let plan = build_plan(&TileGrid::filled(1, 1).unwrap(), &options);
    assert!(matches!(
        encode(&plan),
        Err(CompactError::ScrewOutOfRange { name: "diameter", .. })
    ));
}

#[test]
fn test_encode_rejects_screws_that_round_to_zero() {
    for (screw, name) in [
        (ScrewSize::new(0.04, 8.0, 1.0).unwrap(), "diameter"),
        (ScrewSize::new(4.2, 8.0, 0.04).unwrap(), "head_inset"),
    ] {
        let options = PlanOptions::default().with_screw_size(screw);
        let plan = build_plan(&TileGrid::filled(1, 1).unwrap(), &options);
        match encode(&plan) {
            Err(CompactError::ScrewOutOfRange { name: found, .. }) => assert_eq!(found, name),
            other => panic!("expected {name} out of range, got {other:?}"),
        }
    }
}

#[test]
fn test_encode_rejects_head_collapsing_onto_shaft() {
    let screw = ScrewSize::new(4.2, 4.24, 1.0).unwrap();
    let options = PlanOptions::default().with_screw_size(screw);
    let plan = build_plan(&TileGrid::filled(1, 1).unwrap(), &options);
    assert!(matches!(
        encode(&plan),
        Err(CompactError::ScrewHeadCollapsed { .. })
    ));
}

#[test]
fn test_encode_smallest_screw_steps_decode() {
    let screw = ScrewSize::new(0.1, 0.2, 0.1).unwrap();
    let options = PlanOptions::default().with_screw_size(screw);
    let plan = build_plan(&TileGrid::filled(1, 1).unwrap(), &options);
    let decoded = decode(&encode(&plan).unwrap()).unwrap();
    assert_eq!(decoded.screw_size(), screw);
}

#[test]
fn test_encode_rounds_half_to_even() {
    let screw = ScrewSize::new(4.25, 8.0, 1.0).unwrap();
    let options = PlanOptions::default().with_screw_size(screw);
    let plan = build_plan(&TileGrid::filled(2, 2).unwrap(), &options);
    assert_eq!(encode(&plan).unwrap(), "0.f.2.2.KlAK.8A.AAA");
}

#[test]
fn test_encode_type_char() {
    assert_eq!(encode::type_char(GridType::Full), 'f');
    assert_eq!(encode::type_char(GridType::Lite), 'l');
}

// =============================================================================
// DECODE
// =============================================================================

#[test]
fn test_decode_canonical() {
    let plan = decode(CANONICAL).unwrap();
    assert_eq!(plan.grid_type(), GridType::Full);
    assert_eq!(plan.tiles(), &TileGrid::filled(2, 2).unwrap());

    let counts = plan.feature_counts();
    assert_eq!((counts.connectors, counts.tile_chamfers, counts.screws), (4, 4, 1));
    assert_eq!(
        plan.summit(0, 1),
        Some(SummitFeatures::connector(ConnectorAngle::Down))
    );
    assert_eq!(plan.summit(1, 1), Some(SummitFeatures::screw()));

    let screw = plan.screw_size();
    assert_relative_eq!(screw.diameter(), 4.2);
    assert_relative_eq!(screw.head_diameter(), 8.0);
    assert_relative_eq!(screw.head_inset(), 1.0);
}

#[test]
fn test_decode_canonical_matches_built_plan() {
    let built = build_plan(&TileGrid::filled(2, 2).unwrap(), &all_features());
    assert_eq!(decode(CANONICAL).unwrap(), built);
}

#[test]
fn test_decode_no_features() {
    let plan = decode("0.f.2.2.HkEF.8A.AAA").unwrap();
    assert_eq!(plan.tiles().tile_count(), 4);
    assert_eq!(plan.feature_counts().total(), 0);
    let screw = plan.screw_size();
    assert_relative_eq!(screw.diameter(), 3.0);
    assert_relative_eq!(screw.head_diameter(), 6.5);
    assert_relative_eq!(screw.head_inset(), 0.5);
}

#[test]
fn test_decode_lite() {
    let plan = decode("0.l.1.1.KUgK.gA.8A").unwrap();
    assert_eq!(plan.grid_type(), GridType::Lite);
    assert_eq!(plan.screw_size(), ScrewSize::default_for(GridType::Lite));
    assert_eq!(plan.feature_counts().tile_chamfers, 4);
}

#[test]
fn test_decode_recomputes_connector_direction() {
    let plan = decode("0.f.1.2.KlAK.wA._A").unwrap();
    assert_eq!(
        plan.summit(0, 1),
        Some(SummitFeatures::connector(ConnectorAngle::Down))
    );
    assert_eq!(
        plan.summit(1, 1),
        Some(SummitFeatures::connector(ConnectorAngle::Up))
    );
    assert_eq!(plan.feature_counts().tile_chamfers, 4);
}

#[test]
fn test_decode_tolerates_padding() {
    assert_eq!(
        decode("0.f.2.2.KlAK.8A==._4A=").unwrap(),
        decode(CANONICAL).unwrap()
    );
}

#[test]
fn test_decode_ignores_trailing_payload_bytes() {
    assert_eq!(
        decode("0.f.2.2.KlAK.8AAA._4A").unwrap(),
        decode(CANONICAL).unwrap()
    );
}

#[test]
fn test_decode_rejects_inconsistent_summit() {
    // diagonal tiles: center summit allows nothing
    assert_eq!(
        decode("0.f.2.2.KlAK.kA.CAA").unwrap_err(),
        CompactError::InconsistentSummit { row: 1, col: 1 }
    );
}

// =============================================================================
// DECODE VALIDATION
// =============================================================================

#[test]
fn test_decode_field_count() {
    assert_eq!(
        decode("0.f.2.2.KlAK.8A").unwrap_err(),
        CompactError::FieldCount {
            expected: 7,
            found: 6
        }
    );
    assert!(matches!(
        decode("0.f.2.2.KlAK.8A._4A.x"),
        Err(CompactError::FieldCount { found: 8, .. })
    ));
    assert!(matches!(decode(""), Err(CompactError::FieldCount { found: 1, .. })));
}

#[test]
fn test_decode_version() {
    assert_eq!(
        decode("1.f.2.2.KlAK.8A._4A").unwrap_err(),
        CompactError::UnsupportedVersion("1".into())
    );
}

#[test]
fn test_decode_type() {
    assert_eq!(
        decode("0.x.2.2.KlAK.8A._4A").unwrap_err(),
        CompactError::InvalidType("x".into())
    );
    assert!(matches!(
        decode("0.F.2.2.KlAK.8A._4A"),
        Err(CompactError::InvalidType(_))
    ));
}

#[test]
fn test_decode_dimensions() {
    assert!(matches!(
        decode("0.f.two.2.KlAK.8A._4A"),
        Err(CompactError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        decode("0.f.2..KlAK.8A._4A"),
        Err(CompactError::InvalidDimensions { .. })
    ));
    assert_eq!(
        decode("0.f.0.2.KlAK.8A._4A").unwrap_err(),
        CompactError::DimensionTooSmall { rows: 0, cols: 2 }
    );
    assert_eq!(
        decode("0.f.2.-1.KlAK.8A._4A").unwrap_err(),
        CompactError::DimensionTooSmall { rows: 2, cols: -1 }
    );
    assert!(matches!(
        decode("0.f.2000.2.KlAK.8A._4A"),
        Err(CompactError::DimensionTooLarge { rows: 2000, .. })
    ));
}

#[test]
fn test_decode_invalid_base64() {
    assert!(matches!(
        decode("0.f.2.2.K!AK.8A._4A"),
        Err(CompactError::InvalidBase64 { field: "screw", .. })
    ));
    assert!(matches!(
        decode("0.f.2.2.KlAK.8*._4A"),
        Err(CompactError::InvalidBase64 { field: "tiles", .. })
    ));
    assert!(matches!(
        decode("0.f.2.2.KlAK.8A.+4A"),
        Err(CompactError::InvalidBase64 { field: "summits", .. })
    ));
}

#[test]
fn test_decode_screw_length() {
    assert_eq!(
        decode("0.f.2.2.KlA.8A._4A").unwrap_err(),
        CompactError::ScrewLength {
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn test_decode_rejects_invalid_screw_size() {
    // head narrower than the shaft
    assert!(matches!(
        decode("0.f.2.2.PDIK.8A.AAA"),
        Err(CompactError::Plan(PlanError::InvalidScrewSize(_)))
    ));
    // zero diameter
    assert!(matches!(
        decode("0.f.2.2.AFAK.8A.AAA"),
        Err(CompactError::Plan(PlanError::InvalidScrewSize(_)))
    ));
}

#[test]
fn test_decode_short_payloads() {
    assert_eq!(
        decode("0.f.3.3.KlAK.8A._4A").unwrap_err(),
        CompactError::InsufficientTiles {
            needed: 2,
            found: 1
        }
    );
    assert_eq!(
        decode("0.f.2.2.KlAK.8A.8A").unwrap_err(),
        CompactError::InsufficientFeatures {
            needed: 2,
            found: 1
        }
    );
}

// =============================================================================
// ROUND TRIP
// =============================================================================

#[test]
fn test_round_trip_edited_plan() {
    let tiles = TileGrid::filled(3, 4).unwrap();
    let mut editor = PlanEditor::new(tiles, &PlanOptions::all_features());
    editor.toggle_tile(1, 1).unwrap();
    editor.toggle_summit(2, 3).unwrap();
    editor.add_col().unwrap();

    let plan = editor.snapshot();
    assert_eq!(decode(&encode(&plan).unwrap()).unwrap(), plan);
}

#[test]
fn test_round_trip_custom_screw() {
    let screw = ScrewSize::new(3.5, 6.8, 1.2).unwrap();
    let options = all_features().with_screw_size(screw);
    let plan = build_plan(&TileGrid::filled(2, 3).unwrap(), &options);
    let decoded = decode(&encode(&plan).unwrap()).unwrap();
    assert_relative_eq!(decoded.screw_size().diameter(), 3.5);
    assert_relative_eq!(decoded.screw_size().head_diameter(), 6.8);
    assert_relative_eq!(decoded.screw_size().head_inset(), 1.2);
    assert_eq!(decoded.summits(), plan.summits());
}
