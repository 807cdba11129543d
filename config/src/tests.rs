//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// SCREW TESTS
// =============================================================================

#[test]
fn test_full_defaults_match_reference_tiles() {
    assert_eq!(DEFAULT_SCREW_DIAMETER, 4.2);
    assert_eq!(DEFAULT_SCREW_HEAD_DIAMETER, 8.0);
    assert_eq!(DEFAULT_SCREW_HEAD_INSET, 1.0);
}

#[test]
fn test_lite_defaults_match_reference_tiles() {
    assert_eq!(LITE_DEFAULT_SCREW_DIAMETER, 4.1);
    assert_eq!(LITE_DEFAULT_SCREW_HEAD_DIAMETER, 7.2);
    assert_eq!(LITE_DEFAULT_SCREW_HEAD_INSET, 1.0);
}

#[test]
fn test_default_screws_fit_in_payload_byte() {
    for value in [
        DEFAULT_SCREW_DIAMETER,
        DEFAULT_SCREW_HEAD_DIAMETER,
        DEFAULT_SCREW_HEAD_INSET,
        LITE_DEFAULT_SCREW_DIAMETER,
        LITE_DEFAULT_SCREW_HEAD_DIAMETER,
        LITE_DEFAULT_SCREW_HEAD_INSET,
    ] {
        assert!(value <= MAX_SCREW_MM, "{value} does not fit in a byte");
    }
}

#[test]
fn test_screw_payload_range_is_0_1_to_25_5_mm() {
    assert!(approx_equal(MIN_SCREW_MM, 0.1));
    assert!(approx_equal(MAX_SCREW_MM, 25.5));
}

// =============================================================================
// COMPACT CODE TESTS
// =============================================================================

#[test]
fn test_compact_layout_constants() {
    assert_eq!(COMPACT_FORMAT_VERSION, "0");
    assert_eq!(COMPACT_FIELD_COUNT, 7);
    assert_eq!(SCREW_PAYLOAD_BYTES, 3);
}

#[test]
fn test_packed_len_rounds_up() {
    assert_eq!(packed_len(1), 1);
    assert_eq!(packed_len(8), 1);
    assert_eq!(packed_len(9), 2);
    assert_eq!(packed_len(16), 2);
}

// =============================================================================
// DEFAULTS SNAPSHOT TESTS
// =============================================================================

#[test]
fn test_snapshot_defaults() {
    let full = PlannerDefaults::default();
    let lite = PlannerDefaults::lite();
    assert_eq!(full.screw_diameter, DEFAULT_SCREW_DIAMETER);
    assert_eq!(lite.screw_diameter, LITE_DEFAULT_SCREW_DIAMETER);
}

#[test]
fn test_snapshot_defaults_are_encodable() {
    for defaults in [PlannerDefaults::default(), PlannerDefaults::lite()] {
        for value in [
            defaults.screw_diameter,
            defaults.screw_head_diameter,
            defaults.screw_head_inset,
        ] {
            assert!((MIN_SCREW_MM..=MAX_SCREW_MM).contains(&value), "{value}");
        }
        assert!(defaults.screw_head_diameter > defaults.screw_diameter);
    }
}
