use opengrid_layout::{Eligibility, TileGrid};
use opengrid_plan::{
    build_plan, check_eligibility, export, prune_features, GridType, PlanEditor, PlanOptions,
    ScrewPlacement, ScrewSize,
};
use proptest::prelude::*;

fn layout() -> impl Strategy<Value = TileGrid> {
    (1usize..=6, 1usize..=6)
        .prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec(any::<bool>(), cols), rows)
        })
        .prop_map(|rows| TileGrid::from_bools(&rows).unwrap())
}

/// Two layouts of the same shape.
fn layout_pair() -> impl Strategy<Value = (TileGrid, TileGrid)> {
    (1usize..=6, 1usize..=6).prop_flat_map(|(rows, cols)| {
        let grid = move || {
            prop::collection::vec(prop::collection::vec(any::<bool>(), cols), rows)
                .prop_map(|rows| TileGrid::from_bools(&rows).unwrap())
        };
        (grid(), grid())
    })
}

/// Screw sizes on the 0.1 mm grid that fit the compact payload.
fn screw_size() -> impl Strategy<Value = ScrewSize> {
    (1u8..=254)
        .prop_flat_map(|diameter| (Just(diameter), diameter + 1..=u8::MAX, 1u8..=u8::MAX))
        .prop_map(|(diameter, head, inset)| {
            let mm = |units: u8| f64::from(units) / 10.0;
            ScrewSize::new(mm(diameter), mm(head), mm(inset)).unwrap()
        })
}

fn options() -> impl Strategy<Value = PlanOptions> {
    (
        any::<bool>(),
        any::<bool>(),
        prop_oneof![
            Just(ScrewPlacement::None),
            Just(ScrewPlacement::Corners),
            Just(ScrewPlacement::All)
        ],
        any::<bool>(),
        any::<bool>(),
        prop::option::of(screw_size()),
    )
        .prop_map(|(connectors, chamfers, screws, outer, lite, screw_size)| {
            let options = PlanOptions::default()
                .with_connectors(connectors)
                .with_tile_chamfers(chamfers)
                .with_screws(screws)
                .with_outer_chamfers_with_screws(outer)
                .with_grid_type(if lite { GridType::Lite } else { GridType::Full });
            match screw_size {
                Some(screw_size) => options.with_screw_size(screw_size),
                None => options,
            }
        })
}

proptest! {
    #[test]
    fn built_plans_are_consistent(tiles in layout(), options in options()) {
        let plan = build_plan(&tiles, &options);
        prop_assert!(check_eligibility(plan.summits(), &Eligibility::compute(&tiles)).is_ok());
        prop_assert_eq!(plan.summits().rows(), tiles.rows() + 1);
        prop_assert_eq!(plan.summits().cols(), tiles.cols() + 1);
    }

    #[test]
    fn prune_is_idempotent((tiles, edited) in layout_pair(), options in options()) {
        // features built for one layout, pruned against another
        let plan = build_plan(&tiles, &options);
        let eligibility = Eligibility::compute(&edited);
        let once = prune_features(plan.summits(), &eligibility);
        let twice = prune_features(&once, &eligibility);
        prop_assert!(check_eligibility(&once, &eligibility).is_ok());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn edits_keep_the_plan_consistent(
        tiles in layout(),
        toggles in prop::collection::vec((0usize..6, 0usize..6), 0..8),
    ) {
        let options = PlanOptions::all_features().with_screws(ScrewPlacement::All);
        let mut editor = PlanEditor::new(tiles, &options);
        for (row, col) in toggles {
            // out-of-range toggles are rejected and leave the plan untouched
            let _ = editor.toggle_tile(row, col);
            let plan = editor.snapshot();
            prop_assert!(check_eligibility(plan.summits(), &Eligibility::compute(plan.tiles())).is_ok());
        }
    }

    #[test]
    fn add_then_remove_row_restores_tiles(rows in 1usize..=5, cols in 1usize..=5) {
        let options = PlanOptions::all_features().with_screws(ScrewPlacement::All);
        let original = build_plan(&TileGrid::filled(rows, cols).unwrap(), &options);
        let mut editor = PlanEditor::from_plan(original.clone());
        editor.add_row().unwrap();
        editor.remove_row().unwrap();

        prop_assert_eq!(editor.tiles(), original.tiles());
        for i in 0..rows {
            for j in 0..=cols {
                prop_assert_eq!(editor.summits()[(i, j)], original.summits()[(i, j)]);
            }
        }
    }

    #[test]
    fn json_round_trip(tiles in layout(), options in options()) {
        let plan = build_plan(&tiles, &options);
        let json = export::to_json(&plan).unwrap();
        prop_assert_eq!(export::from_json(&json).unwrap(), plan);
    }
}
