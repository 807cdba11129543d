use opengrid_layout::{
    chamfer_eligible, connector_direction, connector_eligible, corner_screw_positions,
    screw_eligible, Eligibility, EligibilityCache, Neighbors, TileGrid,
};
use proptest::prelude::*;

fn layout() -> impl Strategy<Value = TileGrid> {
    (1usize..=6, 1usize..=6)
        .prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec(any::<bool>(), cols), rows)
        })
        .prop_map(|rows| TileGrid::from_bools(&rows).unwrap())
}

proptest! {
    #[test]
    fn at_most_one_feature_per_summit(tiles in layout()) {
        for i in 0..tiles.summit_rows() {
            for j in 0..tiles.summit_cols() {
                let active = [
                    connector_eligible(&tiles, i, j),
                    chamfer_eligible(&tiles, i, j),
                    screw_eligible(&tiles, i, j),
                ]
                .into_iter()
                .filter(|&b| b)
                .count();
                prop_assert!(active <= 1);
            }
        }
    }

    #[test]
    fn snapshot_agrees_with_predicates(tiles in layout()) {
        let eligibility = Eligibility::compute(&tiles);
        for i in 0..tiles.summit_rows() {
            for j in 0..tiles.summit_cols() {
                prop_assert_eq!(eligibility.connector(i, j), connector_eligible(&tiles, i, j));
                prop_assert_eq!(eligibility.chamfer(i, j), chamfer_eligible(&tiles, i, j));
                prop_assert_eq!(eligibility.screw(i, j), screw_eligible(&tiles, i, j));
                if let Some(direction) = eligibility.connector_direction(i, j) {
                    prop_assert_eq!(direction, connector_direction(&tiles, i, j));
                }
                prop_assert_eq!(
                    eligibility.kind_at(i, j),
                    Neighbors::around(&tiles, i, j).eligible_feature()
                );
            }
        }
    }

    #[test]
    fn corner_screws_are_eligible_subset(tiles in layout()) {
        let eligibility = Eligibility::compute(&tiles);
        let corners = corner_screw_positions(eligibility.screws());
        for ((i, j), &corner) in corners.iter() {
            if corner {
                prop_assert!(eligibility.screw(i, j));
            }
        }
    }

    #[test]
    fn cache_returns_fresh_eligibility(a in layout(), b in layout()) {
        let mut cache = EligibilityCache::new();
        prop_assert_eq!(cache.get(&a), &Eligibility::compute(&a));
        prop_assert_eq!(cache.get(&b), &Eligibility::compute(&b));
        prop_assert_eq!(cache.get(&a), &Eligibility::compute(&a));
    }
}
