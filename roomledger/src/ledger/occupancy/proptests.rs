//! Property-based tests for the occupancy tree.
//!
//! The tree is checked against `BTreeSet` under random inserts and removes.

use super::OccupancyTree;
use crate::room::RoomNumber;
use proptest::prelude::*;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
enum Op {
    Insert(u32),
    Remove(u32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // A narrow key space keeps duplicates and two-child removals frequent.
    prop_oneof![
        (1u32..64).prop_map(Op::Insert),
        (1u32..64).prop_map(Op::Remove),
    ]
}

fn room(n: u32) -> RoomNumber {
    RoomNumber::try_from(n).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_matches_btreeset(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut tree = OccupancyTree::new();
        let mut model = BTreeSet::new();

        for op in &ops {
            match *op {
                Op::Insert(n) => prop_assert_eq!(tree.insert(room(n)), model.insert(n)),
                Op::Remove(n) => prop_assert_eq!(tree.remove(room(n)), model.remove(&n)),
            }
        }

        let expected: Vec<RoomNumber> = model.iter().copied().map(room).collect();
        prop_assert_eq!(tree.in_order(), expected);
        for n in 1u32..64 {
            prop_assert_eq!(tree.contains(room(n)), model.contains(&n));
        }
    }

    #[test]
    fn prop_in_order_is_sorted(keys in prop::collection::vec(1u32..10_000, 0..100)) {
        let mut tree = OccupancyTree::new();
        for &k in &keys {
            tree.insert(room(k));
        }

        let order = tree.in_order();
        prop_assert!(order.windows(2).all(|w| w[0] < w[1]));
    }
}
