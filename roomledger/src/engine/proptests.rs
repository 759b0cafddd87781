//! Property-based tests for the booking engine.
//!
//! Random interleavings of bookings and undos must keep every index in
//! step, and a booking followed by an undo must leave no trace.

use crate::catalog::RoomTypeSelector;
use crate::config::{HotelConfig, RoomNumbersConfig, RoomTypeConfig};
use crate::engine::BookingEngine;
use proptest::prelude::*;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
enum Op {
    Reserve {
        option: usize,
        guest: usize,
        nights: u32,
        hour: u8,
    },
    Undo,
}

const GUESTS: [&str; 4] = ["Alice", "Bob", "Carol", "Dave"];

// Small enough that random runs regularly exhaust a type.
fn small_hotel() -> HotelConfig {
    HotelConfig {
        name: "Tiny Inn".to_string(),
        records_dir: None,
        room_types: vec![
            RoomTypeConfig {
                name: "Cabin".to_string(),
                price_per_night: Decimal::new(9950, 2),
                rooms: RoomNumbersConfig::Range { low: 1, high: 3 },
            },
            RoomTypeConfig {
                name: "Loft".to_string(),
                price_per_night: Decimal::from(240),
                rooms: RoomNumbersConfig::List(vec![12, 10, 11]),
            },
        ],
    }
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (1usize..=3, 0usize..GUESTS.len(), 1u32..=5, 0u8..=23).prop_map(
            |(option, guest, nights, hour)| Op::Reserve { option, guest, nights, hour }
        ),
        1 => Just(Op::Undo),
    ]
}

fn apply(engine: &mut BookingEngine, op: &Op) {
    match op {
        Op::Reserve {
            option,
            guest,
            nights,
            hour,
        } => {
            // Option 3 does not exist; its failures must not disturb state.
            let _ = engine.reserve(
                &RoomTypeSelector::Option(*option),
                GUESTS[*guest],
                "07-01-2025",
                *nights,
                *hour,
            );
        }
        Op::Undo => {
            let _ = engine.undo();
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_indexes_stay_consistent(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut engine = BookingEngine::from_config(&small_hotel()).unwrap();
        for op in &ops {
            apply(&mut engine, op);
            prop_assert!(engine.check_consistency().is_ok(), "{:?}", engine.check_consistency());

            for entry in engine.availability_report() {
                prop_assert_eq!(entry.available + entry.occupied, entry.total);
            }
            prop_assert!(engine.total_revenue() >= Decimal::ZERO);
        }
    }

    #[test]
    fn prop_reserve_then_undo_is_identity(
        prefix in prop::collection::vec(op_strategy(), 0..20),
        option in 1usize..=2,
        guest in 0usize..GUESTS.len(),
        nights in 1u32..=5,
    ) {
        let mut engine = BookingEngine::from_config(&small_hotel()).unwrap();
        for op in &prefix {
            apply(&mut engine, op);
        }
        let before = engine.ledger().clone();

        if engine
            .reserve(&RoomTypeSelector::Option(option), GUESTS[guest], "07-01-2025", nights, 15)
            .is_ok()
        {
            prop_assert!(engine.undo().unwrap().is_some());
        }
        prop_assert_eq!(engine.ledger(), &before);
    }

    #[test]
    fn prop_undo_reverses_in_lifo_order(
        bookings in prop::collection::vec((1usize..=2, 0usize..GUESTS.len()), 0..6),
    ) {
        let mut engine = BookingEngine::from_config(&small_hotel()).unwrap();
        let empty = engine.ledger().clone();

        let mut booked = Vec::new();
        for (option, guest) in &bookings {
            if let Ok(r) = engine.reserve(&RoomTypeSelector::Option(*option), GUESTS[*guest], "d", 1, 15) {
                booked.push(r.room_number());
            }
        }

        while let Some(expected) = booked.pop() {
            let action = engine.undo().unwrap().unwrap();
            prop_assert_eq!(action.room_number, expected);
        }
        prop_assert!(engine.undo().unwrap().is_none());
        prop_assert_eq!(engine.ledger(), &empty);
    }
}
