//! Property-based tests for saving and loading record files.

use crate::catalog::RoomTypeSelector;
use crate::config::{HotelConfig, RoomNumbersConfig, RoomTypeConfig};
use crate::engine::BookingEngine;
use crate::persistence::PersistenceCoordinator;
use crate::reservation::Reservation;
use proptest::prelude::*;
use rust_decimal::Decimal;
use tempfile::TempDir;

const DATE: &str = "07-01-2025";

fn inn() -> HotelConfig {
    HotelConfig {
        name: "Harbour Inn".to_string(),
        records_dir: None,
        room_types: vec![
            RoomTypeConfig {
                name: "Single, Harbour View".to_string(),
                price_per_night: Decimal::new(8925, 2),
                rooms: RoomNumbersConfig::Range { low: 1, high: 4 },
            },
            RoomTypeConfig {
                name: "Suite".to_string(),
                price_per_night: Decimal::from(410),
                rooms: RoomNumbersConfig::List(vec![20, 21]),
            },
        ],
    }
}

fn sorted(reservations: &[Reservation]) -> Vec<Reservation> {
    let mut out = reservations.to_vec();
    out.sort_by_key(Reservation::room_number);
    out
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_save_then_load_restores_the_day(
        bookings in prop::collection::vec(
            (1usize..=2, "[A-Za-z]{1,8}", 1u32..=7, 0u8..=23),
            1..8,
        ),
        undos in 0usize..3,
    ) {
        let temp = TempDir::new().unwrap();
        let coordinator = PersistenceCoordinator::in_dir(temp.path());
        let mut engine = BookingEngine::from_config(&inn()).unwrap();

        for (option, guest, nights, hour) in &bookings {
            let _ = engine.reserve(&RoomTypeSelector::Option(*option), guest, DATE, *nights, *hour);
        }
        for _ in 0..undos {
            engine.undo().unwrap();
        }
        prop_assume!(!engine.reservations().is_empty());

        let saved = coordinator.save(&engine, DATE).unwrap();
        prop_assert_eq!(saved.revenue, engine.total_revenue());

        let mut reloaded = BookingEngine::from_config(&inn()).unwrap();
        let report = coordinator.load(&mut reloaded, DATE).unwrap();

        prop_assert!(report.is_clean());
        prop_assert_eq!(report.restored, engine.reservations().len());
        prop_assert_eq!(report.recorded_revenue, Some(engine.total_revenue()));
        prop_assert_eq!(reloaded.total_revenue(), engine.total_revenue());
        prop_assert_eq!(sorted(reloaded.reservations()), sorted(engine.reservations()));
        prop_assert_eq!(reloaded.occupied_rooms_in_order(), engine.occupied_rooms_in_order());
        prop_assert!(reloaded.check_consistency().is_ok());
    }
}
