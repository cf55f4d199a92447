//! Concurrent booking stress test
//!
//! Many sessions fight over the same table and overlapping slots; the
//! per-table ledger must admit exactly one winner per trial, regardless
//! of interleaving.

use byk_core::{BookingError, ReservationScheduler};
use chrono::{NaiveTime, TimeZone, Utc};
use shared::models::{Brand, Restaurant, RestaurantId, Table, TableId, TimeSlot, WorkingHours, Zone};
use std::sync::Arc;

const TRIALS: usize = 50;
const CONCURRENCY: usize = 8;

fn restaurant() -> Restaurant {
    Restaurant {
        id: RestaurantId(1),
        name: "THE БЫК Арбат".to_string(),
        brand: Brand::TheByk,
        address: "Арбат 10".to_string(),
        working_hours: WorkingHours::uniform(
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
        ),
    }
}

fn table() -> Table {
    Table {
        id: TableId(5),
        restaurant_id: RestaurantId(1),
        capacity: 6,
        zone: Zone::MainHall,
    }
}

fn slot(day: u32, h: u32, m: u32) -> TimeSlot {
    TimeSlot::new(Utc.with_ymd_and_hms(2025, 7, day, h, m, 0).unwrap(), 90)
}

#[test]
fn exactly_one_booking_wins_per_overlapping_slot() {
    let restaurant = Arc::new(restaurant());
    let table = Arc::new(table());

    for trial in 0..TRIALS {
        let scheduler = Arc::new(ReservationScheduler::new());
        // Staggered but all mutually overlapping within 19:00-20:30.
        let handles: Vec<_> = (0..CONCURRENCY)
            .map(|i| {
                let scheduler = Arc::clone(&scheduler);
                let restaurant = Arc::clone(&restaurant);
                let table = Arc::clone(&table);
                std::thread::spawn(move || {
                    let s = slot(1, 19, (i as u32) * 5);
                    scheduler.book(&restaurant, &table, s, 2)
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let wins = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(wins, 1, "trial {trial}: expected exactly one winner");
        for r in results {
            if let Err(e) = r {
                assert!(matches!(e, BookingError::TableUnavailable { .. }));
            }
        }
    }
}

#[test]
fn non_overlapping_slots_all_win_concurrently() {
    let restaurant = Arc::new(restaurant());
    let table = Arc::new(table());
    let scheduler = Arc::new(ReservationScheduler::new());

    // 12:00, 13:00, 14:00, ... back to back hour slots, never overlapping
    let handles: Vec<_> = (0..CONCURRENCY as u32)
        .map(|i| {
            let scheduler = Arc::clone(&scheduler);
            let restaurant = Arc::clone(&restaurant);
            let table = Arc::clone(&table);
            std::thread::spawn(move || {
                let start = Utc.with_ymd_and_hms(2025, 7, 2, 12 + i, 0, 0).unwrap();
                scheduler.book(&restaurant, &table, TimeSlot::new(start, 60), 2)
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap().expect("adjacent slots must not collide");
    }
    assert_eq!(
        scheduler.reservations_for_table(TableId(5)).len(),
        CONCURRENCY
    );
}

#[test]
fn cancel_then_rebook_race_admits_one_winner() {
    let restaurant = Arc::new(restaurant());
    let table = Arc::new(table());

    for _ in 0..TRIALS {
        let scheduler = Arc::new(ReservationScheduler::new());
        let held = scheduler
            .book(&restaurant, &table, slot(3, 19, 0), 4)
            .unwrap();
        scheduler.cancel(held.id).unwrap();

        // Slot is free again; the rebook race still has a single winner.
        let handles: Vec<_> = (0..CONCURRENCY)
            .map(|_| {
                let scheduler = Arc::clone(&scheduler);
                let restaurant = Arc::clone(&restaurant);
                let table = Arc::clone(&table);
                std::thread::spawn(move || scheduler.book(&restaurant, &table, slot(3, 19, 0), 4))
            })
            .collect();
        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(Result::is_ok)
            .count();
        assert_eq!(wins, 1);
    }
}
