//! ReservationScheduler - table/time-slot allocation without double-booking
//!
//! Each table owns a ledger: a sorted interval index of its reservations.
//! The availability check and the insertion happen under the table's own
//! mutex, so two concurrent `book` calls for the same table can never both
//! observe "available". Tables never share a lock, so bookings on
//! different tables proceed in parallel.

use chrono::{DateTime, Datelike, Utc};
use dashmap::DashMap;
use parking_lot::Mutex;
use shared::models::{Reservation, ReservationId, Restaurant, Table, TableId, TimeSlot};
use shared::status::{self, IllegalTransition, Status};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Booking errors. All recoverable by the caller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookingError {
    #[error("{guest_count} guests exceed table capacity of {capacity}")]
    CapacityExceeded { guest_count: u32, capacity: u32 },

    #[error("guest count must be at least 1")]
    InvalidGuestCount,

    #[error("slot falls outside the restaurant's working hours")]
    SlotOutsideHours,

    #[error("table is already reserved for an overlapping slot")]
    TableUnavailable { conflicting: ReservationId },

    #[error("reservation not found: {0}")]
    ReservationNotFound(ReservationId),

    #[error(transparent)]
    Lifecycle(#[from] IllegalTransition),
}

/// Sorted interval index for one table, keyed by slot start.
///
/// Cancelled entries stay in the index for listing but no longer block.
#[derive(Debug, Default)]
struct TableLedger {
    entries: BTreeMap<(DateTime<Utc>, Uuid), Reservation>,
}

impl TableLedger {
    /// First non-cancelled reservation whose slot overlaps `slot`.
    fn find_overlap(&self, slot: &TimeSlot) -> Option<&Reservation> {
        // Only entries starting before our end can overlap (half-open).
        self.entries
            .range(..(slot.end(), Uuid::nil()))
            .map(|(_, r)| r)
            .find(|r| {
                matches!(r.status, Status::Pending | Status::Confirmed) && r.slot.overlaps(slot)
            })
    }

    fn get_mut(&mut self, id: ReservationId) -> Option<&mut Reservation> {
        self.entries.values_mut().find(|r| r.id == id)
    }
}

/// Allocates tables and time slots across concurrent sessions.
#[derive(Debug, Default)]
pub struct ReservationScheduler {
    /// Per-table ledgers; the mutex makes check-then-insert atomic per table
    ledgers: DashMap<TableId, Arc<Mutex<TableLedger>>>,
    /// Reservation id → owning table, for cancel/confirm lookups
    index: DashMap<ReservationId, TableId>,
}

impl ReservationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger for `table_id`, created on first booking.
    fn ledger(&self, table_id: TableId) -> Arc<Mutex<TableLedger>> {
        self.ledgers.entry(table_id).or_default().clone()
    }

    /// Existing ledger only; read paths never allocate.
    fn try_ledger(&self, table_id: TableId) -> Option<Arc<Mutex<TableLedger>>> {
        self.ledgers.get(&table_id).map(|l| l.value().clone())
    }

    /// Allocate `table` for `slot`.
    ///
    /// Fails if the party does not fit the table, the slot lies outside the
    /// restaurant's hours for that weekday, or a pending/confirmed
    /// reservation overlaps. Adjacent slots that merely touch are fine.
    pub fn book(
        &self,
        restaurant: &Restaurant,
        table: &Table,
        slot: TimeSlot,
        guest_count: u32,
    ) -> Result<Reservation, BookingError> {
        debug_assert_eq!(
            table.restaurant_id, restaurant.id,
            "table offered from another restaurant"
        );
        if guest_count == 0 {
            return Err(BookingError::InvalidGuestCount);
        }
        if guest_count > table.capacity {
            return Err(BookingError::CapacityExceeded {
                guest_count,
                capacity: table.capacity,
            });
        }
        let hours = restaurant
            .working_hours
            .for_weekday(slot.start.weekday())
            .ok_or(BookingError::SlotOutsideHours)?;
        if !hours.contains(slot.start.time(), slot.end().time()) {
            return Err(BookingError::SlotOutsideHours);
        }

        let ledger = self.ledger(table.id);
        let mut ledger = ledger.lock();
        // check and insert under one lock
        if let Some(existing) = ledger.find_overlap(&slot) {
            tracing::warn!(
                table = %table.id,
                slot_start = %slot.start,
                conflicting = %existing.id,
                "booking rejected, slot taken"
            );
            return Err(BookingError::TableUnavailable {
                conflicting: existing.id,
            });
        }
        let reservation = Reservation {
            id: ReservationId::new(),
            restaurant_id: restaurant.id,
            table_id: table.id,
            slot,
            guest_count,
            status: Status::Pending,
            special_requests: None,
            created_at: Utc::now(),
        };
        ledger
            .entries
            .insert((slot.start, reservation.id.0), reservation.clone());
        self.index.insert(reservation.id, table.id);
        tracing::info!(
            reservation = %reservation.id,
            table = %table.id,
            slot_start = %slot.start,
            guest_count,
            "reservation booked"
        );
        Ok(reservation)
    }

    /// Move a pending reservation to `CONFIRMED`.
    pub fn confirm(&self, id: ReservationId) -> Result<Reservation, BookingError> {
        self.transition(id, Status::Confirmed)
    }

    /// Cancel a reservation, freeing its slot for future bookings.
    ///
    /// Idempotent: cancelling an already-cancelled reservation is a no-op.
    pub fn cancel(&self, id: ReservationId) -> Result<(), BookingError> {
        let table_id = *self
            .index
            .get(&id)
            .ok_or(BookingError::ReservationNotFound(id))?;
        let ledger = self
            .try_ledger(table_id)
            .ok_or(BookingError::ReservationNotFound(id))?;
        let mut ledger = ledger.lock();
        let reservation = ledger
            .get_mut(id)
            .ok_or(BookingError::ReservationNotFound(id))?;
        if reservation.status == Status::Cancelled {
            return Ok(());
        }
        status::transition(reservation, Status::Cancelled)?;
        tracing::info!(reservation = %id, table = %table_id, "reservation cancelled");
        Ok(())
    }

    pub fn get(&self, id: ReservationId) -> Option<Reservation> {
        let table_id = *self.index.get(&id)?;
        let ledger = self.try_ledger(table_id)?;
        let ledger = ledger.lock();
        ledger.entries.values().find(|r| r.id == id).cloned()
    }

    /// All reservations for a table in slot-start order, cancelled included.
    pub fn reservations_for_table(&self, table_id: TableId) -> Vec<Reservation> {
        let Some(ledger) = self.try_ledger(table_id) else {
            return Vec::new();
        };
        let ledger = ledger.lock();
        ledger.entries.values().cloned().collect()
    }

    fn transition(&self, id: ReservationId, to: Status) -> Result<Reservation, BookingError> {
        let table_id = *self
            .index
            .get(&id)
            .ok_or(BookingError::ReservationNotFound(id))?;
        let ledger = self
            .try_ledger(table_id)
            .ok_or(BookingError::ReservationNotFound(id))?;
        let mut ledger = ledger.lock();
        let reservation = ledger
            .get_mut(id)
            .ok_or(BookingError::ReservationNotFound(id))?;
        status::transition(reservation, to)?;
        Ok(reservation.clone())
    }
}
