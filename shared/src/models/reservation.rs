//! Reservation Model

use super::dining_table::TableId;
use super::restaurant::RestaurantId;
use crate::status::{HasStatus, Status};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reservation identifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ReservationId(pub Uuid);

impl ReservationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReservationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "reservation:{}", self.0)
    }
}

/// A fixed-duration interval during which a table is held.
///
/// Intervals are half-open `[start, end)`: two slots that merely touch
/// do not overlap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: DateTime<Utc>,
    /// Duration in minutes (serde-friendly, always positive)
    pub duration_minutes: u32,
}

impl TimeSlot {
    pub fn new(start: DateTime<Utc>, duration_minutes: u32) -> Self {
        Self {
            start,
            duration_minutes,
        }
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.start + Duration::minutes(self.duration_minutes as i64)
    }

    /// Half-open interval overlap test.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

/// Reservation entity
///
/// Invariant (enforced by the scheduler, not here): no two non-cancelled
/// reservations for the same table have overlapping slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub restaurant_id: RestaurantId,
    pub table_id: TableId,
    pub slot: TimeSlot,
    pub guest_count: u32,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl HasStatus for Reservation {
    fn status(&self) -> Status {
        self.status
    }
    fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}
