//! Status lifecycle shared by orders, delivery orders and reservations
//!
//! A single closed transition table. Every status change on a long-lived
//! entity goes through [`transition`]; the status fields themselves are
//! never assigned directly outside this module's API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle status for orders and reservations.
///
/// `Delivering`/`Delivered` are the delivery leg, `InProgress`/`Completed`
/// the dine-in/pickup leg; both legs share the same head of the lifecycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Delivering,
    InProgress,
    Delivered,
    Completed,
    Cancelled,
}

impl Status {
    /// All statuses, for exhaustive property checks.
    pub const ALL: [Status; 9] = [
        Status::Pending,
        Status::Confirmed,
        Status::Preparing,
        Status::Ready,
        Status::Delivering,
        Status::InProgress,
        Status::Delivered,
        Status::Completed,
        Status::Cancelled,
    ];

    /// Terminal statuses permit no further transition.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Status::Delivered | Status::Completed | Status::Cancelled
        )
    }

    /// Legal successors of a status. Cancellation is only reachable while
    /// nothing irreversible has happened (pending/confirmed).
    pub fn successors(self) -> &'static [Status] {
        match self {
            Status::Pending => &[Status::Confirmed, Status::Cancelled],
            Status::Confirmed => &[Status::Preparing, Status::InProgress, Status::Cancelled],
            Status::Preparing => &[Status::Ready],
            Status::Ready => &[Status::Delivering, Status::InProgress, Status::Completed],
            Status::Delivering => &[Status::Delivered],
            Status::InProgress => &[Status::Completed],
            Status::Delivered | Status::Completed | Status::Cancelled => &[],
        }
    }

    pub fn can_transition_to(self, to: Status) -> bool {
        self.successors().contains(&to)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Status::Pending => "PENDING",
            Status::Confirmed => "CONFIRMED",
            Status::Preparing => "PREPARING",
            Status::Ready => "READY",
            Status::Delivering => "DELIVERING",
            Status::InProgress => "IN_PROGRESS",
            Status::Delivered => "DELIVERED",
            Status::Completed => "COMPLETED",
            Status::Cancelled => "CANCELLED",
        };
        f.write_str(s)
    }
}

/// Attempted transition not present in the table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("illegal status transition: {from} -> {to}")]
pub struct IllegalTransition {
    pub from: Status,
    pub to: Status,
}

/// Implemented by every entity carrying a lifecycle status.
pub trait HasStatus {
    fn status(&self) -> Status;
    fn set_status(&mut self, status: Status);
}

/// Move `entity` to `to` if the transition table allows it.
pub fn transition<E: HasStatus>(entity: &mut E, to: Status) -> Result<(), IllegalTransition> {
    let from = entity.status();
    if !from.can_transition_to(to) {
        return Err(IllegalTransition { from, to });
    }
    entity.set_status(to);
    Ok(())
}
