//! Restaurant Model

use super::dish::Brand;
use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Restaurant identifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct RestaurantId(pub i64);

impl std::fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "restaurant:{}", self.0)
    }
}

/// Opening hours for a single weekday. `None` means closed all day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayHours {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

impl DayHours {
    /// Whether `[start, end]` lies inside these hours. Closing time is
    /// inclusive so a booking may run right up to close.
    pub fn contains(&self, start: NaiveTime, end: NaiveTime) -> bool {
        start >= self.open && end <= self.close && start < end
    }
}

/// Weekly opening hours, Monday-first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkingHours {
    /// Mon..Sun
    pub days: [Option<DayHours>; 7],
}

impl WorkingHours {
    /// Same hours every day of the week.
    pub fn uniform(open: NaiveTime, close: NaiveTime) -> Self {
        Self {
            days: [Some(DayHours { open, close }); 7],
        }
    }

    pub fn for_weekday(&self, weekday: Weekday) -> Option<DayHours> {
        self.days[weekday.num_days_from_monday() as usize]
    }
}

/// Restaurant entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub brand: Brand,
    pub address: String,
    pub working_hours: WorkingHours,
}
