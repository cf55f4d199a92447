//! Dining Table Model

use super::restaurant::RestaurantId;
use serde::{Deserialize, Serialize};

/// Table identifier, scoped to a restaurant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TableId(pub i64);

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "table:{}", self.0)
    }
}

/// Physical zone of the dining room
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Zone {
    #[default]
    MainHall,
    Terrace,
    VipRoom,
    Bar,
}

/// Dining table entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub id: TableId,
    pub restaurant_id: RestaurantId,
    pub capacity: u32,
    pub zone: Zone,
}
