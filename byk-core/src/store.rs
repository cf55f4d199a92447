//! Cart persistence seam
//!
//! Carts outlive single screens; the surrounding app stores them per
//! session through this trait. The wire/storage format is the store's
//! business, so the trait traffics in whole [`CartStore`] values.

use crate::cart::CartStore;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session identifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

/// External cart store: load/save per session.
pub trait CartRepository: Send + Sync {
    fn load(&self, session_id: SessionId) -> Option<CartStore>;
    fn save(&self, session_id: SessionId, cart: CartStore);
}

/// In-memory repository; also the test double.
#[derive(Debug, Default)]
pub struct MemoryCartRepository {
    carts: DashMap<SessionId, CartStore>,
}

impl MemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartRepository for MemoryCartRepository {
    fn load(&self, session_id: SessionId) -> Option<CartStore> {
        self.carts.get(&session_id).map(|c| c.value().clone())
    }

    fn save(&self, session_id: SessionId, cart: CartStore) {
        self.carts.insert(session_id, cart);
    }
}
