//! ConflictResolver - the confirm/cancel decision around a brand switch
//!
//! A [`BrandConflict`] admits exactly two resolutions, and the resolver
//! consumes itself on either one, so a third path is unrepresentable.

use super::{BrandConflict, CartSnapshot, CartStore};
use shared::models::Brand;

/// Holds the staged addition until the user decides.
#[derive(Debug)]
pub struct ConflictResolver {
    conflict: BrandConflict,
}

impl ConflictResolver {
    pub fn new(conflict: BrandConflict) -> Self {
        Self { conflict }
    }

    /// The brand the cart currently holds.
    pub fn current_brand(&self) -> Brand {
        self.conflict.current_brand
    }

    /// The brand the user attempted to add from.
    pub fn pending_brand(&self) -> Brand {
        self.conflict.pending.brand
    }

    /// User confirmed the switch: clear the cart and replay the staged add.
    ///
    /// The replay lands in an empty cart and therefore cannot conflict;
    /// a failure here is a programming error and aborts loudly.
    pub fn confirm_switch(self, cart: &mut CartStore) -> CartSnapshot {
        let BrandConflict { pending, current_brand } = self.conflict;
        tracing::info!(
            from_brand = %current_brand,
            to_brand = %pending.brand,
            dish = %pending.dish.id,
            "confirmed brand switch, cart cleared"
        );
        cart.clear();
        match cart.add(pending.dish, pending.quantity, pending.brand) {
            Ok(snapshot) => snapshot,
            Err(e) => unreachable!("replay into an empty cart cannot fail: {e}"),
        }
    }

    /// User kept the existing cart: drop the staged addition.
    pub fn cancel(self) {
        tracing::info!(
            kept_brand = %self.conflict.current_brand,
            "brand switch cancelled, cart untouched"
        );
    }
}

impl From<BrandConflict> for ConflictResolver {
    fn from(conflict: BrandConflict) -> Self {
        Self::new(conflict)
    }
}
