//! CartStore - single-brand cart with staged conflict resolution
//!
//! The cart owns the in-progress order's line items and enforces the
//! single-brand invariant: a non-empty cart only ever holds dishes of its
//! active brand. An add from a different brand mutates nothing and comes
//! back as a [`BrandConflict`] carrying the staged addition; the caller
//! resolves it through [`ConflictResolver`].

mod conflict;

pub use conflict::ConflictResolver;

use crate::money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{Brand, Dish, DishId};
use thiserror::Error;

/// A staged (dish, brand, quantity) tuple held until the user decides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingAddition {
    pub dish: Dish,
    pub brand: Brand,
    pub quantity: u32,
}

/// Returned when an add would mix two brands. The cart is untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandConflict {
    pub pending: PendingAddition,
    pub current_brand: Brand,
}

/// Cart mutation errors. All recoverable by the caller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("cart holds {} items; adding from {} requires confirmation", .0.current_brand, .0.pending.brand)]
    BrandConflict(BrandConflict),

    #[error("quantity must be between 1 and {max}, got {quantity}", max = money::MAX_QUANTITY)]
    InvalidQuantity { quantity: i64 },

    #[error("dish is not available: {name}")]
    DishUnavailable { id: DishId, name: String },
}

/// One dish plus its aggregated quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct CartLine {
    dish: Dish,
    quantity: u32,
    special_instructions: Option<String>,
}

/// Read-only aggregate view of one cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapshotLine {
    pub dish: Dish,
    pub quantity: u32,
    pub line_total: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

/// Read-only aggregate of the whole cart, lines in first-add order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSnapshot {
    pub brand: Option<Brand>,
    pub lines: Vec<SnapshotLine>,
    pub subtotal: Decimal,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// The in-progress order. One per session; not shared across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartStore {
    lines: Vec<CartLine>,
    active_brand: Option<Brand>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// `None` iff the cart is empty.
    pub fn active_brand(&self) -> Option<Brand> {
        self.active_brand
    }

    /// Merge `quantity` of `dish` into the cart.
    ///
    /// Empty cart or matching brand: merges into the existing line
    /// (creating one if absent) and returns the updated snapshot.
    /// Non-empty cart of another brand: returns
    /// [`CartError::BrandConflict`] and mutates nothing.
    ///
    /// A merge that would push a line past [`money::MAX_QUANTITY`] fails
    /// with [`CartError::InvalidQuantity`] and leaves the line as it was.
    pub fn add(&mut self, dish: Dish, quantity: u32, brand: Brand) -> Result<CartSnapshot, CartError> {
        if quantity == 0 || quantity > money::MAX_QUANTITY {
            return Err(CartError::InvalidQuantity {
                quantity: quantity as i64,
            });
        }
        if !dish.is_available {
            return Err(CartError::DishUnavailable {
                id: dish.id,
                name: dish.name,
            });
        }
        if let Some(current) = self.active_brand {
            if current != brand {
                tracing::warn!(
                    dish = %dish.id,
                    attempted_brand = %brand,
                    current_brand = %current,
                    "brand conflict, add staged for confirmation"
                );
                return Err(CartError::BrandConflict(BrandConflict {
                    pending: PendingAddition {
                        dish,
                        brand,
                        quantity,
                    },
                    current_brand: current,
                }));
            }
        }

        match self.lines.iter_mut().find(|l| l.dish.id == dish.id) {
            Some(line) => {
                let merged = line.quantity as u64 + quantity as u64;
                if merged > money::MAX_QUANTITY as u64 {
                    return Err(CartError::InvalidQuantity {
                        quantity: merged as i64,
                    });
                }
                line.quantity = merged as u32;
            }
            None => self.lines.push(CartLine {
                dish,
                quantity,
                special_instructions: None,
            }),
        }
        self.active_brand = Some(brand);
        Ok(self.snapshot())
    }

    /// Decrement `quantity` of a line; the line disappears at zero and the
    /// active brand resets when the last line goes. Unknown dish: no-op.
    pub fn remove(&mut self, dish_id: DishId, quantity: u32) -> CartSnapshot {
        if let Some(idx) = self.lines.iter().position(|l| l.dish.id == dish_id) {
            let line = &mut self.lines[idx];
            if line.quantity > quantity {
                line.quantity -= quantity;
            } else {
                self.lines.remove(idx);
            }
            if self.lines.is_empty() {
                self.active_brand = None;
            }
        }
        self.snapshot()
    }

    /// Attach free-text instructions to an existing line. Unknown dish: no-op.
    pub fn set_instructions(&mut self, dish_id: DishId, instructions: Option<String>) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.dish.id == dish_id) {
            line.special_instructions = instructions;
        }
    }

    /// Empty the cart. Idempotent; used after checkout and on confirmed
    /// brand switch.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.active_brand = None;
    }

    /// Aggregate view: lines in first-add order, subtotal = Σ price × qty.
    pub fn snapshot(&self) -> CartSnapshot {
        let lines: Vec<SnapshotLine> = self
            .lines
            .iter()
            .map(|l| SnapshotLine {
                dish: l.dish.clone(),
                quantity: l.quantity,
                line_total: money::line_total(l.dish.price, l.quantity),
                special_instructions: l.special_instructions.clone(),
            })
            .collect();
        let subtotal = money::round_money(lines.iter().map(|l| l.line_total).sum());
        CartSnapshot {
            brand: self.active_brand,
            lines,
            subtotal,
        }
    }
}
