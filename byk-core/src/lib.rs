//! Order-cart consistency and reservation-allocation core
//!
//! The behavioral core behind the BYK mobile client:
//!
//! - **cart**: single-brand cart with staged brand-conflict resolution
//! - **checkout**: cart snapshot → immutable order, per-fulfillment validation
//! - **reservation**: table/time-slot allocation without double-booking
//! - **catalog**: read-only dish/restaurant resolver (external collaborator)
//! - **store**: cart persistence seam (external collaborator)
//!
//! # Control Flow
//!
//! ```text
//! UI event → CartStore.add ──ok──→ CartSnapshot
//!               │
//!               └─conflict─→ BrandConflict → ConflictResolver
//!                                │                │
//!                             cancel()      confirm_switch()
//!                            (untouched)   (clear + replay add)
//!
//! checkout → OrderBuilder.build(snapshot, …) → Order (status: PENDING)
//! booking  → ReservationScheduler.book/cancel
//! ```
//!
//! Every status change on an order or reservation goes through
//! [`shared::status::transition`].

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod money;
pub mod reservation;
pub mod store;

// Re-exports
pub use cart::{BrandConflict, CartError, CartSnapshot, CartStore, ConflictResolver};
pub use catalog::{CatalogLookup, StaticCatalog};
pub use checkout::{FeePolicy, FlatFee, OrderBuilder, OrderValidationError};
pub use config::Config;
pub use reservation::{BookingError, ReservationScheduler};
pub use store::{CartRepository, MemoryCartRepository};

// Re-export shared types for convenience
pub use shared::models::{
    Brand, ContactInfo, Dish, DishId, Fulfillment, Order, Reservation, ReservationId, Restaurant,
    Table, TableId, TimeSlot,
};
pub use shared::status::{IllegalTransition, Status};
