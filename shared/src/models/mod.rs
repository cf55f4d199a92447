//! Domain models for the ordering and reservation core

pub mod dining_table;
pub mod dish;
pub mod order;
pub mod reservation;
pub mod restaurant;

pub use dining_table::{Table, TableId, Zone};
pub use dish::{Brand, Dish, DishCategory, DishId};
pub use order::{ContactInfo, Fulfillment, Order, OrderLine, PaymentMethod};
pub use reservation::{Reservation, ReservationId, TimeSlot};
pub use restaurant::{DayHours, Restaurant, RestaurantId, WorkingHours};
