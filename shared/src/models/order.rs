//! Order Model
//!
//! An `Order` is an immutable snapshot of a cart taken at checkout time.
//! Only the `status` field ever changes afterwards, and only through the
//! shared lifecycle in [`crate::status`].

use super::dish::{Brand, Dish};
use crate::status::{HasStatus, Status};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One dish plus its aggregated quantity, frozen at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    pub dish: Dish,
    pub quantity: u32,
    /// quantity × dish.price, minor-unit precision
    pub line_total: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

/// Contact details collected at checkout
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactInfo {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// How the order is handed to the customer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Fulfillment {
    Delivery,
    #[default]
    Pickup,
}

/// Payment method selected at checkout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Card,
    Cash,
    Online,
}

/// Order entity (delivery or pickup)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_number: String,
    pub brand: Brand,
    pub lines: Vec<OrderLine>,
    pub fulfillment: Fulfillment,
    pub contact: ContactInfo,
    pub payment_method: PaymentMethod,
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub tip: Decimal,
    /// subtotal + delivery_fee + tip
    pub total: Decimal,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

impl HasStatus for Order {
    fn status(&self) -> Status {
        self.status
    }
    fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}
