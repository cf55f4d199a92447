//! OrderBuilder - cart snapshot → immutable order
//!
//! Validation depends on the fulfillment method: delivery needs an address,
//! everything needs a phone. The delivery fee comes from a pluggable
//! [`FeePolicy`]; the fee formula itself lives with the caller.

use crate::cart::CartSnapshot;
use crate::config::Config;
use crate::money;
use rust_decimal::Decimal;
use shared::models::{ContactInfo, Fulfillment, Order, OrderLine, PaymentMethod};
use shared::status::Status;
use shared::util::snowflake_id;
use thiserror::Error;

/// Order validation errors. All recoverable by correcting the input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderValidationError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("delivery requires an address")]
    MissingAddress,

    #[error("contact phone is required")]
    MissingContact,

    #[error("tip must not be negative")]
    InvalidTip,
}

/// Computes the delivery fee for a checkout. Pickup never consults it.
pub trait FeePolicy: Send + Sync {
    fn delivery_fee(&self, snapshot: &CartSnapshot) -> Decimal;
}

/// Flat fee regardless of basket or distance.
#[derive(Debug, Clone)]
pub struct FlatFee(pub Decimal);

impl FeePolicy for FlatFee {
    fn delivery_fee(&self, _snapshot: &CartSnapshot) -> Decimal {
        self.0
    }
}

/// Builds immutable orders out of finalized carts.
pub struct OrderBuilder {
    fee_policy: Box<dyn FeePolicy>,
    order_prefix: String,
}

impl OrderBuilder {
    /// Flat-fee builder from config defaults.
    pub fn new(config: &Config) -> Self {
        Self {
            fee_policy: Box::new(FlatFee(config.delivery_fee)),
            order_prefix: config.order_prefix.clone(),
        }
    }

    pub fn with_fee_policy(config: &Config, fee_policy: Box<dyn FeePolicy>) -> Self {
        Self {
            fee_policy,
            order_prefix: config.order_prefix.clone(),
        }
    }

    /// Validate and freeze the cart into an [`Order`] in status `PENDING`.
    ///
    /// The snapshot is copied into the order; later cart mutation cannot
    /// touch it.
    pub fn build(
        &self,
        snapshot: &CartSnapshot,
        fulfillment: Fulfillment,
        contact: ContactInfo,
        payment_method: PaymentMethod,
        tip: Option<Decimal>,
    ) -> Result<Order, OrderValidationError> {
        let brand = snapshot.brand.ok_or(OrderValidationError::EmptyCart)?;
        if snapshot.is_empty() {
            return Err(OrderValidationError::EmptyCart);
        }
        if contact.phone.trim().is_empty() {
            return Err(OrderValidationError::MissingContact);
        }
        if fulfillment == Fulfillment::Delivery
            && contact.address.as_deref().is_none_or(|a| a.trim().is_empty())
        {
            return Err(OrderValidationError::MissingAddress);
        }
        let tip = tip.unwrap_or(Decimal::ZERO);
        if tip < Decimal::ZERO {
            return Err(OrderValidationError::InvalidTip);
        }

        let delivery_fee = match fulfillment {
            Fulfillment::Pickup => Decimal::ZERO,
            Fulfillment::Delivery => self.fee_policy.delivery_fee(snapshot),
        };
        let total = money::round_money(snapshot.subtotal + delivery_fee + tip);

        let order = Order {
            order_number: format!("{}-{}", self.order_prefix, snowflake_id()),
            brand,
            lines: snapshot
                .lines
                .iter()
                .map(|l| OrderLine {
                    dish: l.dish.clone(),
                    quantity: l.quantity,
                    line_total: l.line_total,
                    special_instructions: l.special_instructions.clone(),
                })
                .collect(),
            fulfillment,
            contact,
            payment_method,
            subtotal: snapshot.subtotal,
            delivery_fee,
            tip,
            total,
            status: Status::Pending,
            created_at: chrono::Utc::now(),
        };
        tracing::info!(
            order_number = %order.order_number,
            brand = %order.brand,
            ?fulfillment,
            total = %order.total,
            "order built"
        );
        Ok(order)
    }
}
