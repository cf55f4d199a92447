//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary arithmetic in the core goes through `Decimal` and is
//! rounded to 2 decimal places, half-up, at the point a value becomes
//! customer-visible (line totals, subtotals, order totals).

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price per dish (1,000,000 currency units)
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Maximum allowed quantity per cart line
pub const MAX_QUANTITY: u32 = 9999;

/// Round to minor-unit precision, half-up.
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// price × quantity, rounded.
#[inline]
pub fn line_total(price: Decimal, quantity: u32) -> Decimal {
    round_money(price * Decimal::from(quantity))
}

/// Whether a price is usable in the catalog: positive and bounded.
pub fn price_in_bounds(price: Decimal) -> bool {
    price > Decimal::ZERO && price <= MAX_PRICE
}
