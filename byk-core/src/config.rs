//! Core configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | BYK_DELIVERY_FEE | 200.00 | Flat delivery fee (currency units) |
//! | BYK_SLOT_MINUTES | 90 | Default reservation slot duration |
//! | BYK_ORDER_PREFIX | BYK | Order number prefix |

use rust_decimal::Decimal;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    /// Flat delivery fee used by the default fee policy
    pub delivery_fee: Decimal,
    /// Default reservation slot duration in minutes
    pub slot_minutes: u32,
    /// Prefix for generated order numbers
    pub order_prefix: String,
}

impl Config {
    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            delivery_fee: std::env::var("BYK_DELIVERY_FEE")
                .ok()
                .and_then(|v| Decimal::from_str(&v).ok())
                .unwrap_or_else(|| Decimal::new(20000, 2)),
            slot_minutes: std::env::var("BYK_SLOT_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(90),
            order_prefix: std::env::var("BYK_ORDER_PREFIX").unwrap_or_else(|_| "BYK".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delivery_fee: Decimal::new(20000, 2),
            slot_minutes: 90,
            order_prefix: "BYK".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.delivery_fee, dec!(200.00));
        assert_eq!(cfg.slot_minutes, 90);
        assert_eq!(cfg.order_prefix, "BYK");
    }
}
