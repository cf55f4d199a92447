//! Dish Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dish identifier (snowflake-style i64)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DishId(pub i64);

impl std::fmt::Display for DishId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "dish:{}", self.0)
    }
}

/// Restaurant sub-chain identity. Carts never mix dishes from two brands
/// without explicit user confirmation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Brand {
    TheByk,
    ThePivo,
    Mosca,
    TheGeorgia,
}

impl Brand {
    /// Customer-facing brand name.
    pub fn display_name(self) -> &'static str {
        match self {
            Brand::TheByk => "THE БЫК",
            Brand::ThePivo => "THE ПИВО",
            Brand::Mosca => "MOSCA",
            Brand::TheGeorgia => "THE ГРУЗИЯ",
        }
    }
}

impl std::fmt::Display for Brand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Menu category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DishCategory {
    Starters,
    Soups,
    Salads,
    #[default]
    MainCourse,
    Steaks,
    Seafood,
    Pasta,
    Pizza,
    Sides,
    Desserts,
    Drinks,
}

/// Dish entity. Immutable once loaded from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    /// Price in currency units, minor-unit precision
    pub price: Decimal,
    pub brand: Brand,
    pub category: DishCategory,
    pub is_available: bool,
    /// Kitchen estimate in minutes
    pub preparation_minutes: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_dish_serde_round_trip() {
        let dish = Dish {
            id: DishId(42),
            name: "Рибай стейк".to_string(),
            price: dec!(1890.00),
            brand: Brand::TheByk,
            category: DishCategory::Steaks,
            is_available: true,
            preparation_minutes: 25,
        };
        let json = serde_json::to_string(&dish).unwrap();
        assert!(json.contains("\"THE_BYK\""));
        let back: Dish = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dish);
    }

    #[test]
    fn test_brand_display_names() {
        assert_eq!(Brand::Mosca.display_name(), "MOSCA");
        assert_eq!(Brand::TheByk.to_string(), "THE БЫК");
    }
}
