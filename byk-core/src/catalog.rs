//! Catalog lookup - read-only resolver for dishes and restaurants
//!
//! The catalog is an external collaborator: the core only consumes it to
//! resolve identifiers into brand, price and availability. The in-memory
//! [`StaticCatalog`] backs tests and offline/demo sessions.

use shared::models::{Dish, DishId, Restaurant, RestaurantId};
use std::collections::HashMap;

/// Read-only dish/restaurant resolver.
pub trait CatalogLookup: Send + Sync {
    fn dish(&self, id: DishId) -> Option<Dish>;
    fn restaurant(&self, id: RestaurantId) -> Option<Restaurant>;
}

/// In-memory catalog seeded up front.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    dishes: HashMap<DishId, Dish>,
    restaurants: HashMap<RestaurantId, Restaurant>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dishes(dishes: impl IntoIterator<Item = Dish>) -> Self {
        let mut catalog = Self::new();
        for dish in dishes {
            catalog.insert_dish(dish);
        }
        catalog
    }

    pub fn insert_dish(&mut self, dish: Dish) {
        self.dishes.insert(dish.id, dish);
    }

    pub fn insert_restaurant(&mut self, restaurant: Restaurant) {
        self.restaurants.insert(restaurant.id, restaurant);
    }
}

impl CatalogLookup for StaticCatalog {
    fn dish(&self, id: DishId) -> Option<Dish> {
        self.dishes.get(&id).cloned()
    }

    fn restaurant(&self, id: RestaurantId) -> Option<Restaurant> {
        self.restaurants.get(&id).cloned()
    }
}
