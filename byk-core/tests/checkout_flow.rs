//! End-to-end ordering flow
//!
//! Walks the whole session: browse catalog, fill the cart, hit a brand
//! conflict, switch brands, check out, and drive the order through its
//! lifecycle.

use byk_core::{
    CartError, CartStore, CatalogLookup, Config, ConflictResolver, OrderBuilder, StaticCatalog,
};
use byk_core::store::{CartRepository, MemoryCartRepository, SessionId};
use rust_decimal_macros::dec;
use shared::models::{Brand, ContactInfo, Dish, DishCategory, DishId, Fulfillment, PaymentMethod};
use shared::status::{self, Status};

fn catalog() -> StaticCatalog {
    StaticCatalog::with_dishes([
        Dish {
            id: DishId(1),
            name: "Стейк Рибай".to_string(),
            price: dec!(1890.00),
            brand: Brand::TheByk,
            category: DishCategory::Steaks,
            is_available: true,
            preparation_minutes: 25,
        },
        Dish {
            id: DishId(2),
            name: "Пицца Маргарита".to_string(),
            price: dec!(690.00),
            brand: Brand::Mosca,
            category: DishCategory::Pizza,
            is_available: true,
            preparation_minutes: 15,
        },
    ])
}

fn contact() -> ContactInfo {
    ContactInfo {
        name: "Иван".to_string(),
        phone: "+7 916 000-11-22".to_string(),
        address: Some("Никольская 4".to_string()),
    }
}

#[test]
fn brand_switch_then_checkout_and_lifecycle() {
    let catalog = catalog();
    let repo = MemoryCartRepository::new();
    let session = SessionId::new();
    let mut cart = CartStore::new();

    // Cart empty → add steak from THE БЫК succeeds.
    let steak = catalog.dish(DishId(1)).unwrap();
    let snap = cart.add(steak, 1, Brand::TheByk).unwrap();
    assert_eq!(snap.subtotal, dec!(1890.00));
    repo.save(session, cart.clone());

    // Pizza from MOSCA conflicts and changes nothing.
    let pizza = catalog.dish(DishId(2)).unwrap();
    let err = cart.add(pizza, 1, Brand::Mosca).unwrap_err();
    let CartError::BrandConflict(conflict) = err else {
        panic!("expected conflict");
    };
    assert_eq!(cart.snapshot(), repo.load(session).unwrap().snapshot());

    // User confirms the switch: cart now holds only the pizza.
    let snap = ConflictResolver::new(conflict).confirm_switch(&mut cart);
    assert_eq!(snap.brand, Some(Brand::Mosca));
    assert_eq!(snap.total_items(), 1);
    assert_eq!(snap.subtotal, dec!(690.00));
    repo.save(session, cart.clone());

    // Checkout as delivery.
    let builder = OrderBuilder::new(&Config::default());
    let mut order = builder
        .build(
            &snap,
            Fulfillment::Delivery,
            contact(),
            PaymentMethod::Card,
            Some(dec!(100.00)),
        )
        .unwrap();
    assert_eq!(order.status, Status::Pending);
    assert_eq!(order.total, dec!(990.00)); // 690 + 200 fee + 100 tip
    cart.clear();
    repo.save(session, cart.clone());
    assert!(repo.load(session).unwrap().is_empty());

    // Drive the delivery lifecycle to its terminal state.
    for next in [
        Status::Confirmed,
        Status::Preparing,
        Status::Ready,
        Status::Delivering,
        Status::Delivered,
    ] {
        status::transition(&mut order, next).unwrap();
    }
    assert!(order.status.is_terminal());
    assert!(status::transition(&mut order, Status::Cancelled).is_err());
}

#[test]
fn cancelled_conflict_preserves_cart_exactly() {
    let catalog = catalog();
    let mut cart = CartStore::new();
    cart.add(catalog.dish(DishId(1)).unwrap(), 2, Brand::TheByk)
        .unwrap();
    cart.set_instructions(DishId(1), Some("без лука".into()));
    let before = cart.clone();

    let err = cart
        .add(catalog.dish(DishId(2)).unwrap(), 3, Brand::Mosca)
        .unwrap_err();
    let CartError::BrandConflict(conflict) = err else {
        panic!("expected conflict");
    };
    assert_eq!(conflict.pending.quantity, 3);

    ConflictResolver::new(conflict).cancel();
    assert_eq!(cart, before);
}
