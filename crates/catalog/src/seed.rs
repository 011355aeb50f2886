//! Fixed demo inventory loaded at session start.

use rust_decimal::Decimal;
use stockroom_core::{Category, Product};

use crate::catalog::ProductCatalog;

/// The fixed initial product set.
#[must_use]
pub fn demo_inventory() -> Vec<Product> {
    vec![
        Product {
            name: "Smart Watch".to_owned(),
            description: Some("Tracks health with a heart-rate sensor".to_owned()),
            price: Decimal::new(9900, 2),
            stock: 32,
            category: Some(Category::Electronics),
        },
        Product {
            name: "Laptop Stand".to_owned(),
            description: Some("Ergonomic aluminium laptop riser".to_owned()),
            price: Decimal::new(3990, 2),
            stock: 78,
            category: Some(Category::Accessories),
        },
        Product {
            name: "Wireless Earbuds".to_owned(),
            description: Some("Premium noise-cancelling earbuds".to_owned()),
            price: Decimal::new(2990, 2),
            stock: 45,
            category: Some(Category::Electronics),
        },
    ]
}

/// A catalog seeded with the demo inventory.
#[must_use]
pub fn demo_catalog() -> ProductCatalog {
    ProductCatalog::from_products(demo_inventory())
}
