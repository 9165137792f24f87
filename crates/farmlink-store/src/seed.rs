//! # Sample Data
//!
//! The fixed catalog every seeded session starts with.
//!
//! ## Seeded Data
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Vendor 1  Fresh Farms Co.   ── products 1, 4, 5 (Vegetables, Fruits)   │
//! │  Vendor 2  Dairy Delights    ── products 2, 6    (Dairy)                │
//! │  Vendor 3  Golden Bakery     ── product 3        (Bakery)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Seed ids are the short strings "1".."6"; generated ids are UUIDs or
//! `product-N`, so the two never overlap.

use farmlink_core::{Money, Product, Vendor};

const VEGETABLES_IMAGE: &str = "/src/assets/product-vegetables.jpg";
const DAIRY_IMAGE: &str = "/src/assets/product-dairy.jpg";
const BAKERY_IMAGE: &str = "/src/assets/product-bakery.jpg";
const FRUITS_IMAGE: &str = "/src/assets/product-fruits.jpg";

/// (id, name, email, description, location)
const VENDORS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "1",
        "Fresh Farms Co.",
        "contact@freshfarms.com",
        "Premium organic produce from local farms",
        "Springfield Valley",
    ),
    (
        "2",
        "Dairy Delights",
        "info@dairydelights.com",
        "Fresh dairy products and artisanal cheese",
        "Greenfield",
    ),
    (
        "3",
        "Golden Bakery",
        "hello@goldenbakery.com",
        "Freshly baked bread and pastries daily",
        "Downtown Market",
    ),
];

/// (id, name, category, price_cents, stock, vendor_id, image)
const PRODUCTS: &[(&str, &str, &str, i64, i64, &str, &str)] = &[
    ("1", "Organic Vegetables Mix", "Vegetables", 2499, 50, "1", VEGETABLES_IMAGE),
    ("2", "Fresh Dairy Bundle", "Dairy", 1899, 30, "2", DAIRY_IMAGE),
    ("3", "Artisan Bread Collection", "Bakery", 1599, 40, "3", BAKERY_IMAGE),
    ("4", "Premium Fruit Basket", "Fruits", 2999, 25, "1", FRUITS_IMAGE),
    ("5", "Farm Fresh Tomatoes", "Vegetables", 899, 100, "1", VEGETABLES_IMAGE),
    ("6", "Organic Cheese Selection", "Dairy", 2299, 20, "2", DAIRY_IMAGE),
];

/// The three sample vendors.
pub fn sample_vendors() -> Vec<Vendor> {
    VENDORS
        .iter()
        .map(|&(id, name, email, description, location)| Vendor {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            products: Vec::new(),
        })
        .collect()
}

/// The six sample products.
pub fn sample_products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(
            |&(id, name, category, price_cents, stock, vendor_id, image)| Product {
                id: id.to_string(),
                name: name.to_string(),
                category: category.to_string(),
                price: Money::from_cents(price_cents),
                quantity: stock,
                vendor_id: vendor_id.to_string(),
                image: image.to_string(),
            },
        )
        .collect()
}
