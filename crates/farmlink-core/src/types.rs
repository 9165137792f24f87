//! # Domain Types
//!
//! Core domain types used throughout FarmLink.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     User        │   │    Product      │   │     Vendor      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name, email    │   │  price (Money)  │   │  name, email    │       │
//! │  │  role?          │   │  quantity       │   │  location       │       │
//! │  └─────────────────┘   │  vendor_id ─────┼──►│                 │       │
//! │                        └────────▲────────┘   └─────────────────┘       │
//! │                                 │ snapshot                              │
//! │  ┌─────────────────┐   ┌────────┴────────┐   ┌─────────────────┐       │
//! │  │    Message      │   │    CartItem     │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  from ──► to    │   │  product_id     │◄──│  items          │       │
//! │  │  read = false   │   │  quantity       │   │  total, status  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Shape
//! Every type serializes with camelCase field names (`vendorId`,
//! `shopOwnerId`) because the browser frontend consumes them as-is, and
//! `ts-rs` exports matching TypeScript interfaces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Role
// =============================================================================

/// Which side of the marketplace a user is on.
///
/// A user without a role is represented as `Option<Role>::None`; the
/// frontend treats that as "not routed to any dashboard yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Browses products, fills a cart, places orders.
    ShopOwner,
    /// Manages a product catalog and receives orders and messages.
    Vendor,
}

impl Role {
    /// Dashboard the frontend navigates to after sign-in.
    pub const fn dashboard_path(&self) -> &'static str {
        match self {
            Role::ShopOwner => "/shop-dashboard",
            Role::Vendor => "/vendor-dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::ShopOwner => write!(f, "shop-owner"),
            Role::Vendor => write!(f, "vendor"),
        }
    }
}

// =============================================================================
// User
// =============================================================================

/// The signed-in user of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
}

impl User {
    /// Checks whether the user holds the given role.
    #[inline]
    pub fn has_role(&self, role: Role) -> bool {
        self.role == Some(role)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product listed by a vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Free-form category ("Vegetables", "Dairy", ...).
    pub category: String,

    /// Unit price. Never negative.
    pub price: Money,

    /// Units in stock. Never negative.
    pub quantity: i64,

    /// Owning vendor (the vendor's `User::id` / `Vendor::id`).
    pub vendor_id: String,

    /// Image path; not checked for existence.
    pub image: String,
}

impl Product {
    /// Builds a catalog product from vendor input plus store-assigned fields.
    ///
    /// An empty image reference falls back to `default_image`
    /// (normally [`crate::DEFAULT_PRODUCT_IMAGE`]).
    pub fn from_new(id: String, vendor_id: String, new: NewProduct, default_image: &str) -> Self {
        let image = if new.image.trim().is_empty() {
            default_image.to_string()
        } else {
            new.image
        };

        Product {
            id,
            name: new.name,
            category: new.category,
            price: new.price,
            quantity: new.quantity,
            vendor_id,
            image,
        }
    }
}

/// Vendor input for a new product.
///
/// Carries neither `id` nor `vendor_id`: the store assigns both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: Money,
    pub quantity: i64,
    #[serde(default)]
    pub image: String,
}

/// Partial update for a product. `None` fields are left untouched.
///
/// The id is deliberately absent: renaming a product's identity would break
/// cart lines and orders that reference it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<Money>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub vendor_id: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl ProductPatch {
    /// Merges every present field into `product`.
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
        if let Some(vendor_id) = self.vendor_id {
            product.vendor_id = vendor_id;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
    }
}

// =============================================================================
// Vendor
// =============================================================================

/// A vendor profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub description: String,
    pub location: String,

    /// Kept for frontend compatibility; the sample data leaves it empty.
    ///
    /// Product ownership is recorded on [`Product::vendor_id`]. Use
    /// `SharedStore::products_by_vendor` to list a vendor's catalog.
    pub products: Vec<Product>,
}

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the shop owner's cart.
///
/// ## Snapshot Pattern
/// `product` is a frozen copy taken when the line was first added. Later
/// catalog edits (price changes, deletion) do not alter the cart line, and
/// the order created from it records what the shop owner actually saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub quantity: i64,
    pub product: Product,
}

impl CartItem {
    /// Creates a cart line from a product and quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartItem {
            product_id: product.id.clone(),
            quantity,
            product: product.clone(),
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }

    /// Vendor that will receive this line when the order is placed.
    #[inline]
    pub fn vendor_id(&self) -> &str {
        &self.product.vendor_id
    }
}

// =============================================================================
// Order
// =============================================================================

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Just placed; every order starts here.
    #[default]
    Pending,
    Completed,
    Cancelled,
}

/// An immutable record of a submitted cart (or the part of it addressed to
/// one vendor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub shop_owner_id: String,
    pub vendor_id: String,
    pub items: Vec<CartItem>,
    /// Σ(price × quantity) over `items`.
    pub total: Money,
    pub status: OrderStatus,
    #[ts(as = "String")]
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Message
// =============================================================================

/// A direct message between two users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    #[serde(rename = "from")]
    pub sender_id: String,
    #[serde(rename = "to")]
    pub recipient_id: String,
    pub content: String,
    #[ts(as = "String")]
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

// =============================================================================
// Unit Tests
// =============================================================================
