//! # Market State
//!
//! The plain data behind a [`SharedStore`](crate::SharedStore): every
//! collection of a session in one struct, with no locking of its own.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    MarketState                                          │
//! │                                                                         │
//! │   user ─────────── Option<User>       set on sign-in, None on sign-out  │
//! │   products ─────── Vec<Product>       vendor-managed catalog            │
//! │   vendors ──────── Vec<Vendor>        read-only after seeding           │
//! │   cart ─────────── Cart               one line per product id           │
//! │   orders ───────── Vec<Order>         append-only                       │
//! │   messages ─────── Vec<Message>       append-only                       │
//! │                                                                         │
//! │  The store wraps this in Arc<RwLock<_>>; a cloned MarketState is a      │
//! │  consistent snapshot of the whole session at one instant.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;

pub use cart::{Cart, VendorBatch};

use farmlink_core::{CoreError, CoreResult, Message, Order, Product, Role, User, Vendor};
use serde::{Deserialize, Serialize};

use crate::seed;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketState {
    pub user: Option<User>,
    pub products: Vec<Product>,
    pub vendors: Vec<Vendor>,
    pub cart: Cart,
    pub orders: Vec<Order>,
    pub messages: Vec<Message>,
}

impl MarketState {
    /// State with the sample vendors and products, no user, empty cart.
    pub fn seeded() -> Self {
        MarketState {
            products: seed::sample_products(),
            vendors: seed::sample_vendors(),
            ..MarketState::default()
        }
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn vendor(&self, id: &str) -> Option<&Vendor> {
        self.vendors.iter().find(|v| v.id == id)
    }

    /// Products whose `vendor_id` is `vendor_id`, catalog order.
    pub fn products_by_vendor<'a>(
        &'a self,
        vendor_id: &'a str,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| p.vendor_id == vendor_id)
    }

    /// The signed-in user, or `NotSignedIn`.
    pub fn require_user(&self) -> CoreResult<&User> {
        self.user.as_ref().ok_or(CoreError::NotSignedIn)
    }

    /// The signed-in user if they hold `role`.
    pub fn require_role(&self, role: Role) -> CoreResult<&User> {
        let user = self.require_user()?;
        if !user.has_role(role) {
            return Err(CoreError::RoleRequired { required: role });
        }
        Ok(user)
    }
}
