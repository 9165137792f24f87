//! # Dashboards
//!
//! Read models for the two role-specific screens. Each is built from one
//! consistent snapshot of the store.
//!
//! ```text
//! ┌────────────────────────────────┐   ┌────────────────────────────────┐
//! │  VendorDashboard               │   │  ShopDashboard                 │
//! │  ─────────────────             │   │  ───────────────               │
//! │  products  (vendor_id == me)   │   │  categories  (distinct)        │
//! │  orders    (vendor_id == me)   │   │  vendors + product counts      │
//! │  messages  (to == me)          │   │  cart lines, item count, total │
//! │  unread, total revenue         │   │  my orders                     │
//! └────────────────────────────────┘   └────────────────────────────────┘
//! ```

use farmlink_core::{
    CartItem, CoreResult, Message, Money, Order, Product, Role, User, ValidationError, Vendor,
};
use serde::Serialize;

use crate::state::MarketState;
use crate::store::SharedStore;

// =============================================================================
// Vendor Dashboard
// =============================================================================

/// What the signed-in vendor sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorDashboard {
    pub vendor: User,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub messages: Vec<Message>,
    pub unread_messages: usize,
    /// Σ order totals addressed to this vendor, regardless of status.
    /// A sum beyond `i64` cents is reported as a `Validation` error.
    pub total_revenue: Money,
}

impl VendorDashboard {
    /// Requires a signed-in vendor.
    pub fn build(state: &MarketState) -> CoreResult<Self> {
        let vendor = state.require_role(Role::Vendor)?.clone();

        let products: Vec<Product> = state.products_by_vendor(&vendor.id).cloned().collect();
        let orders: Vec<Order> = state
            .orders
            .iter()
            .filter(|o| o.vendor_id == vendor.id)
            .cloned()
            .collect();
        let messages: Vec<Message> = state
            .messages
            .iter()
            .filter(|m| m.recipient_id == vendor.id)
            .cloned()
            .collect();

        let unread_messages = messages.iter().filter(|m| !m.read).count();
        let total_revenue = orders
            .iter()
            .try_fold(Money::zero(), |acc, o| acc.checked_add(o.total))
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "total revenue".to_string(),
                min: 0,
                max: i64::MAX,
            })?;

        Ok(VendorDashboard {
            vendor,
            products,
            orders,
            messages,
            unread_messages,
            total_revenue,
        })
    }
}

// =============================================================================
// Shop Dashboard
// =============================================================================

/// A vendor card on the shop dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorOverview {
    pub vendor: Vendor,
    pub product_count: usize,
    pub categories: Vec<String>,
}

/// What the signed-in shop owner sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopDashboard {
    pub shop_owner: User,
    pub categories: Vec<String>,
    pub vendors: Vec<VendorOverview>,
    pub products: Vec<Product>,
    pub cart: Vec<CartItem>,
    /// Σ quantity over cart lines (the navbar badge).
    pub cart_item_count: i64,
    pub cart_total: Money,
    pub orders: Vec<Order>,
}

impl ShopDashboard {
    /// Requires a signed-in shop owner.
    pub fn build(state: &MarketState) -> CoreResult<Self> {
        let shop_owner = state.require_role(Role::ShopOwner)?.clone();

        let vendors = state
            .vendors
            .iter()
            .map(|vendor| {
                let products: Vec<&Product> = state.products_by_vendor(&vendor.id).collect();
                VendorOverview {
                    vendor: vendor.clone(),
                    product_count: products.len(),
                    categories: distinct_categories(products.into_iter()),
                }
            })
            .collect();

        let orders = state
            .orders
            .iter()
            .filter(|o| o.shop_owner_id == shop_owner.id)
            .cloned()
            .collect();

        Ok(ShopDashboard {
            categories: distinct_categories(state.products.iter()),
            vendors,
            products: state.products.clone(),
            cart: state.cart.items().to_vec(),
            cart_item_count: state.cart.total_quantity(),
            cart_total: state.cart.total(),
            orders,
            shop_owner,
        })
    }
}

/// Distinct categories in first-seen order.
fn distinct_categories<'a>(products: impl Iterator<Item = &'a Product>) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for product in products {
        if !categories.contains(&product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}

// =============================================================================
// Store Accessors
// =============================================================================

impl SharedStore {
    /// Dashboard for the signed-in vendor.
    pub fn vendor_dashboard(&self) -> CoreResult<VendorDashboard> {
        self.with_state(VendorDashboard::build)
    }

    /// Dashboard for the signed-in shop owner.
    pub fn shop_dashboard(&self) -> CoreResult<ShopDashboard> {
        self.with_state(ShopDashboard::build)
    }
}
