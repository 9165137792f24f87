//! # Cart
//!
//! The shop owner's in-progress selection.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Frontend Action          Store Operation         Cart Change           │
//! │  ───────────────          ───────────────         ───────────           │
//! │                                                                         │
//! │  "Add to Cart" ──────────► add_to_cart() ───────► push / qty += n      │
//! │                                                                         │
//! │  Click Remove ───────────► remove_from_cart() ──► items.remove(i)      │
//! │                                                                         │
//! │  "Place Order" ──────────► place_order() ───────► vendor_batches()     │
//! │                                                   then clear()         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use farmlink_core::validation::{validate_cart_size, validate_price, validate_quantity};
use farmlink_core::{CartItem, CoreError, CoreResult, Money, Product, ValidationError};
use serde::{Deserialize, Serialize};

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product increases
///   its quantity)
/// - Lines keep insertion order
/// - Every quantity is in `1..=MAX_ITEM_QUANTITY`
/// - At most `MAX_CART_ITEMS` lines
/// - Every snapshot price is >= 0 and Σ(price × quantity) fits in `i64`
///   cents, so `total()` and `vendor_batches()` cannot overflow
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

/// The cart lines addressed to one vendor, in cart order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorBatch {
    pub vendor_id: String,
    pub items: Vec<CartItem>,
    pub total: Money,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// ## Behavior
    /// - If product already in cart: increases quantity, keeps the original
    ///   snapshot
    /// - If product not in cart: appends a new line with a snapshot
    ///
    /// ## Errors
    /// `Validation` when the added or the combined quantity is out of
    /// range, the cart is full, the price is negative, or the new cart total
    /// would not fit in `i64` cents. The cart is untouched on error.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        let existing = self.items.iter().position(|i| i.product_id == product.id);
        let unit_price = match existing {
            Some(index) => {
                let item = &self.items[index];
                let combined = item
                    .quantity
                    .checked_add(quantity)
                    .ok_or_else(quantity_overflow)?;
                validate_quantity(combined)?;
                item.product.price
            }
            None => {
                validate_cart_size(self.items.len())?;
                validate_price(product.price)?;
                product.price
            }
        };

        unit_price
            .checked_mul(quantity)
            .and_then(|added| self.checked_total()?.checked_add(added))
            .ok_or_else(total_overflow)?;

        match existing {
            Some(index) => self.items[index].quantity += quantity,
            None => self.items.push(CartItem::from_product(product, quantity)),
        }
        Ok(())
    }

    /// Removes the line for `product_id`, returning it.
    pub fn remove_item(&mut self, product_id: &str) -> CoreResult<CartItem> {
        let index = self
            .items
            .iter()
            .position(|i| i.product_id == product_id)
            .ok_or_else(|| CoreError::CartItemNotFound(product_id.to_string()))?;

        Ok(self.items.remove(index))
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Returns the number of unique lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all lines (the navbar badge).
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Σ(price × quantity) over all lines.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    fn checked_total(&self) -> Option<Money> {
        self.items.iter().try_fold(Money::zero(), |acc, item| {
            item.product
                .price
                .checked_mul(item.quantity)
                .and_then(|line| acc.checked_add(line))
        })
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Groups lines by vendor, vendors in order of first appearance.
    ///
    /// ```text
    /// cart:     [A(v1), B(v2), C(v1)]
    /// batches:  v1 → [A, C]    v2 → [B]
    /// ```
    pub fn vendor_batches(&self) -> Vec<VendorBatch> {
        let mut batches: Vec<VendorBatch> = Vec::new();

        for item in &self.items {
            match batches.iter_mut().find(|b| b.vendor_id == item.vendor_id()) {
                Some(batch) => {
                    batch.total += item.line_total();
                    batch.items.push(item.clone());
                }
                None => batches.push(VendorBatch {
                    vendor_id: item.vendor_id().to_string(),
                    items: vec![item.clone()],
                    total: item.line_total(),
                }),
            }
        }

        batches
    }
}

fn quantity_overflow() -> CoreError {
    ValidationError::OutOfRange {
        field: "quantity".to_string(),
        min: 1,
        max: farmlink_core::MAX_ITEM_QUANTITY,
    }
    .into()
}

fn total_overflow() -> CoreError {
    ValidationError::OutOfRange {
        field: "cart total".to_string(),
        min: 0,
        max: i64::MAX,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use farmlink_core::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

    fn test_product(id: &str, price_cents: i64, vendor_id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            category: "Vegetables".to_string(),
            price: Money::from_cents(price_cents),
            quantity: 100,
            vendor_id: vendor_id.to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        let product = test_product("1", 999, "v1");

        cart.add_item(&product, 2).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.total().cents(), 1998);
    }

    #[test]
    fn test_cart_add_same_product_increases_quantity() {
        let mut cart = Cart::new();
        let product = test_product("1", 999, "v1");

        cart.add_item(&product, 2).unwrap();
        cart.add_item(&product, 3).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
    }

    #[test]
    fn test_cart_keeps_first_snapshot() {
        let mut cart = Cart::new();
        let mut product = test_product("1", 999, "v1");
        cart.add_item(&product, 1).unwrap();

        product.price = Money::from_cents(1299);
        cart.add_item(&product, 1).unwrap();

        assert_eq!(cart.total().cents(), 1998);
    }

    #[test]
    fn test_cart_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        let product = test_product("1", 999, "v1");

        assert!(matches!(
            cart.add_item(&product, 0),
            Err(CoreError::Validation(_))
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_missing_item_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 999, "v1"), 2).unwrap();
        let before = cart.clone();

        assert_eq!(
            cart.remove_item("nope"),
            Err(CoreError::CartItemNotFound("nope".to_string()))
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_vendor_batches_group_in_first_seen_order() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 1000, "v1"), 2).unwrap();
        cart.add_item(&test_product("b", 500, "v2"), 1).unwrap();
        cart.add_item(&test_product("c", 250, "v1"), 4).unwrap();

        let batches = cart.vendor_batches();

        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].vendor_id, "v1");
        assert_eq!(batches[0].items.len(), 2);
        assert_eq!(batches[0].total.cents(), 3000);
        assert_eq!(batches[1].vendor_id, "v2");
        assert_eq!(batches[1].total.cents(), 500);
    }

    #[test]
    fn test_combined_quantity_is_capped() {
        let mut cart = Cart::new();
        let product = test_product("1", 2499, "v1");
        cart.add_item(&product, MAX_ITEM_QUANTITY).unwrap();
        let before = cart.clone();

        assert_eq!(
            cart.add_item(&product, 1),
            Err(CoreError::Validation(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 1,
                max: MAX_ITEM_QUANTITY,
            }))
        );
        assert_eq!(cart, before);
        assert!(cart.add_item(&product, i64::MAX).is_err());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_cart_total_must_fit_in_cents() {
        let mut cart = Cart::new();
        let pricey = test_product("a", i64::MAX / 1000, "v1");
        cart.add_item(&pricey, MAX_ITEM_QUANTITY).unwrap();
        let before = cart.clone();

        let other = test_product("b", i64::MAX / 1000, "v2");
        assert!(matches!(
            cart.add_item(&other, 2),
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
        assert_eq!(cart, before);
        assert_eq!(cart.total(), Money::from_cents(i64::MAX / 1000 * MAX_ITEM_QUANTITY));

        let single = test_product("c", i64::MAX / 2, "v1");
        assert!(Cart::new().add_item(&single, 3).is_err());
    }

    #[test]
    fn test_cart_rejects_negative_price_and_full_cart() {
        let mut cart = Cart::new();
        assert!(cart.add_item(&test_product("neg", -1, "v1"), 1).is_err());
        assert!(cart.is_empty());

        for n in 0..MAX_CART_ITEMS {
            cart.add_item(&test_product(&n.to_string(), 100, "v1"), 1).unwrap();
        }
        assert!(cart.add_item(&test_product("extra", 100, "v1"), 1).is_err());
        assert_eq!(cart.item_count(), MAX_CART_ITEMS);

        // an existing line can still grow
        cart.add_item(&test_product("0", 100, "v1"), 1).unwrap();
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 999, "v1"), 1).unwrap();

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }
}
