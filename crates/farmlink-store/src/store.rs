//! # Shared Store
//!
//! The single source of truth and the single mutation surface of a session.
//!
//! ## Thread Safety
//! The state is wrapped in `Arc<RwLock<MarketState>>`:
//! 1. Every view holds a cheap clone of the same `SharedStore`
//! 2. Each mutation holds the write lock for its whole duration
//! 3. Readers clone out under the read lock, so what they see is always a
//!    state some complete operation left behind
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    place_order()                                        │
//! │                                                                         │
//! │  ┌── write lock ────────────────────────────────────────────────────┐  │
//! │  │  cart empty? ──► Err(EmptyCart)                                   │  │
//! │  │  no user?    ──► Err(NotSignedIn)                                 │  │
//! │  │  group lines by vendor                                            │  │
//! │  │  allocate + check one id per vendor ──► Err(DuplicateId)          │  │
//! │  │  ─────────────── nothing written before this line ─────────────── │  │
//! │  │  orders.extend(new)                                               │  │
//! │  │  cart.clear()                                                     │  │
//! │  └───────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  A reader sees either (old orders, full cart) or (new orders, empty     │
//! │  cart). Never a mix.                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! Every mutation validates first and writes last. An `Err` therefore always
//! means "nothing changed".

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use farmlink_core::validation::{
    validate_message_content, validate_new_product, validate_product_patch,
};
use farmlink_core::{
    CartItem, CoreError, CoreResult, Message, NewProduct, Order, OrderStatus, Product,
    ProductPatch, Role, User, Vendor, DEFAULT_PRODUCT_IMAGE,
};
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::config::StoreConfig;
use crate::ids::{EntityKind, IdGenerator, UuidIds};
use crate::state::MarketState;

/// Session-scoped handle to the marketplace state.
///
/// Cloning is cheap and every clone sees the same state. Construct one per
/// session; dropping the last clone tears the session down.
#[derive(Clone)]
pub struct SharedStore {
    state: Arc<RwLock<MarketState>>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    default_image: Arc<str>,
}

impl fmt::Debug for SharedStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedStore")
            .field("state", &self.state)
            .field("default_image", &self.default_image)
            .finish_non_exhaustive()
    }
}

impl Default for SharedStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl SharedStore {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Builds a store for a new session as `config` describes.
    pub fn new(config: &StoreConfig) -> Self {
        let state = if config.seed_sample_data {
            MarketState::seeded()
        } else {
            MarketState::default()
        };

        debug!(
            seeded = config.seed_sample_data,
            id_strategy = %config.id_strategy,
            "Creating shared store"
        );
        Self::from_parts(state, config.id_strategy.generator(), Arc::new(SystemClock))
            .with_default_image(&config.default_image)
    }

    /// Seeded store with UUID ids and the system clock.
    pub fn seeded() -> Self {
        Self::from_parts(
            MarketState::seeded(),
            Arc::new(UuidIds),
            Arc::new(SystemClock),
        )
    }

    /// Assembles a store from explicit parts (tests, embedding).
    pub fn from_parts(
        state: MarketState,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        SharedStore {
            state: Arc::new(RwLock::new(state)),
            ids,
            clock,
            default_image: Arc::from(DEFAULT_PRODUCT_IMAGE),
        }
    }

    /// Image assigned by `add_product` when the input carries none.
    pub fn with_default_image(mut self, image: &str) -> Self {
        self.default_image = Arc::from(image);
        self
    }

    // =========================================================================
    // Lock Access
    // =========================================================================

    /// Executes a function with read access to the state.
    ///
    /// ## Usage
    /// ```rust
    /// use farmlink_store::SharedStore;
    ///
    /// let store = SharedStore::seeded();
    /// let vendor_count = store.with_state(|s| s.vendors.len());
    /// assert_eq!(vendor_count, 3);
    /// ```
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&MarketState) -> R,
    {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    /// Executes a function with exclusive write access to the state.
    ///
    /// A panic inside a previous writer poisons the lock; since every
    /// mutation validates before writing, the state behind a poisoned lock
    /// is still consistent and is used as-is.
    fn with_state_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut MarketState) -> R,
    {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }

    /// Generates an id for `kind` and rejects it if `taken` reports a clash.
    fn fresh_id<F>(&self, kind: EntityKind, taken: F) -> CoreResult<String>
    where
        F: Fn(&str) -> bool,
    {
        let id = self.ids.next_id(kind);
        if taken(&id) {
            return Err(CoreError::DuplicateId {
                collection: kind.as_str(),
                id,
            });
        }
        Ok(id)
    }

    /// An id for an entity that lives outside the store's collections
    /// (mock-auth users).
    pub(crate) fn generate_id(&self, kind: EntityKind) -> String {
        self.ids.next_id(kind)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// A consistent copy of the entire state.
    pub fn snapshot(&self) -> MarketState {
        self.with_state(MarketState::clone)
    }

    pub fn user(&self) -> Option<User> {
        self.with_state(|s| s.user.clone())
    }

    pub fn products(&self) -> Vec<Product> {
        self.with_state(|s| s.products.clone())
    }

    pub fn vendors(&self) -> Vec<Vendor> {
        self.with_state(|s| s.vendors.clone())
    }

    pub fn cart(&self) -> Vec<CartItem> {
        self.with_state(|s| s.cart.items().to_vec())
    }

    pub fn orders(&self) -> Vec<Order> {
        self.with_state(|s| s.orders.clone())
    }

    pub fn messages(&self) -> Vec<Message> {
        self.with_state(|s| s.messages.clone())
    }

    pub fn product(&self, id: &str) -> Option<Product> {
        self.with_state(|s| s.product(id).cloned())
    }

    pub fn vendor(&self, id: &str) -> Option<Vendor> {
        self.with_state(|s| s.vendor(id).cloned())
    }

    /// Catalog products owned by `vendor_id`.
    ///
    /// Derived from `Product::vendor_id`; `Vendor::products` is not consulted.
    pub fn products_by_vendor(&self, vendor_id: &str) -> Vec<Product> {
        self.with_state(|s| s.products_by_vendor(vendor_id).cloned().collect())
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Replaces the current user wholesale, returning the previous one.
    pub fn set_user(&self, user: Option<User>) -> Option<User> {
        debug!(user_id = ?user.as_ref().map(|u| u.id.as_str()), "set_user");
        self.with_state_mut(|s| std::mem::replace(&mut s.user, user))
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds `quantity` of `product` to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases
    /// - Otherwise: appended as a new line with a snapshot of `product`
    /// - `quantity <= 0`: `Validation` error, cart unchanged
    pub fn add_to_cart(&self, product: &Product, quantity: i64) -> CoreResult<()> {
        debug!(product_id = %product.id, quantity, "add_to_cart");
        self.with_state_mut(|s| s.cart.add_item(product, quantity))
    }

    /// Removes the cart line for `product_id`, returning it.
    pub fn remove_from_cart(&self, product_id: &str) -> CoreResult<CartItem> {
        debug!(product_id = %product_id, "remove_from_cart");
        self.with_state_mut(|s| s.cart.remove_item(product_id))
    }

    /// Empties the cart unconditionally.
    pub fn clear_cart(&self) {
        debug!("clear_cart");
        self.with_state_mut(|s| s.cart.clear());
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Creates a product owned by the signed-in vendor.
    ///
    /// ## Errors
    /// In the order they are checked:
    /// - `NotSignedIn` / `RoleRequired` unless a vendor is signed in
    /// - `Validation` for a blank name or category, negative price or stock
    /// - `DuplicateId` if the generator returns an id already in the catalog
    pub fn add_product(&self, new: NewProduct) -> CoreResult<Product> {
        debug!(name = %new.name, "add_product");

        self.with_state_mut(|s| {
            let vendor_id = s.require_role(Role::Vendor)?.id.clone();
            validate_new_product(&new)?;
            let id = self.fresh_id(EntityKind::Product, |id| s.product(id).is_some())?;

            let product = Product::from_new(id, vendor_id, new, &self.default_image);
            s.products.push(product.clone());

            info!(product_id = %product.id, vendor_id = %product.vendor_id, "Product added");
            Ok(product)
        })
    }

    /// Merges the present fields of `patch` into product `id`.
    ///
    /// No ownership check: any caller may update any product by id.
    ///
    /// ## Errors
    /// `ProductNotFound` is checked before the patch is validated.
    pub fn update_product(&self, id: &str, patch: ProductPatch) -> CoreResult<Product> {
        debug!(product_id = %id, "update_product");

        self.with_state_mut(|s| {
            let product = s
                .products
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;
            validate_product_patch(&patch)?;

            patch.apply_to(product);
            Ok(product.clone())
        })
    }

    /// Removes product `id` from the catalog, returning it.
    ///
    /// Cart lines and orders keep their own snapshots and are not touched.
    pub fn delete_product(&self, id: &str) -> CoreResult<Product> {
        debug!(product_id = %id, "delete_product");

        self.with_state_mut(|s| {
            let index = s
                .products
                .iter()
                .position(|p| p.id == id)
                .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

            Ok(s.products.remove(index))
        })
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Turns the whole cart into orders, one per vendor, and clears the cart.
    ///
    /// ## Returns
    /// The created orders, in the order their vendors first appear in the
    /// cart. Each order's `total` covers only its own lines.
    ///
    /// ## Errors
    /// - `EmptyCart` (checked first)
    /// - `NotSignedIn`
    /// - `DuplicateId` if the generator clashes with an existing order
    pub fn place_order(&self) -> CoreResult<Vec<Order>> {
        debug!("place_order");
        let now = self.clock.now();

        self.with_state_mut(|s| {
            if s.cart.is_empty() {
                return Err(CoreError::EmptyCart);
            }
            let shop_owner_id = s.require_user()?.id.clone();
            let lines = s.cart.item_count();

            let mut placed: Vec<Order> = Vec::new();
            for batch in s.cart.vendor_batches() {
                let id = self.fresh_id(EntityKind::Order, |id| {
                    s.orders.iter().chain(&placed).any(|o| o.id == id)
                })?;

                placed.push(Order {
                    id,
                    shop_owner_id: shop_owner_id.clone(),
                    vendor_id: batch.vendor_id,
                    items: batch.items,
                    total: batch.total,
                    status: OrderStatus::Pending,
                    created_at: now,
                });
            }

            s.orders.extend(placed.iter().cloned());
            s.cart.clear();

            info!(
                shop_owner_id = %shop_owner_id,
                orders = placed.len(),
                lines,
                "Order placed"
            );
            Ok(placed)
        })
    }

    // =========================================================================
    // Messages
    // =========================================================================

    /// Sends `content` from the signed-in user to `to`.
    ///
    /// The recipient is not checked against any collection; vendors and
    /// shop owners share one id space only by convention.
    pub fn send_message(&self, to: &str, content: &str) -> CoreResult<Message> {
        debug!(to = %to, "send_message");
        let now = self.clock.now();

        self.with_state_mut(|s| {
            let sender_id = s.require_user()?.id.clone();
            validate_message_content(content)?;
            let id = self.fresh_id(EntityKind::Message, |id| {
                s.messages.iter().any(|m| m.id == id)
            })?;

            let message = Message {
                id,
                sender_id,
                recipient_id: to.to_string(),
                content: content.to_string(),
                created_at: now,
                read: false,
            };
            s.messages.push(message.clone());
            Ok(message)
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::ids::SequentialIds;
    use chrono::{TimeZone, Utc};
    use farmlink_core::{Money, ValidationError, MAX_ITEM_QUANTITY};
    use std::thread;

    struct ConstantIds(&'static str);

    impl IdGenerator for ConstantIds {
        fn next_id(&self, _kind: EntityKind) -> String {
            self.0.to_string()
        }
    }

    fn test_store() -> SharedStore {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap());
        SharedStore::from_parts(
            MarketState::seeded(),
            Arc::new(SequentialIds::new()),
            Arc::new(clock),
        )
    }

    fn user(id: &str, role: Role) -> User {
        User {
            id: id.to_string(),
            name: id.to_string(),
            email: format!("{}@example.com", id),
            role: Some(role),
        }
    }

    fn product(id: &str, price_cents: i64, vendor_id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            category: "Produce".to_string(),
            price: Money::from_cents(price_cents),
            quantity: 10,
            vendor_id: vendor_id.to_string(),
            image: String::new(),
        }
    }

    fn new_product() -> NewProduct {
        NewProduct {
            name: "Wildflower Honey".to_string(),
            category: "Pantry".to_string(),
            price: Money::from_cents(1250),
            quantity: 12,
            image: String::new(),
        }
    }

    #[test]
    fn test_add_same_product_twice_sums_quantity() {
        let store = test_store();
        let x = store.product("1").unwrap();

        store.add_to_cart(&x, 2).unwrap();
        store.add_to_cart(&x, 3).unwrap();

        let cart = store.cart();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 5);
    }

    #[test]
    fn test_add_to_cart_rejects_zero_quantity() {
        let store = test_store();
        let x = store.product("1").unwrap();

        assert!(matches!(
            store.add_to_cart(&x, 0),
            Err(CoreError::Validation(_))
        ));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_cart_line_quantity_is_capped() {
        let store = test_store();
        let x = store.product("1").unwrap();
        store.add_to_cart(&x, MAX_ITEM_QUANTITY).unwrap();
        let before = store.snapshot();

        assert!(matches!(
            store.add_to_cart(&x, 1),
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
        assert!(matches!(
            store.add_to_cart(&x, i64::MAX),
            Err(CoreError::Validation(_))
        ));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_unrepresentable_total_never_reaches_place_order() {
        let store = test_store();
        store.set_user(Some(user("owner", Role::ShopOwner)));
        let bulk = product("bulk", i64::MAX / 1000, "v1");
        store.add_to_cart(&bulk, MAX_ITEM_QUANTITY).unwrap();
        let before = store.snapshot();

        assert!(matches!(
            store.add_to_cart(&product("more", i64::MAX / 1000, "v2"), 2),
            Err(CoreError::Validation(_))
        ));
        assert_eq!(store.snapshot(), before);

        let placed = store.place_order().unwrap();
        assert_eq!(placed.len(), 1);
        assert_eq!(
            placed[0].total,
            Money::from_cents(i64::MAX / 1000 * MAX_ITEM_QUANTITY)
        );
    }

    #[test]
    fn test_remove_absent_product_leaves_cart_unchanged() {
        let store = test_store();
        store.add_to_cart(&store.product("2").unwrap(), 1).unwrap();
        let before = store.cart();

        assert_eq!(
            store.remove_from_cart("999"),
            Err(CoreError::CartItemNotFound("999".to_string()))
        );
        assert_eq!(store.cart(), before);
    }

    #[test]
    fn test_remove_and_clear_cart() {
        let store = test_store();
        store.add_to_cart(&store.product("1").unwrap(), 1).unwrap();
        store.add_to_cart(&store.product("2").unwrap(), 1).unwrap();

        let removed = store.remove_from_cart("1").unwrap();
        assert_eq!(removed.product_id, "1");
        assert_eq!(store.cart().len(), 1);

        store.clear_cart();
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_place_order_on_empty_cart_changes_nothing() {
        let store = test_store();
        store.set_user(Some(user("owner", Role::ShopOwner)));

        assert_eq!(store.place_order(), Err(CoreError::EmptyCart));
        assert!(store.orders().is_empty());
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_place_order_without_user_changes_nothing() {
        let store = test_store();
        store.add_to_cart(&store.product("1").unwrap(), 1).unwrap();
        let cart_before = store.cart();

        assert_eq!(store.place_order(), Err(CoreError::NotSignedIn));
        assert!(store.orders().is_empty());
        assert_eq!(store.cart(), cart_before);
    }

    #[test]
    fn test_place_order_totals_and_clears_cart() {
        let store = test_store();
        store.set_user(Some(user("owner", Role::ShopOwner)));
        store.add_to_cart(&product("A", 1000, "v1"), 2).unwrap();
        store.add_to_cart(&product("B", 500, "v1"), 1).unwrap();
        let cart_before = store.cart();

        let placed = store.place_order().unwrap();

        assert_eq!(placed.len(), 1);
        let order = &placed[0];
        assert_eq!(order.total, Money::from_cents(2500));
        assert_eq!(order.total.to_string(), "$25.00");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items, cart_before);
        assert_eq!(order.shop_owner_id, "owner");
        assert_eq!(order.vendor_id, "v1");
        assert_eq!(order.id, "order-1");
        assert_eq!(
            order.created_at,
            Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
        );
        assert!(store.cart().is_empty());
        assert_eq!(store.orders(), placed);
    }

    #[test]
    fn test_mixed_vendor_cart_splits_orders() {
        let store = test_store();
        store.set_user(Some(user("owner", Role::ShopOwner)));
        store.add_to_cart(&store.product("1").unwrap(), 2).unwrap(); // v1 24.99
        store.add_to_cart(&store.product("2").unwrap(), 1).unwrap(); // v2 18.99
        store.add_to_cart(&store.product("5").unwrap(), 3).unwrap(); // v1 8.99

        let placed = store.place_order().unwrap();

        assert_eq!(placed.len(), 2);
        assert_eq!(placed[0].vendor_id, "1");
        assert_eq!(placed[0].total.cents(), 2 * 2499 + 3 * 899);
        assert_eq!(placed[1].vendor_id, "2");
        assert_eq!(placed[1].total.cents(), 1899);
        assert_ne!(placed[0].id, placed[1].id);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_order_id_clash_is_rejected_atomically() {
        let store = SharedStore::from_parts(
            MarketState::seeded(),
            Arc::new(ConstantIds("same")),
            Arc::new(SystemClock),
        );
        store.set_user(Some(user("owner", Role::ShopOwner)));
        store.add_to_cart(&product("A", 100, "v1"), 1).unwrap();
        store.add_to_cart(&product("B", 100, "v2"), 1).unwrap();

        assert_eq!(
            store.place_order(),
            Err(CoreError::DuplicateId {
                collection: "order",
                id: "same".to_string()
            })
        );
        assert!(store.orders().is_empty());
        assert_eq!(store.cart().len(), 2);
    }

    #[test]
    fn test_add_product_assigns_id_and_vendor() {
        let store = test_store();
        store.set_user(Some(user("vendor-7", Role::Vendor)));

        let created = store.add_product(new_product()).unwrap();

        assert_eq!(created.id, "product-1");
        assert_eq!(created.vendor_id, "vendor-7");
        assert_eq!(created.image, farmlink_core::DEFAULT_PRODUCT_IMAGE);
        assert_eq!(store.products().len(), 7);
        assert_eq!(store.products_by_vendor("vendor-7"), vec![created]);
    }

    #[test]
    fn test_add_product_requires_vendor() {
        let store = test_store();
        assert_eq!(
            store.add_product(new_product()),
            Err(CoreError::NotSignedIn)
        );

        store.set_user(Some(user("owner", Role::ShopOwner)));
        assert_eq!(
            store.add_product(new_product()),
            Err(CoreError::RoleRequired {
                required: Role::Vendor
            })
        );
        assert_eq!(store.products().len(), 6);
    }

    #[test]
    fn test_add_product_checks_role_before_input() {
        let store = test_store();
        let blank = NewProduct {
            name: String::new(),
            ..new_product()
        };

        assert_eq!(store.add_product(blank.clone()), Err(CoreError::NotSignedIn));

        store.set_user(Some(user("vendor-7", Role::Vendor)));
        assert!(matches!(
            store.add_product(blank),
            Err(CoreError::Validation(ValidationError::Required { .. }))
        ));
        assert_eq!(store.products().len(), 6);
    }

    #[test]
    fn test_add_product_uses_configured_default_image() {
        let config = StoreConfig {
            default_image: "/img/placeholder.jpg".to_string(),
            ..StoreConfig::default()
        };
        let store = SharedStore::new(&config);
        store.set_user(Some(user("vendor-7", Role::Vendor)));

        let created = store.add_product(new_product()).unwrap();
        assert_eq!(created.image, "/img/placeholder.jpg");

        let explicit = store
            .add_product(NewProduct {
                image: "/img/honey.jpg".to_string(),
                ..new_product()
            })
            .unwrap();
        assert_eq!(explicit.image, "/img/honey.jpg");
    }

    #[test]
    fn test_add_product_rejects_id_clash() {
        let store = SharedStore::from_parts(
            MarketState::seeded(),
            Arc::new(ConstantIds("1")),
            Arc::new(SystemClock),
        );
        store.set_user(Some(user("vendor-7", Role::Vendor)));

        assert!(matches!(
            store.add_product(new_product()),
            Err(CoreError::DuplicateId { .. })
        ));
        assert_eq!(store.products().len(), 6);
    }

    #[test]
    fn test_partial_update_changes_only_given_field() {
        let store = test_store();
        store.set_user(Some(user("vendor-7", Role::Vendor)));
        let created = store.add_product(new_product()).unwrap();

        let patch = ProductPatch {
            price: Some(Money::from_cents(1400)),
            ..ProductPatch::default()
        };
        let updated = store.update_product(&created.id, patch).unwrap();

        assert_eq!(updated.price, Money::from_cents(1400));
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.category, created.category);
        assert_eq!(updated.quantity, created.quantity);
        assert_eq!(updated.vendor_id, created.vendor_id);
        assert_eq!(store.product(&created.id), Some(updated));
    }

    #[test]
    fn test_invalid_patch_is_rejected() {
        let store = test_store();
        let patch = ProductPatch {
            quantity: Some(-1),
            ..ProductPatch::default()
        };

        assert!(matches!(
            store.update_product("1", patch),
            Err(CoreError::Validation(_))
        ));
        assert_eq!(store.product("1").map(|p| p.quantity), Some(50));
    }

    #[test]
    fn test_update_missing_product_is_not_found_before_validation() {
        let store = test_store();
        let patch = ProductPatch {
            quantity: Some(-1),
            ..ProductPatch::default()
        };

        assert_eq!(
            store.update_product("999", patch),
            Err(CoreError::ProductNotFound("999".to_string()))
        );
    }

    #[test]
    fn test_update_after_delete_is_not_found() {
        let store = test_store();

        let deleted = store.delete_product("3").unwrap();
        assert_eq!(deleted.name, "Artisan Bread Collection");

        let patch = ProductPatch {
            name: Some("Sourdough".to_string()),
            ..ProductPatch::default()
        };
        assert_eq!(
            store.update_product("3", patch),
            Err(CoreError::ProductNotFound("3".to_string()))
        );
        assert!(store.product("3").is_none());
        assert_eq!(
            store.delete_product("3"),
            Err(CoreError::ProductNotFound("3".to_string()))
        );
    }

    #[test]
    fn test_send_message_without_user_changes_nothing() {
        let store = test_store();

        assert_eq!(
            store.send_message("1", "Hello"),
            Err(CoreError::NotSignedIn)
        );
        assert!(store.messages().is_empty());
    }

    #[test]
    fn test_send_message() {
        let store = test_store();
        store.set_user(Some(user("owner", Role::ShopOwner)));

        let msg = store.send_message("1", "Do you deliver on Mondays?").unwrap();

        assert_eq!(msg.sender_id, "owner");
        assert_eq!(msg.recipient_id, "1");
        assert!(!msg.read);
        assert_eq!(msg.id, "message-1");
        assert_eq!(store.messages(), vec![msg]);
        assert!(store.send_message("1", "  ").is_err());
        assert_eq!(store.messages().len(), 1);
    }

    #[test]
    fn test_set_user_returns_previous() {
        let store = test_store();
        assert_eq!(store.set_user(Some(user("a", Role::Vendor))), None);
        let previous = store.set_user(None);
        assert_eq!(previous.map(|u| u.id), Some("a".to_string()));
        assert!(store.user().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = test_store();
        let view = store.clone();

        store.add_to_cart(&store.product("4").unwrap(), 1).unwrap();

        assert_eq!(view.cart().len(), 1);
    }

    /// A reader racing `place_order` must see either the full cart with no
    /// orders or an empty cart with the order, never anything in between.
    #[test]
    fn test_readers_never_observe_partial_order() {
        for _ in 0..50 {
            let store = test_store();
            store.set_user(Some(user("owner", Role::ShopOwner)));
            store.add_to_cart(&product("A", 1000, "v1"), 2).unwrap();

            let reader = store.clone();
            let handle = thread::spawn(move || {
                for _ in 0..200 {
                    let (cart_len, order_count) =
                        reader.with_state(|s| (s.cart.item_count(), s.orders.len()));
                    assert!(
                        (cart_len == 1 && order_count == 0) || (cart_len == 0 && order_count == 1),
                        "observed cart={} orders={}",
                        cart_len,
                        order_count
                    );
                }
            });

            store.place_order().unwrap();
            handle.join().unwrap();
        }
    }
}
