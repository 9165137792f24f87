//! # farmlink-store: Session State for the FarmLink Marketplace
//!
//! One [`SharedStore`] per session holds everything the marketplace views
//! read and every mutation they may perform.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        FarmLink Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Views                                        │   │
//! │  │   Marketplace ─► Cart ─► Checkout   Vendor Dashboard ─► Msgs   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ clone of SharedStore                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ farmlink-store (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   store   │  │   auth    │  │ dashboard │  │  config   │  │   │
//! │  │   │ RwLock'd  │  │  mock     │  │  read     │  │ TOML+env  │  │   │
//! │  │   │ state     │  │  sign-in  │  │  models   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               farmlink-core (types, Money, validation)          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`] - The plain collections and the cart
//! - [`auth`] - Simulated sign-in / sign-up
//! - [`dashboard`] - Vendor and shop-owner read models
//! - [`config`] - Store configuration
//! - [`ids`] - Id generation strategies
//! - [`clock`] - Time source for order and message timestamps
//! - [`seed`] - Sample vendors and products
//!
//! ## Example Usage
//!
//! ```rust
//! use farmlink_store::SharedStore;
//! use farmlink_core::{Role, User};
//!
//! let store = SharedStore::seeded();
//! store.set_user(Some(User {
//!     id: "owner-1".to_string(),
//!     name: "Sam".to_string(),
//!     email: "sam@corner.shop".to_string(),
//!     role: Some(Role::ShopOwner),
//! }));
//!
//! let tomatoes = store.product("5").unwrap();
//! store.add_to_cart(&tomatoes, 4).unwrap();
//!
//! let orders = store.place_order().unwrap();
//! assert_eq!(orders[0].total.to_string(), "$35.96");
//! assert!(store.cart().is_empty());
//! ```

pub mod auth;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod ids;
pub mod seed;
pub mod state;
mod store;

pub use auth::{AuthError, AuthResult, MockAuth};
pub use config::{ConfigError, ConfigResult, StoreConfig};
pub use dashboard::{ShopDashboard, VendorDashboard, VendorOverview};
pub use ids::IdStrategy;
pub use state::{Cart, MarketState};
pub use store::SharedStore;
