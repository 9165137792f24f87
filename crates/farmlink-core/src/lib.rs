//! # farmlink-core: Pure Domain Logic for the FarmLink Marketplace
//!
//! This crate holds the domain vocabulary shared by every other part of
//! FarmLink: what a product, vendor, cart line, order and message look like,
//! how money is represented, and which inputs are acceptable.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       FarmLink Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Browser Frontend (views)                     │   │
//! │  │   Sign In ──► Shop Dashboard ──► Cart ──► Vendor Dashboard      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ store operations / snapshots           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    farmlink-store                               │   │
//! │  │    SharedStore, mock auth, dashboards, seed data                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ farmlink-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   error   │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │ CoreError │  │   rules   │  │   │
//! │  │   │  Order    │  │           │  │           │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (User, Product, Vendor, CartItem, Order, Message)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use farmlink_core::money::Money;
//!
//! let price = Money::from_cents(2499); // $24.99
//! let line_total = price.multiply_quantity(2);
//!
//! assert_eq!(line_total.cents(), 4998);
//! assert_eq!(line_total.to_string(), "$49.98");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Image used for products created without an explicit image reference.
///
/// The frontend ships this asset; the store never checks that it exists.
pub const DEFAULT_PRODUCT_IMAGE: &str = "/src/assets/product-vegetables.jpg";

/// Minimum password length accepted by the mock sign-up flow.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum distinct lines in one cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single cart line.
///
/// Applies to the line's combined quantity, not only to one addition.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum length of a product name or category.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length of a message body.
pub const MAX_MESSAGE_LENGTH: usize = 2000;
