//! # Error Types
//!
//! Domain-specific error types for farmlink-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  farmlink-core errors (this file)                                      │
//! │  ├── CoreError        - Store operation rejections                     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  farmlink-store errors (separate crate)                                │
//! │  ├── ConfigError      - Config file / env failures                     │
//! │  └── AuthError        - Mock sign-in / sign-up rejections              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → caller (view / demo binary)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rejections, Not No-ops
//! Every store mutation returns `CoreResult<T>`. `Ok` means the change was
//! applied. Each `Err` variant names why it was rejected, and a rejected
//! operation leaves every collection exactly as it was.

use thiserror::Error;

use crate::types::Role;

// =============================================================================
// Core Error
// =============================================================================

/// Reasons a store operation can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The operation needs a signed-in user and there is none.
    ///
    /// ## When This Occurs
    /// - `place_order` / `send_message` / `add_product` after sign-out
    /// - Dashboard queries before sign-in
    #[error("No user is signed in")]
    NotSignedIn,

    /// The signed-in user has the wrong role for the operation.
    #[error("This action requires the {required} role")]
    RoleRequired { required: Role },

    /// Tried to place an order with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// No product with this id exists in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// No cart line exists for this product id.
    #[error("Product {0} not in cart")]
    CartItemNotFound(String),

    /// A freshly generated identifier already exists in its collection.
    ///
    /// ## When This Occurs
    /// Should never happen with UUID v4 ids. Treated as a defect in the id
    /// generator: the insert is refused rather than creating two entities
    /// that share an id.
    #[error("Duplicate {collection} id: {id}")]
    DuplicateId {
        collection: &'static str,
        id: String,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Raised before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., email without '@').
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
