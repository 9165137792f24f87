//! # Validation Module
//!
//! Input validation utilities for FarmLink.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend forms                                               │
//! │  ├── "Please fill in all fields"                                       │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store operations (Rust)                                      │
//! │  └── THIS MODULE: checked before any collection is touched             │
//! │                                                                         │
//! │  A rejected input never leaves a half-applied change behind.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use farmlink_core::validation::{validate_email, validate_quantity};
//!
//! assert!(validate_email("vendor@freshfarms.com").is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{NewProduct, ProductPatch};
use crate::{
    MAX_CART_ITEMS, MAX_ITEM_QUANTITY, MAX_MESSAGE_LENGTH, MAX_NAME_LENGTH, MIN_PASSWORD_LENGTH,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Rejects empty or whitespace-only values.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

fn validate_label(field: &str, value: &str) -> ValidationResult<()> {
    validate_required(field, value)?;

    if value.trim().len() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use farmlink_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Farm Fresh Tomatoes").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_label("name", name)
}

/// Validates a product category. Same rules as the product name.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    validate_label("category", category)
}

/// Validates an email address the way the sign-in form does.
///
/// ## Rules
/// - Must not be empty
/// - Must contain '@'
///
/// No deliverability or domain check: the mock auth flow accepts any address
/// of this shape.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    validate_required("email", email)?;

    if !email.contains('@') {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must contain '@'".to_string(),
        });
    }

    Ok(())
}

/// Validates a sign-up password.
///
/// ## Rules
/// - Must not be empty
/// - At least [`MIN_PASSWORD_LENGTH`] characters
pub fn validate_password(password: &str) -> ValidationResult<()> {
    validate_required("password", password)?;

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LENGTH,
        });
    }

    Ok(())
}

/// Validates a message body.
pub fn validate_message_content(content: &str) -> ValidationResult<()> {
    validate_required("content", content)?;

    if content.len() > MAX_MESSAGE_LENGTH {
        return Err(ValidationError::TooLong {
            field: "content".to_string(),
            max: MAX_MESSAGE_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity added to the cart.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_ITEM_QUANTITY`] (999)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Shop Dashboard: "Add to Cart"                                         │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(1) ← THIS FUNCTION                                  │
/// │       │                                                                 │
/// │       ├── qty <= 0? → Error: "quantity must be positive"               │
/// │       │                                                                 │
/// │       ├── qty > 999? → Error: "quantity must be between 1 and 999"     │
/// │       │                                                                 │
/// │       └── OK → line appended or incremented                            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates that a cart holding `current_items` lines may take another.
///
/// ## Rules
/// - Must not exceed [`MAX_CART_ITEMS`] (100)
pub fn validate_cart_size(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_CART_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "cart items".to_string(),
            min: 0,
            max: MAX_CART_ITEMS as i64,
        });
    }
    Ok(())
}

/// Validates a stock level. Zero is allowed (sold out).
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }
    Ok(())
}

/// Validates a unit price. Zero is allowed (free samples).
///
/// ## Example
/// ```rust
/// use farmlink_core::money::Money;
/// use farmlink_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(899)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }
    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates every field of a new product.
pub fn validate_new_product(product: &NewProduct) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_category(&product.category)?;
    validate_price(product.price)?;
    validate_stock(product.quantity)?;
    Ok(())
}

/// Validates the fields a patch would overwrite.
pub fn validate_product_patch(patch: &ProductPatch) -> ValidationResult<()> {
    if let Some(name) = &patch.name {
        validate_product_name(name)?;
    }
    if let Some(category) = &patch.category {
        validate_category(category)?;
    }
    if let Some(price) = patch.price {
        validate_price(price)?;
    }
    if let Some(quantity) = patch.quantity {
        validate_stock(quantity)?;
    }
    if let Some(vendor_id) = &patch.vendor_id {
        validate_required("vendorId", vendor_id)?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
