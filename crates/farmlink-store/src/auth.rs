//! # Mock Authentication
//!
//! Simulated sign-in and sign-up. Nothing is verified against a credential
//! store: after a fixed delay, any well-formed input produces a fabricated
//! [`User`] that becomes the store's current user.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Sign In form                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  sign_in(email, password)                                              │
//! │       │  sleep(auth_delay)            (simulated round-trip)           │
//! │       │                                                                 │
//! │       ├── empty field?    → "Please fill in all fields"                │
//! │       ├── no '@'?         → "Please enter a valid email"               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  User { name: local part, role: vendor if email contains "vendor" }    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.set_user(Some(user)) ──► navigate to role.dashboard_path()      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use farmlink_core::validation::{validate_email, validate_password, validate_required};
use farmlink_core::{Role, User, ValidationError};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::ids::EntityKind;
use crate::store::SharedStore;

/// Why a mock sign-in or sign-up was refused.
///
/// Messages match what the forms display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please enter a valid email")]
    InvalidEmail,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

impl From<ValidationError> for AuthError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Required { .. } => AuthError::MissingFields,
            ValidationError::TooShort { min, .. } => AuthError::PasswordTooShort { min },
            _ => AuthError::InvalidEmail,
        }
    }
}

pub type AuthResult<T> = Result<T, AuthError>;

/// Mock auth bound to one store.
#[derive(Debug, Clone)]
pub struct MockAuth {
    store: SharedStore,
    delay: Duration,
}

impl MockAuth {
    pub fn new(store: SharedStore, config: &StoreConfig) -> Self {
        MockAuth {
            store,
            delay: config.auth_delay(),
        }
    }

    /// Overrides the simulated delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Signs in with any email/password pair.
    ///
    /// The role is inferred from the address: emails containing "vendor"
    /// become vendors, everything else a shop owner. The display name is the
    /// part before '@'.
    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult<User> {
        debug!(email = %email, "sign_in");
        tokio::time::sleep(self.delay).await;

        validate_required("email", email)?;
        validate_required("password", password)?;
        validate_email(email)?;

        let role = if email.contains("vendor") {
            Role::Vendor
        } else {
            Role::ShopOwner
        };
        let name = email.split('@').next().unwrap_or_default().to_string();

        let user = User {
            id: self.store.generate_id(EntityKind::User),
            name,
            email: email.to_string(),
            role: Some(role),
        };
        self.store.set_user(Some(user.clone()));

        info!(user_id = %user.id, role = %role, "Signed in");
        Ok(user)
    }

    /// Creates an account with an explicitly chosen role.
    ///
    /// `role` is optional to mirror an untouched role picker; `None` is
    /// rejected as a missing field.
    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Option<Role>,
    ) -> AuthResult<User> {
        debug!(email = %email, "sign_up");
        tokio::time::sleep(self.delay).await;

        validate_required("name", name)?;
        validate_required("email", email)?;
        validate_required("password", password)?;
        let role = role.ok_or(AuthError::MissingFields)?;
        validate_email(email)?;
        validate_password(password)?;

        let user = User {
            id: self.store.generate_id(EntityKind::User),
            name: name.to_string(),
            email: email.to_string(),
            role: Some(role),
        };
        self.store.set_user(Some(user.clone()));

        info!(user_id = %user.id, role = %role, "Account created");
        Ok(user)
    }

    /// Clears the current user, returning who was signed in.
    pub fn sign_out(&self) -> Option<User> {
        let previous = self.store.set_user(None);
        if let Some(user) = &previous {
            info!(user_id = %user.id, "Signed out");
        }
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::IdStrategy;
    use std::time::Duration;
    use tokio::time::Instant;

    fn auth() -> (SharedStore, MockAuth) {
        let config = StoreConfig {
            id_strategy: IdStrategy::Sequential,
            ..StoreConfig::default()
        };
        let store = SharedStore::new(&config);
        let auth = MockAuth::new(store.clone(), &config);
        (store, auth)
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_in_fabricates_user_after_delay() {
        let (store, auth) = auth();
        let started = Instant::now();

        let user = auth.sign_in("vendor@freshfarms.com", "x").await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(800));
        assert_eq!(user.name, "vendor");
        assert_eq!(user.role, Some(Role::Vendor));
        assert_eq!(user.id, "user-1");
        assert_eq!(store.user(), Some(user));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_in_defaults_to_shop_owner() {
        let (_, auth) = auth();
        let user = auth.sign_in("sam@corner.shop", "pw").await.unwrap();
        assert_eq!(user.role, Some(Role::ShopOwner));
        assert_eq!(user.role.map(|r| r.dashboard_path()), Some("/shop-dashboard"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_in_rejections_leave_user_unset() {
        let (store, auth) = auth();

        assert_eq!(
            auth.sign_in("", "pw").await,
            Err(AuthError::MissingFields)
        );
        assert_eq!(
            auth.sign_in("sam@corner.shop", "").await,
            Err(AuthError::MissingFields)
        );
        assert_eq!(
            auth.sign_in("not-an-email", "pw").await,
            Err(AuthError::InvalidEmail)
        );
        assert!(store.user().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_up_validation() {
        let (store, auth) = auth();

        assert_eq!(
            auth.sign_up("Sam", "sam@corner.shop", "secret1", None).await,
            Err(AuthError::MissingFields)
        );
        assert_eq!(
            auth.sign_up("Sam", "sam-at-corner", "secret1", Some(Role::ShopOwner))
                .await,
            Err(AuthError::InvalidEmail)
        );
        assert_eq!(
            auth.sign_up("Sam", "sam@corner.shop", "12345", Some(Role::ShopOwner))
                .await,
            Err(AuthError::PasswordTooShort { min: 6 })
        );
        assert!(store.user().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_up_keeps_chosen_role_and_name() {
        let (store, auth) = auth();

        let user = auth
            .sign_up("Golden Bakery", "hello@goldenbakery.com", "bread123", Some(Role::Vendor))
            .await
            .unwrap();

        assert_eq!(user.name, "Golden Bakery");
        assert_eq!(user.role, Some(Role::Vendor));
        assert_eq!(store.user().map(|u| u.id), Some(user.id));
    }

    #[tokio::test]
    async fn test_sign_out() {
        let (store, auth) = auth();
        let auth = auth.with_delay(Duration::ZERO);

        auth.sign_in("sam@corner.shop", "pw").await.unwrap();
        let previous = auth.sign_out();

        assert_eq!(previous.map(|u| u.name), Some("sam".to_string()));
        assert!(store.user().is_none());
        assert!(auth.sign_out().is_none());
    }
}
