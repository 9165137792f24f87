//! # Store Configuration
//!
//! Settings that shape a session: whether sample data is seeded, how ids
//! are generated, how long the mock auth round-trip takes.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     FARMLINK_SEED=false                                                │
//! │     FARMLINK_ID_STRATEGY=sequential                                    │
//! │     FARMLINK_AUTH_DELAY_MS=0                                           │
//! │     FARMLINK_CURRENCY_SYMBOL=€                                         │
//! │     FARMLINK_DEFAULT_IMAGE=/img/placeholder.jpg                        │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/farmlink/farmlink.toml (Linux)                           │
//! │     ~/Library/Application Support/com.farmlink.marketplace/ (macOS)    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     seeded, uuid ids, 800 ms auth delay, "$", vegetables image         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! seed_sample_data = true
//! id_strategy = "sequential"
//! auth_delay_ms = 800
//! currency_symbol = "$"
//! default_image = "/src/assets/product-vegetables.jpg"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use farmlink_core::{Money, DEFAULT_PRODUCT_IMAGE};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::ids::IdStrategy;

const CONFIG_FILE_NAME: &str = "farmlink.toml";

// =============================================================================
// Config Error
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Store Config
// =============================================================================

/// Per-session store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Seed the fixed sample vendors and products on construction.
    #[serde(default = "default_seed")]
    pub seed_sample_data: bool,

    /// Identifier generator for new entities.
    #[serde(default)]
    pub id_strategy: IdStrategy,

    /// Simulated round-trip of sign-in / sign-up (milliseconds).
    #[serde(default = "default_auth_delay_ms")]
    pub auth_delay_ms: u64,

    /// Currency symbol used by [`StoreConfig::format_currency`].
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Image given to new products submitted without one.
    #[serde(default = "default_image")]
    pub default_image: String,
}

fn default_seed() -> bool {
    true
}

fn default_auth_delay_ms() -> u64 {
    800
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_image() -> String {
    DEFAULT_PRODUCT_IMAGE.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            seed_sample_data: default_seed(),
            id_strategy: IdStrategy::default(),
            auth_delay_ms: default_auth_delay_ms(),
            currency_symbol: default_currency_symbol(),
            default_image: default_image(),
        }
    }
}

impl StoreConfig {
    // =========================================================================
    // Loading
    // =========================================================================

    /// Loads configuration from file (if present), then environment.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration, falling back to defaults on any error.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load store config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading store config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies `FARMLINK_*` overrides read through `lookup`.
    ///
    /// `lookup` is `std::env::var` in production; tests pass a map.
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup("FARMLINK_SEED") {
            match seed.to_lowercase().as_str() {
                "1" | "true" | "yes" => self.seed_sample_data = true,
                "0" | "false" | "no" => self.seed_sample_data = false,
                other => warn!(value = %other, "Ignoring invalid FARMLINK_SEED"),
            }
        }

        if let Some(strategy) = lookup("FARMLINK_ID_STRATEGY") {
            match strategy.parse() {
                Ok(parsed) => self.id_strategy = parsed,
                Err(e) => warn!("Ignoring FARMLINK_ID_STRATEGY: {}", e),
            }
        }

        if let Some(delay) = lookup("FARMLINK_AUTH_DELAY_MS") {
            match delay.parse() {
                Ok(ms) => self.auth_delay_ms = ms,
                Err(_) => warn!(value = %delay, "Ignoring invalid FARMLINK_AUTH_DELAY_MS"),
            }
        }

        if let Some(symbol) = lookup("FARMLINK_CURRENCY_SYMBOL") {
            debug!(symbol = %symbol, "Overriding currency symbol from environment");
            self.currency_symbol = symbol;
        }

        if let Some(image) = lookup("FARMLINK_DEFAULT_IMAGE") {
            debug!(image = %image, "Overriding default product image from environment");
            self.default_image = image;
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "currency_symbol must not be empty".to_string(),
            ));
        }
        if self.default_image.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "default_image must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Platform config path, e.g. `~/.config/farmlink/farmlink.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "farmlink", "marketplace")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// The mock auth delay as a `Duration`.
    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms)
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use farmlink_core::{Money, DEFAULT_PRODUCT_IMAGE};
    /// use farmlink_store::StoreConfig;
    ///
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(2499)), "$24.99");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }
}
