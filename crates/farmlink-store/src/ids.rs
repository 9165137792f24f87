//! # Identifier Generation
//!
//! Every entity the store creates gets an id from an [`IdGenerator`].
//!
//! ## Why Not Timestamps?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Timestamp ids ("1716555600123")                                        │
//! │    Two creations inside the same millisecond → same id  ❌              │
//! │                                                                         │
//! │  UuidIds (default)                                                      │
//! │    122 random bits, no coordination needed                  ✅          │
//! │                                                                         │
//! │  SequentialIds (demos, tests)                                           │
//! │    product-1, product-2, order-1 ... one counter per kind   ✅          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store still checks every generated id against its collection before
//! inserting; a clash is reported as `CoreError::DuplicateId`.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The collection an id is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Product,
    Order,
    Message,
}

impl EntityKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Product => "product",
            EntityKind::Order => "order",
            EntityKind::Message => "message",
        }
    }

    const fn index(&self) -> usize {
        match self {
            EntityKind::User => 0,
            EntityKind::Product => 1,
            EntityKind::Order => 2,
            EntityKind::Message => 3,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Produces identifiers unique within a collection for a session.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self, kind: EntityKind) -> String;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self, _kind: EntityKind) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic per-kind counters: `product-1`, `product-2`, `order-1`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    counters: [AtomicU64; 4],
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self, kind: EntityKind) -> String {
        let n = self.counters[kind.index()].fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", kind.as_str(), n)
    }
}

// =============================================================================
// Strategy (configuration-facing)
// =============================================================================

/// Which generator a store is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    #[default]
    Uuid,
    Sequential,
}

impl IdStrategy {
    /// Instantiates a fresh generator for a new session.
    pub fn generator(&self) -> Arc<dyn IdGenerator> {
        match self {
            IdStrategy::Uuid => Arc::new(UuidIds),
            IdStrategy::Sequential => Arc::new(SequentialIds::new()),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::Uuid => write!(f, "uuid"),
            IdStrategy::Sequential => write!(f, "sequential"),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uuid" | "random" => Ok(IdStrategy::Uuid),
            "sequential" | "counter" => Ok(IdStrategy::Sequential),
            other => Err(format!(
                "Unknown id strategy: '{}'. Valid options: uuid, sequential",
                other
            )),
        }
    }
}
