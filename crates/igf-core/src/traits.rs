//! # Core Traits (Ports)
//!
//! Any store plugin must implement these traits to be used by the binary.

use async_trait::async_trait;

use crate::models::{Game, GameFields, GameId};

/// Client contract over a single document collection of game records.
///
/// Ids the store cannot parse behave like absent ids: `Ok(None)` from lookups
/// and `Ok(false)` from mutations.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Every document, in store-native order.
    async fn find_all(&self) -> anyhow::Result<Vec<Game>>;

    /// Every document whose `field` equals `value` exactly.
    async fn find_by_field(&self, field: &str, value: &str) -> anyhow::Result<Vec<Game>>;

    /// Identifiers of every document, without their fields.
    async fn find_ids(&self) -> anyhow::Result<Vec<GameId>>;

    async fn find_by_id(&self, id: &GameId) -> anyhow::Result<Option<Game>>;

    /// Stores a new document and returns the identifier assigned to it.
    async fn insert_one(&self, fields: GameFields) -> anyhow::Result<GameId>;

    /// Overwrites every field of the document. Returns false when nothing matched.
    async fn replace_by_id(&self, id: &GameId, fields: GameFields) -> anyhow::Result<bool>;

    /// Returns false when nothing was deleted.
    async fn delete_by_id(&self, id: &GameId) -> anyhow::Result<bool>;

    async fn count(&self) -> anyhow::Result<u64>;
}
