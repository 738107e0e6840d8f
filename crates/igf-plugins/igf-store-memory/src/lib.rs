//! # igf-store-memory
//!
//! Process-local implementation of `DocumentStore`.
//! Records live in a concurrent map keyed by UUID and vanish on restart, which
//! makes this backend suitable for development and tests only.

use async_trait::async_trait;
use dashmap::DashMap;
use igf_core::models::{Game, GameFields, GameId};
use igf_core::traits::DocumentStore;
use tracing::debug;
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryGameStore {
    documents: DashMap<Uuid, GameFields>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }
}

// Ids that are not UUIDs cannot name a document in this store.
fn parse_id(id: &GameId) -> Option<Uuid> {
    Uuid::parse_str(id.as_str()).ok()
}

fn to_game(id: &Uuid, fields: &GameFields) -> Game {
    Game {
        id: GameId::new(id.to_string()),
        fields: fields.clone(),
    }
}

/// Reads a named field the same way the MongoDB documents spell it.
fn field_value<'a>(fields: &'a GameFields, field: &str) -> Option<&'a str> {
    match field {
        "title" => fields.title.as_deref(),
        "genre" => fields.genre.as_deref(),
        "developer" => fields.developer.as_deref(),
        "link" => fields.link.as_deref(),
        "shortDescription" => fields.short_description.as_deref(),
        "description" => fields.description.as_deref(),
        "screenshot1" => fields.screenshot1.as_deref(),
        "screenshot2" => fields.screenshot2.as_deref(),
        "screenshot3" => fields.screenshot3.as_deref(),
        _ => None,
    }
}

#[async_trait]
impl DocumentStore for MemoryGameStore {
    async fn find_all(&self) -> anyhow::Result<Vec<Game>> {
        Ok(self
            .documents
            .iter()
            .map(|entry| to_game(entry.key(), entry.value()))
            .collect())
    }

    async fn find_by_field(&self, field: &str, value: &str) -> anyhow::Result<Vec<Game>> {
        Ok(self
            .documents
            .iter()
            .filter(|entry| field_value(entry.value(), field) == Some(value))
            .map(|entry| to_game(entry.key(), entry.value()))
            .collect())
    }

    async fn find_ids(&self) -> anyhow::Result<Vec<GameId>> {
        Ok(self
            .documents
            .iter()
            .map(|entry| GameId::new(entry.key().to_string()))
            .collect())
    }

    async fn find_by_id(&self, id: &GameId) -> anyhow::Result<Option<Game>> {
        let Some(key) = parse_id(id) else {
            return Ok(None);
        };
        Ok(self
            .documents
            .get(&key)
            .map(|entry| to_game(entry.key(), entry.value())))
    }

    async fn insert_one(&self, fields: GameFields) -> anyhow::Result<GameId> {
        let key = Uuid::new_v4();
        self.documents.insert(key, fields);
        debug!(%key, "memory store: inserted document");
        Ok(GameId::new(key.to_string()))
    }

    async fn replace_by_id(&self, id: &GameId, fields: GameFields) -> anyhow::Result<bool> {
        let Some(key) = parse_id(id) else {
            return Ok(false);
        };
        match self.documents.get_mut(&key) {
            Some(mut entry) => {
                *entry = fields;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: &GameId) -> anyhow::Result<bool> {
        let Some(key) = parse_id(id) else {
            return Ok(false);
        };
        Ok(self.documents.remove(&key).is_some())
    }

    async fn count(&self) -> anyhow::Result<u64> {
        Ok(self.documents.len() as u64)
    }
}
