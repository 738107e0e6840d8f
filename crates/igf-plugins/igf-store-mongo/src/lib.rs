//! # igf-store-mongo Implementation
//!
//! This module implements the mapping between a MongoDB collection and the
//! `igf-core` domain models. Documents carry a store-assigned `_id: ObjectId`
//! next to the camelCase game fields; absent fields are simply not written.

use async_trait::async_trait;
use futures::TryStreamExt;
use igf_core::models::{Game, GameFields, GameId};
use igf_core::traits::DocumentStore;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// On-disk shape of a game record.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GameDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    #[serde(flatten)]
    fields: GameFields,
}

impl GameDocument {
    fn new(fields: GameFields) -> Self {
        Self { id: None, fields }
    }

    fn into_game(self) -> Option<Game> {
        let id = self.id?;
        Some(Game {
            id: GameId::new(id.to_hex()),
            fields: self.fields,
        })
    }
}

// Anything that is not a 24-digit hex ObjectId cannot name a document.
fn parse_id(id: &GameId) -> Option<ObjectId> {
    ObjectId::parse_str(id.as_str()).ok()
}

pub struct MongoGameStore {
    collection: Collection<GameDocument>,
}

impl MongoGameStore {
    /// Connects to `uri` and binds to a single collection of a single database.
    ///
    /// A `ping` is issued up front so a bad connection string fails at startup
    /// instead of on the first request.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> anyhow::Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database);
        db.run_command(doc! { "ping": 1 }).await?;
        info!(database, collection, "connected to MongoDB");

        Ok(Self {
            collection: db.collection(collection),
        })
    }

    async fn find_where(&self, filter: Document) -> anyhow::Result<Vec<Game>> {
        let docs: Vec<GameDocument> = self.collection.find(filter).await?.try_collect().await?;
        Ok(docs.into_iter().filter_map(GameDocument::into_game).collect())
    }
}

#[async_trait]
impl DocumentStore for MongoGameStore {
    async fn find_all(&self) -> anyhow::Result<Vec<Game>> {
        self.find_where(doc! {}).await
    }

    async fn find_by_field(&self, field: &str, value: &str) -> anyhow::Result<Vec<Game>> {
        let mut filter = Document::new();
        filter.insert(field, value);
        self.find_where(filter).await
    }

    async fn find_ids(&self) -> anyhow::Result<Vec<GameId>> {
        let docs: Vec<Document> = self
            .collection
            .clone_with_type::<Document>()
            .find(doc! {})
            .projection(doc! { "_id": 1 })
            .await?
            .try_collect()
            .await?;

        Ok(docs
            .iter()
            .filter_map(|d| d.get_object_id("_id").ok())
            .map(|oid| GameId::new(oid.to_hex()))
            .collect())
    }

    async fn find_by_id(&self, id: &GameId) -> anyhow::Result<Option<Game>> {
        let Some(oid) = parse_id(id) else {
            return Ok(None);
        };
        let doc = self.collection.find_one(doc! { "_id": oid }).await?;
        Ok(doc.and_then(GameDocument::into_game))
    }

    async fn insert_one(&self, fields: GameFields) -> anyhow::Result<GameId> {
        let result = self.collection.insert_one(GameDocument::new(fields)).await?;
        let oid = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| anyhow::anyhow!("MongoDB assigned a non-ObjectId _id: {}", result.inserted_id))?;
        debug!(id = %oid, "inserted game document");
        Ok(GameId::new(oid.to_hex()))
    }

    async fn replace_by_id(&self, id: &GameId, fields: GameFields) -> anyhow::Result<bool> {
        let Some(oid) = parse_id(id) else {
            return Ok(false);
        };
        let result = self
            .collection
            .replace_one(doc! { "_id": oid }, GameDocument::new(fields))
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete_by_id(&self, id: &GameId) -> anyhow::Result<bool> {
        let Some(oid) = parse_id(id) else {
            return Ok(false);
        };
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn count(&self) -> anyhow::Result<u64> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_parse_id_rejects_non_object_ids() {
        assert!(parse_id(&GameId::from("65a1f0c2e4b0a1b2c3d4e5f6")).is_some());
        assert!(parse_id(&GameId::from("")).is_none());
        assert!(parse_id(&GameId::from("65a1f0c2")).is_none());
        assert!(parse_id(&GameId::from("zz a1f0c2e4b0a1b2c3d4e5f6")).is_none());
    }

    #[test]
    fn test_new_document_has_no_id_and_omits_absent_fields() {
        let fields = GameFields {
            title: Some("Foo".into()),
            short_description: Some("tiny".into()),
            ..GameFields::default()
        };
        let document = bson::to_document(&GameDocument::new(fields)).unwrap();

        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("title").unwrap(), "Foo");
        assert_eq!(document.get_str("shortDescription").unwrap(), "tiny");
        assert!(!document.contains_key("genre"));
    }

    #[test]
    fn test_stored_document_maps_to_game() {
        let oid = ObjectId::new();
        let stored = doc! {
            "_id": oid,
            "title": "Foo",
            "genre": "action",
            "screenshot2": "https://img.example/2.png",
        };
        let game = bson::from_document::<GameDocument>(stored)
            .unwrap()
            .into_game()
            .unwrap();

        assert_eq!(game.id.as_str(), oid.to_hex());
        assert_eq!(game.fields.genre.as_deref(), Some("action"));
        assert_eq!(game.fields.screenshot2.as_deref(), Some("https://img.example/2.png"));
        assert!(game.fields.developer.is_none());
    }
}
