//! # Catalog
//!
//! Translates catalog operations into document-store calls. Owns no business
//! rules: the only thing it adds on top of the store is turning "nothing
//! matched" answers into `AppError::NotFound`.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::error::{AppError, Result};
use crate::models::{Game, GameFields, GameId};
use crate::traits::DocumentStore;

/// Name of the record field that holds its category.
pub const CATEGORY_FIELD: &str = "genre";

#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn DocumentStore>,
}

impl Catalog {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub(crate) fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }

    #[instrument(name = "catalog::list_all", level = "trace", skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Game>> {
        Ok(self.store.find_all().await?)
    }

    #[instrument(name = "catalog::list_by_category", level = "trace", skip(self))]
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Game>> {
        Ok(self.store.find_by_field(CATEGORY_FIELD, category).await?)
    }

    #[instrument(name = "catalog::get_by_id", level = "trace", skip(self))]
    pub async fn get_by_id(&self, id: &GameId) -> Result<Game> {
        match self.store.find_by_id(id).await? {
            Some(game) => Ok(game),
            None => Err(AppError::NotFound(id.to_string())),
        }
    }

    #[instrument(name = "catalog::insert", level = "trace", skip(self, fields))]
    pub async fn insert(&self, fields: GameFields) -> Result<GameId> {
        let id = self.store.insert_one(fields).await?;
        debug!(%id, "game inserted");
        Ok(id)
    }

    /// Full overwrite: fields missing from `fields` end up absent on the record.
    #[instrument(name = "catalog::update_by_id", level = "trace", skip(self, fields))]
    pub async fn update_by_id(&self, id: &GameId, fields: GameFields) -> Result<()> {
        if self.store.replace_by_id(id, fields).await? {
            debug!(%id, "game replaced");
            Ok(())
        } else {
            Err(AppError::NotFound(id.to_string()))
        }
    }

    /// Deleting an id twice reports `NotFound` the second time.
    #[instrument(name = "catalog::delete_by_id", level = "trace", skip(self))]
    pub async fn delete_by_id(&self, id: &GameId) -> Result<()> {
        if self.store.delete_by_id(id).await? {
            debug!(%id, "game deleted");
            Ok(())
        } else {
            Err(AppError::NotFound(id.to_string()))
        }
    }

    #[instrument(name = "catalog::count", level = "trace", skip(self))]
    pub async fn count(&self) -> Result<u64> {
        Ok(self.store.count().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockDocumentStore;
    use mockall::predicate::eq;

    fn game(id: &str, title: &str, genre: &str) -> Game {
        Game {
            id: GameId::from(id),
            fields: GameFields {
                title: Some(title.into()),
                genre: Some(genre.into()),
                ..GameFields::default()
            },
        }
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_not_found() {
        let mut store = MockDocumentStore::new();
        store.expect_find_by_id().returning(|_| Ok(None));
        let catalog = Catalog::new(Arc::new(store));

        let err = catalog.get_by_id(&GameId::from("nope")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(id) if id == "nope"));
    }

    #[tokio::test]
    async fn test_list_by_category_filters_on_genre() {
        let mut store = MockDocumentStore::new();
        store
            .expect_find_by_field()
            .with(eq("genre"), eq("puzzle"))
            .times(1)
            .returning(|_, _| Ok(vec![game("1", "Braid", "puzzle")]));
        let catalog = Catalog::new(Arc::new(store));

        let games = catalog.list_by_category("puzzle").await.unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].fields.title.as_deref(), Some("Braid"));
    }

    #[tokio::test]
    async fn test_unmatched_update_and_delete_are_not_found() {
        let mut store = MockDocumentStore::new();
        store.expect_replace_by_id().returning(|_, _| Ok(false));
        store.expect_delete_by_id().returning(|_| Ok(false));
        let catalog = Catalog::new(Arc::new(store));
        let id = GameId::from("gone");

        assert!(matches!(
            catalog.update_by_id(&id, GameFields::default()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            catalog.delete_by_id(&id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_store_failures_propagate() {
        let mut store = MockDocumentStore::new();
        store
            .expect_count()
            .returning(|| Err(anyhow::anyhow!("connection refused")));
        let catalog = Catalog::new(Arc::new(store));

        let err = catalog.count().await.unwrap_err();
        assert!(matches!(err, AppError::Store(_)));
        assert!(err.to_string().contains("connection refused"));
    }
}
