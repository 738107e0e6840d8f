//! # Selection Picker
//!
//! Picks one record uniformly at random. The draw indexes into a snapshot of
//! identifiers rather than into a live iteration of the collection, so inserts
//! and deletes landing between the count and the fetch cannot shift which
//! record an index refers to.

use tracing::{debug, instrument};

use crate::catalog::Catalog;
use crate::error::{AppError, Result};
use crate::models::{Game, GameId};

pub struct SelectionPicker {
    catalog: Catalog,
}

impl SelectionPicker {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Returns a uniformly chosen record, or `EmptyCatalog` when there is none.
    ///
    /// If the chosen record is deleted between the snapshot and the fetch the
    /// resulting `NotFound` is returned as is.
    #[instrument(name = "picker::pick_random", level = "trace", skip(self))]
    pub async fn pick_random(&self) -> Result<Game> {
        let ids = self.catalog.store().find_ids().await?;
        let id = pick_index(&ids, |len| rand::random_range(0..len))?;
        debug!(%id, candidates = ids.len(), "picked random game");
        self.catalog.get_by_id(id).await
    }
}

/// Resolves a draw over `[0, ids.len())` to an id.
///
/// `draw` is only called with a non-zero length.
pub fn pick_index(ids: &[GameId], draw: impl FnOnce(usize) -> usize) -> Result<&GameId> {
    if ids.is_empty() {
        return Err(AppError::EmptyCatalog);
    }
    let k = draw(ids.len());
    ids.get(k).ok_or(AppError::EmptyCatalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GameFields;
    use crate::traits::MockDocumentStore;
    use std::sync::Arc;

    #[test]
    fn test_pick_index_empty_never_draws() {
        let result = pick_index(&[], |_| panic!("draw on an empty catalog"));
        assert!(matches!(result, Err(AppError::EmptyCatalog)));
    }

    #[test]
    fn test_pick_index_uses_drawn_position() {
        let ids: Vec<GameId> = ["a", "b", "c"].into_iter().map(GameId::from).collect();
        let picked = pick_index(&ids, |len| {
            assert_eq!(len, 3);
            2
        })
        .unwrap();
        assert_eq!(picked.as_str(), "c");
    }

    #[tokio::test]
    async fn test_pick_random_empty_catalog() {
        let mut store = MockDocumentStore::new();
        store.expect_find_ids().returning(|| Ok(vec![]));
        store.expect_find_by_id().never();
        let picker = SelectionPicker::new(Catalog::new(Arc::new(store)));

        assert!(matches!(
            picker.pick_random().await,
            Err(AppError::EmptyCatalog)
        ));
    }

    #[tokio::test]
    async fn test_pick_random_resolves_through_id_lookup() {
        let mut store = MockDocumentStore::new();
        store
            .expect_find_ids()
            .returning(|| Ok(vec![GameId::from("only")]));
        store.expect_find_by_id().times(1).returning(|id| {
            Ok(Some(Game {
                id: id.clone(),
                fields: GameFields {
                    title: Some("Spelunky".into()),
                    ..GameFields::default()
                },
            }))
        });
        let picker = SelectionPicker::new(Catalog::new(Arc::new(store)));

        let game = picker.pick_random().await.unwrap();
        assert_eq!(game.id.as_str(), "only");
        assert_eq!(game.fields.title.as_deref(), Some("Spelunky"));
    }

    #[tokio::test]
    async fn test_pick_random_record_deleted_after_snapshot() {
        let mut store = MockDocumentStore::new();
        store
            .expect_find_ids()
            .returning(|| Ok(vec![GameId::from("stale")]));
        store.expect_find_by_id().returning(|_| Ok(None));
        let picker = SelectionPicker::new(Catalog::new(Arc::new(store)));

        assert!(matches!(
            picker.pick_random().await,
            Err(AppError::NotFound(_))
        ));
    }
}
