//! # igf-api Handlers
//!
//! This module coordinates the flow between HTTP requests, the `Catalog`
//! and the askama templates. Handlers hold no business logic of their own.

use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    Form,
};
use igf_core::{AppError, Catalog, DocumentStore, GameFields, GameId, SelectionPicker};
use igf_ui::{
    CategoryTemplate, DedicatedTemplate, EditTemplate, GameView, GamesTemplate, ShareTemplate,
};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::error::ApiError;

/// State shared across all request handlers.
pub struct AppState {
    pub catalog: Catalog,
    pub picker: SelectionPicker,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        let catalog = Catalog::new(store);
        Self {
            picker: SelectionPicker::new(catalog.clone()),
            catalog,
        }
    }
}

/// The `?gameId=` parameter carried by detail, edit and delete links.
#[derive(Debug, Deserialize)]
pub struct GameIdQuery {
    #[serde(rename = "gameId")]
    pub game_id: Option<String>,
}

impl GameIdQuery {
    /// A missing parameter names no game at all.
    fn id(self) -> Result<GameId, AppError> {
        self.game_id
            .map(GameId::from)
            .ok_or_else(|| AppError::NotFound(String::new()))
    }
}

type Page = Result<Html<String>, ApiError>;

fn render(template: impl Template) -> Page {
    Ok(Html(template.render()?))
}

/// Renders the home page with every game in the catalog.
#[instrument(level = "trace", skip(state))]
pub async fn get_games(State(state): State<Arc<AppState>>) -> Page {
    let games = state.catalog.list_all().await?;
    render(GamesTemplate {
        title: "All games",
        games: GameView::list(&games),
    })
}

/// Blank submission form.
pub async fn share_game() -> Page {
    render(ShareTemplate {
        title: "Share a game",
    })
}

/// Stores the submitted form as a new game, then goes back to the listing.
#[instrument(level = "trace", skip(state, fields))]
pub async fn add_game(
    State(state): State<Arc<AppState>>,
    Form(fields): Form<GameFields>,
) -> Result<Redirect, ApiError> {
    let id = state.catalog.insert(fields).await?;
    info!(%id, "game shared");
    Ok(Redirect::to("/get_games"))
}

/// Shortcut pages such as `/puzzle`.
pub async fn category_page(State(state): State<Arc<AppState>>, category: &str) -> Page {
    let games = state.catalog.list_by_category(category).await?;
    render(CategoryTemplate {
        title: category,
        category,
        games: GameView::list(&games),
    })
}

/// `/category/{name}` for genres without a shortcut page.
pub async fn category(state: State<Arc<AppState>>, Path(name): Path<String>) -> Page {
    category_page(state, &name).await
}

/// The dedicated page of a single game.
#[instrument(level = "trace", skip(state))]
pub async fn dedicated(State(state): State<Arc<AppState>>, Query(query): Query<GameIdQuery>) -> Page {
    let game = state.catalog.get_by_id(&query.id()?).await?;
    let view = GameView::new(&game);
    render(DedicatedTemplate {
        title: view.title,
        game: view,
    })
}

/// Edit form prefilled with the game's current fields.
#[instrument(level = "trace", skip(state))]
pub async fn edit(State(state): State<Arc<AppState>>, Query(query): Query<GameIdQuery>) -> Page {
    let game = state.catalog.get_by_id(&query.id()?).await?;
    render(EditTemplate {
        title: "Edit game",
        game: GameView::new(&game),
    })
}

/// Overwrites every field of the game with the submitted form.
#[instrument(level = "trace", skip(state, fields))]
pub async fn update_game(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GameIdQuery>,
    Form(fields): Form<GameFields>,
) -> Result<Redirect, ApiError> {
    let id = query.id()?;
    state.catalog.update_by_id(&id, fields).await?;
    info!(%id, "game updated");
    Ok(Redirect::to("/get_games"))
}

/// Deletes the game. A game that is already gone counts as deleted.
#[instrument(level = "trace", skip(state))]
pub async fn delete_game(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GameIdQuery>,
) -> Result<Redirect, ApiError> {
    let result = match query.id() {
        Ok(id) => state.catalog.delete_by_id(&id).await.map(|()| id),
        Err(e) => Err(e),
    };
    match result {
        Ok(id) => info!(%id, "game deleted"),
        Err(AppError::NotFound(id)) => info!(%id, "delete of a missing game ignored"),
        Err(e) => return Err(e.into()),
    }
    Ok(Redirect::to("/get_games"))
}

/// The dedicated page of a randomly chosen game.
#[instrument(level = "trace", skip(state))]
pub async fn random_game(State(state): State<Arc<AppState>>) -> Page {
    let game = state.picker.pick_random().await?;
    let view = GameView::new(&game);
    render(DedicatedTemplate {
        title: view.title,
        game: view,
    })
}
