//! # igf-api
//!
//! The web routing and orchestration layer for the game catalog.

pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use igf_core::KNOWN_CATEGORIES;

pub use error::ApiError;
pub use handlers::AppState;

/// Builds the full application router over `state`.
///
/// Every known category gets its own shortcut page (`/action`, `/puzzle`, ...);
/// any other genre is reachable through `/category/{name}`.
pub fn router(state: Arc<AppState>) -> Router {
    let mut routes = Router::new()
        .route("/", get(handlers::get_games))
        .route("/get_games", get(handlers::get_games))
        .route("/share_game", get(handlers::share_game))
        .route("/add_game", post(handlers::add_game))
        .route("/category/{name}", get(handlers::category))
        .route("/dedicated", get(handlers::dedicated))
        .route("/edit", get(handlers::edit))
        .route("/update_game", post(handlers::update_game))
        .route("/delete_game", get(handlers::delete_game))
        .route("/random_game", get(handlers::random_game));

    for category in KNOWN_CATEGORIES {
        routes = routes.route(
            &format!("/{category}"),
            get(move |state: State<Arc<AppState>>| handlers::category_page(state, category)),
        );
    }

    routes
        .layer(middleware::security_headers())
        .layer(middleware::standard_middleware())
        .with_state(state)
}
