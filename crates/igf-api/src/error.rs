//! Conversion of catalog failures into user-facing error pages.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use igf_core::AppError;
use igf_ui::ErrorTemplate;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::App(AppError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "That game could not be found.")
            }
            ApiError::App(AppError::EmptyCatalog) => (
                StatusCode::NOT_FOUND,
                "There are no games in the catalog yet, so there is nothing to pick from.",
            ),
            ApiError::App(AppError::Store(_)) | ApiError::Template(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong while handling your request.",
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            error!("{self}");
        }

        let page = ErrorTemplate {
            title: status.canonical_reason().unwrap_or("Error"),
            status: status.as_u16(),
            message,
        }
        .render();

        match page {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                error!("failed to render error page: {e}");
                (status, message).into_response()
            }
        }
    }
}
