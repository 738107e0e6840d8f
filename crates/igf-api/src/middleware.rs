//! igf-catalog/crates/igf-api/src/middleware.rs Middleware
//!
//! Request tracing and response hardening shared by every route.

use axum::http::{header, HeaderValue};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

/// Emits a `tracing` span per request with method, path and response status.
pub fn standard_middleware() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}

/// Stops browsers from MIME-sniffing user-supplied links and screenshots.
pub fn security_headers() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    )
}
