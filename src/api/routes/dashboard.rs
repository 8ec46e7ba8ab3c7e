//! Dashboard Routes
//!
//! Static page and its introspection endpoints.
//!
//! - GET / - Dashboard page
//! - GET /_layout - Page layout (controls and chart placeholders)
//! - GET /_dependencies - Binding table
//!
//! Any other path falls through to [`not_found`].

use axum::{extract::State, http::Uri, response::Html, Json};
use std::sync::Arc;

use crate::api::dto::{DependenciesResponse, DependencyDto};
use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::layout::{Layout, INDEX_HTML};

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /_layout
///
/// The layout is built once at startup; this only serializes it.
pub async fn layout(State(state): State<Arc<AppState>>) -> Json<Layout> {
    Json(state.layout.as_ref().clone())
}

/// GET /_dependencies
pub async fn dependencies(State(state): State<Arc<AppState>>) -> Json<DependenciesResponse> {
    Json(DependenciesResponse {
        dependencies: state
            .callbacks
            .bindings()
            .iter()
            .map(DependencyDto::from)
            .collect(),
    })
}

/// Fallback for unknown paths: JSON 404 in the same shape as other API errors
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
