//! Request handlers: thin decode/call/encode shims over the service facade.

use crate::error::ApiError;
use crate::server::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bookstack_core::{Book, BookDraft};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Health check endpoint.
pub async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// GET /welcome
pub async fn welcome() -> &'static str {
    "Welcome to the Library API"
}

/// GET /count
pub async fn count(State(state): State<Arc<AppState>>) -> Json<usize> {
    Json(state.service.count())
}

/// GET /price - fixed sample price, no catalog access.
pub async fn sample_price() -> Json<f64> {
    Json(45.50)
}

/// GET /books
pub async fn list_titles(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.service.list_titles())
}

/// GET /books/:id
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<Book>, ApiError> {
    let book = state.service.get_book(id)?;
    Ok(Json(book))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub title: String,
}

/// GET /search?title=...
pub async fn search_by_title(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> String {
    debug!("Search request: {}", query.title);
    state.service.search_by_title(&query.title)
}

/// GET /author/:name
pub async fn author_info(Path(name): Path<String>) -> String {
    format!("Author highlight: {}", name)
}

/// POST /addbook
pub async fn add_book(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<BookDraft>,
) -> impl IntoResponse {
    let stored = state.service.add_book(draft);
    (StatusCode::CREATED, Json(stored))
}

/// GET /viewbooks
pub async fn view_books(State(state): State<Arc<AppState>>) -> Json<Vec<Book>> {
    Json(state.service.view_books())
}
