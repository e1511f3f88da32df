//! HTTP server implementation using Axum.

use crate::handlers;
use axum::routing::{get, post};
use axum::Router;
use bookstack_core::LibraryService;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers.
pub struct AppState {
    /// Catalog facade (reference catalog + runtime registry)
    pub service: LibraryService,
}

/// Start the REST server.
///
/// Returns the actual address the server is bound to (useful when port=0).
pub async fn start_server(
    service: LibraryService,
    host: &str,
    port: u16,
) -> anyhow::Result<SocketAddr> {
    let state = Arc::new(AppState { service });

    // Configure CORS for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = Router::new()
        .route("/health", get(handlers::handle_health))
        .route("/welcome", get(handlers::welcome))
        .route("/count", get(handlers::count))
        .route("/price", get(handlers::sample_price))
        .route("/books", get(handlers::list_titles))
        .route("/books/:id", get(handlers::get_book))
        .route("/search", get(handlers::search_by_title))
        .route("/author/:name", get(handlers::author_info))
        .route("/addbook", post(handlers::add_book))
        .route("/viewbooks", get(handlers::view_books))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Parse the address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    // Bind to the address
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    info!("Server listening on {}", actual_addr);

    // Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    Ok(actual_addr)
}
