use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, create_book, delete_book, get_book, list_books, update_book};

/// Creates the API router with all book record endpoints
///
/// - GET /book - List all books
/// - GET /book/:id - Get a book by id
/// - POST /book - Create a book
/// - PUT /book - Overwrite an existing book
/// - DELETE /book/:id - Delete a book
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/book", get(list_books).post(create_book).put(update_book))
        .route("/book/:id", get(get_book).delete(delete_book))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
