//! Page routes

use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Book list
        .route("/", get(handlers::list_first_page))
        .route("/books", get(handlers::list_first_page))
        .route("/books/:page", get(handlers::list_page))
        // Book detail
        .route("/book/:id", get(handlers::book_page))
        .route("/health", get(handlers::health_check))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
