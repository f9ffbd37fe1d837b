//! Request handlers

mod books;

pub use books::*;

use crate::render::{self, RenderResult};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use serde::Serialize;

/// Page handler result: status plus rendered HTML
pub type PageResponse = (StatusCode, Html<String>);

/// Send a rendered page with `status`, or a 500 when rendering failed
pub(crate) fn html_page(status: StatusCode, rendered: RenderResult<String>) -> PageResponse {
    match rendered {
        Ok(html) => (status, Html(html)),
        Err(e) => {
            tracing::error!("Failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Html(String::new()))
        }
    }
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Fallback for unknown routes
pub async fn not_found() -> PageResponse {
    html_page(StatusCode::NOT_FOUND, render::not_found_page())
}
