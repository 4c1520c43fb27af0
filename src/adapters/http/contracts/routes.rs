//! HTTP routes for contract endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{download_html, download_pdf, generate, list_versions};

/// Creates the contract router with all endpoints.
pub fn contract_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_versions))
        .route("/generate", post(generate))
        .route("/:id/:version/html", get(download_html))
        .route("/:id/:version/pdf", get(download_pdf))
}
