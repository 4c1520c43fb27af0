//! HTTP routes for clause endpoints.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{
    add_custom, browse, clear_selected, create_version, delete_custom, deselect, get_categories,
    get_selected, get_versions, search, select,
};

/// Creates the clause router with all endpoints.
pub fn clause_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(browse))
        .route("/categories", get(get_categories))
        .route("/search", post(search))
        .route("/custom", post(add_custom).delete(delete_custom))
        .route("/versions", post(create_version).get(get_versions))
        .route(
            "/selected",
            get(get_selected).post(select).delete(clear_selected),
        )
        .route("/selected/:index", delete(deselect))
}
