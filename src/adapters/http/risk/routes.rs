//! HTTP routes for risk endpoints.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{
    add_factor, add_mitigation, assess, get_categories, get_mitigations, remove_factor,
    update_weight,
};

/// Creates the risk router with all endpoints.
pub fn risk_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/assess", post(assess))
        .route("/categories/:name/weight", put(update_weight))
        .route("/categories/:name/factors", post(add_factor))
        .route("/categories/:name/factors/:factor", delete(remove_factor))
        .route("/mitigations", get(get_mitigations).post(add_mitigation))
}
