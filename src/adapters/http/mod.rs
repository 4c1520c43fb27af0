//! HTTP surface: thin axum glue over the application handlers.

mod clauses;
mod contracts;
mod error;
mod risk;
mod state;

pub use clauses::clause_routes;
pub use contracts::contract_routes;
pub use error::ApiError;
pub use risk::risk_routes;
pub use state::AppState;

use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the full API router.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/risk", risk_routes())
        .nest("/api/clauses", clause_routes())
        .nest("/api/contracts", contract_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
