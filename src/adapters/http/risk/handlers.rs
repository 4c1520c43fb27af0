//! HTTP handlers for risk endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{AssessRiskCommand, AssessRiskHandler};
use crate::domain::risk::{MitigationStrategy, RiskFactor};

use super::dto::{
    AddFactorRequest, AddMitigationRequest, AssessRequest, AssessResponse, CategoriesResponse,
    MitigationCatalogResponse, UpdateWeightRequest,
};

/// GET /api/risk/categories
pub async fn get_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    let workspace = state.workspace.read().await;
    Json(CategoriesResponse {
        categories: workspace.risk_engine().categories().to_vec(),
    })
}

/// POST /api/risk/assess
pub async fn assess(
    State(state): State<AppState>,
    Json(request): Json<AssessRequest>,
) -> Json<AssessResponse> {
    let max_recommendations = request.max_recommendations;
    let selections = request.into_selections();
    debug!(categories = selections.len(), "assessing risk");

    let mut workspace = state.workspace.write().await;
    let result = AssessRiskHandler::handle(
        &mut workspace,
        AssessRiskCommand {
            selections,
            max_recommendations,
        },
    );

    Json(AssessResponse {
        assessment: result.assessment,
        mitigations: result.mitigations,
    })
}

/// PUT /api/risk/categories/:name/weight
pub async fn update_weight(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<UpdateWeightRequest>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let mut workspace = state.workspace.write().await;
    workspace
        .risk_engine_mut()
        .update_category_weight(&name, request.weight)?;

    Ok(Json(CategoriesResponse {
        categories: workspace.risk_engine().categories().to_vec(),
    }))
}

/// POST /api/risk/categories/:name/factors
pub async fn add_factor(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<AddFactorRequest>,
) -> StatusCode {
    let mut workspace = state.workspace.write().await;
    workspace.risk_engine_mut().add_factor(
        &name,
        RiskFactor::new(request.name, request.weight, request.description),
    );
    StatusCode::NO_CONTENT
}

/// DELETE /api/risk/categories/:name/factors/:factor
pub async fn remove_factor(
    State(state): State<AppState>,
    Path((name, factor)): Path<(String, String)>,
) -> StatusCode {
    let mut workspace = state.workspace.write().await;
    workspace.risk_engine_mut().remove_factor(&name, &factor);
    StatusCode::NO_CONTENT
}

/// GET /api/risk/mitigations
pub async fn get_mitigations(State(state): State<AppState>) -> Json<MitigationCatalogResponse> {
    let workspace = state.workspace.read().await;
    Json(MitigationCatalogResponse {
        catalog: workspace.mitigation_catalog(),
    })
}

/// POST /api/risk/mitigations
pub async fn add_mitigation(
    State(state): State<AppState>,
    Json(request): Json<AddMitigationRequest>,
) -> StatusCode {
    let mut workspace = state.workspace.write().await;
    workspace.add_custom_mitigation(MitigationStrategy::new(
        request.name,
        request.description,
        request.implementation,
        request.effectiveness,
        request.cost_impact,
    ));
    StatusCode::NO_CONTENT
}
