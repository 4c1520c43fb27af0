//! HTTP handlers for clause endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::domain::clause::Clause;
use crate::domain::foundation::ClauseKey;

use super::dto::{
    BrowseQuery, BrowseResponse, ClauseKeyQuery, CreateVersionRequest, CustomClauseRequest,
    SearchRequest, SearchResponse, SelectClauseRequest, SelectedClausesResponse,
};

/// GET /api/clauses/categories
pub async fn get_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    let workspace = state.workspace.read().await;
    Json(
        workspace
            .clause_library()
            .categories()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

/// GET /api/clauses?category=...
pub async fn browse(
    State(state): State<AppState>,
    Query(query): Query<BrowseQuery>,
) -> Json<BrowseResponse> {
    let workspace = state.workspace.read().await;
    Json(BrowseResponse::from_category(
        workspace.clause_library().get_by_category(&query.category),
    ))
}

/// POST /api/clauses/search
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Json<SearchResponse> {
    let workspace = state.workspace.read().await;
    let results = workspace
        .clause_library()
        .search(&request.query, &request.filters);
    debug!(query = %request.query, hits = results.len(), "clause search");

    Json(SearchResponse {
        total: results.len(),
        results,
    })
}

/// POST /api/clauses/custom
pub async fn add_custom(
    State(state): State<AppState>,
    Json(request): Json<CustomClauseRequest>,
) -> Result<(StatusCode, Json<Clause>), ApiError> {
    let mut workspace = state.workspace.write().await;
    let clause = workspace.clause_library_mut().add_custom(request.into())?;
    Ok((StatusCode::CREATED, Json(clause)))
}

/// DELETE /api/clauses/custom?name=...&category=...
pub async fn delete_custom(
    State(state): State<AppState>,
    Query(query): Query<ClauseKeyQuery>,
) -> StatusCode {
    let mut workspace = state.workspace.write().await;
    workspace
        .clause_library_mut()
        .delete_custom(&query.name, &query.category);
    StatusCode::NO_CONTENT
}

/// POST /api/clauses/versions
pub async fn create_version(
    State(state): State<AppState>,
    Json(request): Json<CreateVersionRequest>,
) -> Result<(StatusCode, Json<Clause>), ApiError> {
    let mut workspace = state.workspace.write().await;
    let clause = workspace.clause_library_mut().create_version(
        &ClauseKey::new(request.name, request.category),
        request.content,
        request.modification_notes,
    )?;
    Ok((StatusCode::CREATED, Json(clause)))
}

/// GET /api/clauses/versions?name=...&category=...
pub async fn get_versions(
    State(state): State<AppState>,
    Query(query): Query<ClauseKeyQuery>,
) -> Json<Vec<Clause>> {
    let workspace = state.workspace.read().await;
    Json(
        workspace
            .clause_library()
            .version_chain(&ClauseKey::new(query.name, query.category))
            .to_vec(),
    )
}

/// GET /api/clauses/selected
pub async fn get_selected(State(state): State<AppState>) -> Json<SelectedClausesResponse> {
    let workspace = state.workspace.read().await;
    Json(SelectedClausesResponse {
        selected: workspace.selected_clauses().to_vec(),
    })
}

/// POST /api/clauses/selected
pub async fn select(
    State(state): State<AppState>,
    Json(request): Json<SelectClauseRequest>,
) -> Json<SelectedClausesResponse> {
    let mut workspace = state.workspace.write().await;
    workspace.add_selected_clause(request.into());
    Json(SelectedClausesResponse {
        selected: workspace.selected_clauses().to_vec(),
    })
}

/// DELETE /api/clauses/selected/:index
pub async fn deselect(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Json<SelectedClausesResponse> {
    let mut workspace = state.workspace.write().await;
    workspace.remove_selected_clause(index);
    Json(SelectedClausesResponse {
        selected: workspace.selected_clauses().to_vec(),
    })
}

/// DELETE /api/clauses/selected
pub async fn clear_selected(State(state): State<AppState>) -> StatusCode {
    let mut workspace = state.workspace.write().await;
    workspace.clear_selected_clauses();
    StatusCode::NO_CONTENT
}
