//! HTTP handlers for contract endpoints.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::info;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::GenerateContractCommand;
use crate::domain::foundation::ContractId;
use crate::ports::StoreError;

use super::dto::{GenerateRequest, GenerateResponse, VersionListResponse};

/// POST /api/contracts/generate
///
/// Runs the full pass: compute risk from the submitted selections, consume
/// the workspace's selected clauses, assemble, render, export, snapshot.
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<(StatusCode, Json<GenerateResponse>), ApiError> {
    let selections = request.selections();

    let (risk, clauses) = {
        let mut workspace = state.workspace.write().await;
        workspace.set_factor_selections(selections);
        let risk = workspace
            .risk_engine()
            .compute(workspace.factor_selections());
        // The selection is consumed by generation; the next contract
        // starts from an empty list.
        let clauses = workspace.take_selected_clauses();
        (risk, clauses)
    };

    let result = state
        .generate_contract
        .handle(GenerateContractCommand {
            vessel: request.vessel,
            terms: request.terms,
            parties: request.parties,
            financial: request.financial,
            metadata: request.metadata,
            risk,
            clauses,
        })
        .await?;

    info!(contract_id = %result.document.contract_id, "contract ready for download");
    Ok((StatusCode::CREATED, Json(GenerateResponse::from(&result))))
}

/// GET /api/contracts
pub async fn list_versions(
    State(state): State<AppState>,
) -> Result<Json<VersionListResponse>, ApiError> {
    let versions = state.list_versions.handle().await?;
    Ok(Json(VersionListResponse { versions }))
}

/// GET /api/contracts/:id/:version/html
pub async fn download_html(
    State(state): State<AppState>,
    Path((id, version)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let snapshot = load_snapshot(&state, &id, &version).await?;
    Ok((
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        snapshot.html,
    )
        .into_response())
}

/// GET /api/contracts/:id/:version/pdf
///
/// Re-exports the stored snapshot. Export stays best effort here too:
/// an export failure serves the fallback PDF.
pub async fn download_pdf(
    State(state): State<AppState>,
    Path((id, version)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let snapshot = load_snapshot(&state, &id, &version).await?;

    let rendered = crate::ports::RenderedContract {
        html: snapshot.html.clone(),
        filename_stem: format!("contract_v{}_{}", version, id),
    };
    let pdf = state
        .exporter
        .export(&snapshot.document, &rendered)
        .unwrap_or_else(|_| state.exporter.fallback(&snapshot.document));

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}.pdf\"", rendered.filename_stem),
            ),
        ],
        pdf,
    )
        .into_response())
}

async fn load_snapshot(
    state: &AppState,
    id: &str,
    version: &str,
) -> Result<crate::ports::ContractSnapshot, ApiError> {
    state
        .store
        .load(&ContractId::from_token(id), version)
        .await
        .map_err(|e| match e {
            StoreError::NotFound { .. } => ApiError::not_found(e.to_string()),
            other => ApiError::from(crate::domain::foundation::DomainError::new(
                crate::domain::foundation::ErrorCode::StorageError,
                other.to_string(),
            )),
        })
}
