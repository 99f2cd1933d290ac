use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{ClientProfile, LeadId, LeadStatus};
use super::repository::{LeadRepository, RepositoryError, SuggestionSink};
use super::service::{LeadScoringService, LeadServiceError};
use super::tools::{LeadToolbox, ToolRequest};

/// Router builder exposing HTTP endpoints for lead intake, scoring, and tools.
pub fn lead_router<R, S>(
    service: Arc<LeadScoringService<R, S>>,
    toolbox: Arc<LeadToolbox>,
) -> Router
where
    R: LeadRepository + 'static,
    S: SuggestionSink + 'static,
{
    let tool_routes = Router::new()
        .route("/api/v1/kyc/tools", post(tool_handler))
        .with_state(toolbox);

    Router::new()
        .route("/api/v1/kyc/leads", post(submit_handler::<R, S>))
        .route("/api/v1/kyc/leads/:lead_id", get(status_handler::<R, S>))
        .route(
            "/api/v1/kyc/leads/:lead_id/score",
            post(score_handler::<R, S>),
        )
        .with_state(service)
        .merge(tool_routes)
}

pub(crate) async fn submit_handler<R, S>(
    State(service): State<Arc<LeadScoringService<R, S>>>,
    axum::Json(profile): axum::Json<ClientProfile>,
) -> Response
where
    R: LeadRepository + 'static,
    S: SuggestionSink + 'static,
{
    match service.submit(profile) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(LeadServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({ "error": "lead already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn status_handler<R, S>(
    State(service): State<Arc<LeadScoringService<R, S>>>,
    Path(lead_id): Path<String>,
) -> Response
where
    R: LeadRepository + 'static,
    S: SuggestionSink + 'static,
{
    let id = LeadId(lead_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(LeadServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "lead_id": id.0,
                "status": LeadStatus::Received.label(),
                "total_score": serde_json::Value::Null,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn score_handler<R, S>(
    State(service): State<Arc<LeadScoringService<R, S>>>,
    Path(lead_id): Path<String>,
) -> Response
where
    R: LeadRepository + 'static,
    S: SuggestionSink + 'static,
{
    let id = LeadId(lead_id);
    match service.score(&id) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(LeadServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({ "error": format!("lead '{}' not found", id.0) });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn tool_handler(
    State(toolbox): State<Arc<LeadToolbox>>,
    axum::Json(request): axum::Json<ToolRequest>,
) -> Response {
    let outcome = toolbox.dispatch(request);
    (StatusCode::OK, axum::Json(outcome)).into_response()
}
