use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::ResponseSet;
use super::service::{AssessmentService, AssessmentServiceError, ValidationMode};

/// Body accepted by the evaluation endpoint.
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub responses: ResponseSet,
    #[serde(default)]
    pub strict: bool,
}

/// Router builder exposing the catalogs and the evaluation endpoint.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/assessments", get(list_handler))
        .route("/api/v1/assessments/:kind/catalog", get(catalog_handler))
        .route("/api/v1/assessments/:kind/evaluate", post(evaluate_handler))
        .with_state(service)
}

pub(crate) async fn list_handler(State(service): State<Arc<AssessmentService>>) -> Response {
    (StatusCode::OK, axum::Json(service.summaries())).into_response()
}

pub(crate) async fn catalog_handler(
    State(service): State<Arc<AssessmentService>>,
    Path(kind): Path<String>,
) -> Response {
    match service
        .resolve(&kind)
        .and_then(|kind| service.catalog(kind))
    {
        Ok(catalog) => (StatusCode::OK, axum::Json(catalog)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn evaluate_handler(
    State(service): State<Arc<AssessmentService>>,
    Path(kind): Path<String>,
    axum::Json(request): axum::Json<EvaluateRequest>,
) -> Response {
    let mode = if request.strict {
        ValidationMode::Strict
    } else {
        ValidationMode::Lenient
    };

    match service
        .resolve(&kind)
        .and_then(|kind| service.evaluate(kind, &request.responses, mode))
    {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: AssessmentServiceError) -> Response {
    match error {
        AssessmentServiceError::UnknownAssessment(_) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        AssessmentServiceError::RejectedResponses(ref issues) => {
            let payload = json!({
                "error": error.to_string(),
                "issues": issues,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
