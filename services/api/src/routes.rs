use crate::infra::{AppState, AssessmentReport};
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Extension;
use axum::Json;
use psyrisk::assessment::{assessment_router, AssessmentService, EvaluateRequest, ValidationMode};
use psyrisk::error::AppError;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_assessment_routes(service: Arc<AssessmentService>) -> axum::Router {
    assessment_router(service.clone())
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/assessments/:kind/report", post(report_endpoint))
        .layer(Extension(service))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Same scoring as the evaluate route, stamped with the catalog title and evaluation time.
pub(crate) async fn report_endpoint(
    Extension(service): Extension<Arc<AssessmentService>>,
    Path(kind): Path<String>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<AssessmentReport>, AppError> {
    let mode = if request.strict {
        ValidationMode::Strict
    } else {
        ValidationMode::Lenient
    };

    let kind = service.resolve(&kind)?;
    let title = service.engine(kind)?.catalog().title().to_string();
    let result = service.evaluate(kind, &request.responses, mode)?;

    Ok(Json(AssessmentReport::new(&title, result)))
}
