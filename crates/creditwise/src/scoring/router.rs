use std::io::Cursor;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use super::artifacts::EncodedField;
use super::batch::{parse_applications, score_batch};
use super::domain::{LoanApplication, LoanDecision};
use super::pipeline::ScoringError;
use super::service::LoanScoringService;

/// Router builder exposing the scoring endpoints.
pub fn loan_router(service: Arc<LoanScoringService>) -> Router {
    Router::new()
        .route("/api/v1/loans/evaluate", post(evaluate_handler))
        .route("/api/v1/loans/batch", post(batch_handler))
        .route("/api/v1/loans/schema", get(schema_handler))
        .with_state(service)
}

#[derive(Debug, Serialize)]
pub(crate) struct EvaluationResponse {
    pub(crate) decision: LoanDecision,
    pub(crate) approved: bool,
    pub(crate) probability: f64,
    pub(crate) advisory: &'static str,
    pub(crate) scored_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BatchRequest {
    pub(crate) csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SchemaResponse {
    pub(crate) education_levels: Vec<String>,
    pub(crate) categorical: Vec<EncodedField>,
    pub(crate) feature_columns: Vec<String>,
}

pub(crate) async fn evaluate_handler(
    State(service): State<Arc<LoanScoringService>>,
    Json(application): Json<LoanApplication>,
) -> Response {
    match service.evaluate(&application) {
        Ok(evaluation) => {
            let body = EvaluationResponse {
                decision: evaluation.decision,
                approved: evaluation.approved(),
                probability: evaluation.probability,
                advisory: evaluation.decision.advisory(),
                scored_at: Utc::now(),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(error) => scoring_error_response(error),
    }
}

pub(crate) async fn batch_handler(
    State(service): State<Arc<LoanScoringService>>,
    Json(request): Json<BatchRequest>,
) -> Response {
    let reader = Cursor::new(request.csv.into_bytes());
    let applications = match parse_applications(reader) {
        Ok(applications) => applications,
        Err(error) => {
            let payload = json!({ "error": format!("csv parse failed: {error}") });
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
        }
    };

    let outcome = score_batch(&service, &applications);
    (StatusCode::OK, Json(outcome)).into_response()
}

/// Fitted vocabularies and the frozen column order, so a caller UI can
/// populate its widgets from the same bundle the pipeline scores with.
pub(crate) async fn schema_handler(
    State(service): State<Arc<LoanScoringService>>,
) -> Json<SchemaResponse> {
    let artifacts = service.artifacts();
    Json(SchemaResponse {
        education_levels: artifacts.label_encoder().classes().to_vec(),
        categorical: artifacts.one_hot().fields().to_vec(),
        feature_columns: artifacts.feature_columns().to_vec(),
    })
}

fn scoring_error_response(error: ScoringError) -> Response {
    match &error {
        ScoringError::UnknownCategory { .. } | ScoringError::NonNumericField { .. } => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        ScoringError::SchemaMismatch(detail) => {
            error!(%detail, "feature row diverged from the fitted schema");
            let payload = json!({ "error": "internal schema mismatch" });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
