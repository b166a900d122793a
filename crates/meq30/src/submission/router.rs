use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ExperienceId, SubmitRequest};
use super::service::{SubmissionError, SubmissionService};
use super::store::{ExperienceStore, StoreError};
use crate::questionnaire::AnswerSet;
use crate::scoring::ValidationError;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LocaleQuery {
    #[serde(default)]
    pub(crate) locale: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) answers: AnswerSet,
    #[serde(default)]
    pub(crate) locale: Option<String>,
}

/// Router builder exposing the questionnaire, scoring, and journal endpoints.
pub fn meq30_router<S>(service: Arc<SubmissionService<S>>) -> Router
where
    S: ExperienceStore + 'static,
{
    Router::new()
        .route("/api/v1/meq30/questions", get(questions_handler::<S>))
        .route("/api/v1/meq30/score", post(score_handler::<S>))
        .route("/api/v1/meq30/submit", post(submit_handler::<S>))
        .route(
            "/api/v1/meq30/experiences/:experience_id",
            get(experience_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn questions_handler<S>(
    State(service): State<Arc<SubmissionService<S>>>,
    Query(query): Query<LocaleQuery>,
) -> Response
where
    S: ExperienceStore + 'static,
{
    let view = service.questionnaire(query.locale.as_deref());
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn score_handler<S>(
    State(service): State<Arc<SubmissionService<S>>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response
where
    S: ExperienceStore + 'static,
{
    match service.evaluate(&request.answers, request.locale.as_deref()) {
        Ok(evaluation) => {
            let payload = json!({
                "scores": evaluation.scores,
                "record": evaluation.scores.to_record(),
                "interpretation": evaluation.interpretation,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => validation_response(&error),
    }
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<SubmissionService<S>>>,
    axum::Json(request): axum::Json<SubmitRequest>,
) -> Response
where
    S: ExperienceStore + 'static,
{
    match service.submit(request) {
        Ok(record) => {
            let payload = json!({
                "ok": true,
                "experience_id": record.id,
            });
            (StatusCode::ACCEPTED, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn experience_handler<S>(
    State(service): State<Arc<SubmissionService<S>>>,
    Path(experience_id): Path<String>,
    Query(query): Query<LocaleQuery>,
) -> Response
where
    S: ExperienceStore + 'static,
{
    let id = ExperienceId(experience_id);
    match service.view(&id, query.locale.as_deref()) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

fn validation_response(error: &ValidationError) -> Response {
    let payload = json!({
        "error": error.to_string(),
        "item_id": error.item_id,
        "detail": error.kind,
    });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}

fn error_response(error: SubmissionError) -> Response {
    match error {
        SubmissionError::Validation(error) => validation_response(&error),
        SubmissionError::Store(StoreError::NotFound) => {
            let payload = json!({ "error": "experience not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        other if other.is_input_defect() => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        other => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
