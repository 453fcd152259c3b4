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

use crate::workflows::jobs::{JobId, JobRepository};
use crate::workflows::resume::{ResumeId, ResumeRepository};
use crate::workflows::RepositoryError;

use super::domain::ApplicationId;
use super::repository::ApplicationRepository;
use super::service::{ApplicationService, ApplicationServiceError};

/// Router builder exposing HTTP endpoints for application submission.
pub fn application_router<J, R, A>(service: Arc<ApplicationService<J, R, A>>) -> Router
where
    J: JobRepository + 'static,
    R: ResumeRepository + 'static,
    A: ApplicationRepository + 'static,
{
    Router::new()
        .route(
            "/applications/submit",
            post(submit_handler::<J, R, A>),
        )
        .route(
            "/applications/:application_id",
            get(application_handler::<J, R, A>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct SubmitApplicationRequest {
    pub job_id: u64,
    pub resume_id: u64,
}

pub(crate) async fn submit_handler<J, R, A>(
    State(service): State<Arc<ApplicationService<J, R, A>>>,
    axum::Json(request): axum::Json<SubmitApplicationRequest>,
) -> Response
where
    J: JobRepository + 'static,
    R: ResumeRepository + 'static,
    A: ApplicationRepository + 'static,
{
    match service
        .submit(JobId(request.job_id), ResumeId(request.resume_id))
        .await
    {
        // A failed submission still answers 200: the outcome lives in the
        // record's status, not in the HTTP status.
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(
            err @ (ApplicationServiceError::JobNotFound(_)
            | ApplicationServiceError::ResumeNotFound(_)),
        ) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn application_handler<J, R, A>(
    State(service): State<Arc<ApplicationService<J, R, A>>>,
    Path(application_id): Path<u64>,
) -> Response
where
    J: JobRepository + 'static,
    R: ResumeRepository + 'static,
    A: ApplicationRepository + 'static,
{
    match service.get(&ApplicationId(application_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(ApplicationServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({ "error": "application not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
