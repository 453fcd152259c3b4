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

use crate::workflows::RepositoryError;

use super::domain::ResumeId;
use super::repository::ResumeRepository;
use super::service::{ResumeService, ResumeServiceError};
use super::tailor::ResumeTailor;

/// Router builder exposing HTTP endpoints for resume tailoring.
pub fn resume_router<R, T>(service: Arc<ResumeService<R, T>>) -> Router
where
    R: ResumeRepository + 'static,
    T: ResumeTailor + 'static,
{
    Router::new()
        .route("/resumes/tailor", post(tailor_handler::<R, T>))
        .route("/resumes/:resume_id", get(resume_handler::<R, T>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct TailorResumeRequest {
    pub base_resume: String,
    pub job_description: String,
}

pub(crate) async fn tailor_handler<R, T>(
    State(service): State<Arc<ResumeService<R, T>>>,
    axum::Json(request): axum::Json<TailorResumeRequest>,
) -> Response
where
    R: ResumeRepository + 'static,
    T: ResumeTailor + 'static,
{
    match service
        .tailor(&request.base_resume, &request.job_description)
        .await
    {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn resume_handler<R, T>(
    State(service): State<Arc<ResumeService<R, T>>>,
    Path(resume_id): Path<u64>,
) -> Response
where
    R: ResumeRepository + 'static,
    T: ResumeTailor + 'static,
{
    match service.get(&ResumeId(resume_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(ResumeServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({ "error": "resume not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
