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
use tracing::error;

use crate::workflows::RepositoryError;

use super::domain::JobId;
use super::repository::JobRepository;
use super::service::{JobScrapeService, JobServiceError};

/// Router builder exposing HTTP endpoints for job ingestion.
pub fn job_router<R>(service: Arc<JobScrapeService<R>>) -> Router
where
    R: JobRepository + 'static,
{
    Router::new()
        .route("/jobs/scrape", post(scrape_handler::<R>))
        .route("/jobs/:job_id", get(job_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct ScrapeJobRequest {
    pub url: String,
}

pub(crate) async fn scrape_handler<R>(
    State(service): State<Arc<JobScrapeService<R>>>,
    axum::Json(request): axum::Json<ScrapeJobRequest>,
) -> Response
where
    R: JobRepository + 'static,
{
    match service.scrape(&request.url).await {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(err) => {
            // Scrape failures are explicit API errors, unlike submission
            // outcomes which are business data.
            error!(url = %request.url, %err, "scrape request failed");
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn job_handler<R>(
    State(service): State<Arc<JobScrapeService<R>>>,
    Path(job_id): Path<u64>,
) -> Response
where
    R: JobRepository + 'static,
{
    match service.get(&JobId(job_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(JobServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({ "error": "job not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
