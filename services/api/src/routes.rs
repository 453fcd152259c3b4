use crate::infra::{
    AppState, InMemoryApplicationRepository, InMemoryJobRepository, InMemoryResumeRepository,
};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

use applicant_ai::workflows::applications::{application_router, ApplicationService};
use applicant_ai::workflows::jobs::{job_router, JobScrapeService};
use applicant_ai::workflows::resume::{resume_router, ResumeService, ResumeTailor};

pub(crate) fn with_workflow_routes<T>(
    job_service: Arc<JobScrapeService<InMemoryJobRepository>>,
    resume_service: Arc<ResumeService<InMemoryResumeRepository, T>>,
    application_service: Arc<
        ApplicationService<
            InMemoryJobRepository,
            InMemoryResumeRepository,
            InMemoryApplicationRepository,
        >,
    >,
) -> axum::Router
where
    T: ResumeTailor + 'static,
{
    job_router(job_service)
        .merge(resume_router(resume_service))
        .merge(application_router(application_service))
        .route("/", axum::routing::get(root))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Welcome to the AI Job Agent API" }))
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
