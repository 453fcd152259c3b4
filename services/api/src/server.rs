use crate::cli::ServeArgs;
use crate::infra::{
    AppState, InMemoryApplicationRepository, InMemoryJobRepository, InMemoryResumeRepository,
};
use crate::routes::with_workflow_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

use applicant_ai::browser::{BrowserConfig, BrowserGateway, HttpBrowser, SessionTimeouts};
use applicant_ai::config::AppConfig;
use applicant_ai::error::AppError;
use applicant_ai::telemetry;
use applicant_ai::workflows::applications::{ApplicationService, ApplicationSubmitter};
use applicant_ai::workflows::jobs::{JobScrapeService, JobScraper};
use applicant_ai::workflows::resume::{OpenAiTailor, ResumeService};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    // All engine components are built once here and injected; nothing is a
    // process-wide singleton.
    let timeouts = SessionTimeouts {
        navigation: config.engine.navigation_timeout,
        element_wait: config.engine.element_wait_timeout,
    };
    let browser: Arc<dyn BrowserGateway> = Arc::new(HttpBrowser::new(&BrowserConfig {
        user_agent: config.engine.user_agent.clone(),
        max_sessions: config.engine.max_sessions,
    })?);

    let jobs = Arc::new(InMemoryJobRepository::default());
    let resumes = Arc::new(InMemoryResumeRepository::default());
    let applications = Arc::new(InMemoryApplicationRepository::default());

    let scraper = Arc::new(JobScraper::new(browser.clone(), timeouts));
    let job_service = Arc::new(JobScrapeService::new(scraper, jobs.clone()));

    let tailor = Arc::new(OpenAiTailor::new(&config.tailor)?);
    let resume_service = Arc::new(ResumeService::new(resumes.clone(), tailor));

    let submitter = Arc::new(ApplicationSubmitter::new(browser, timeouts));
    let application_service = Arc::new(ApplicationService::new(
        jobs,
        resumes,
        applications,
        submitter,
    ));

    let app = with_workflow_routes(job_service, resume_service, application_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "job application orchestrator ready");

    axum::serve(listener, app).await?;
    Ok(())
}
