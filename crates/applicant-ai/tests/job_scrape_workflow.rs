//! End-to-end specifications for the job ingestion workflow, exercised
//! through the public service facade and HTTP router.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;

    use applicant_ai::browser::{BrowserGateway, PageSession, SessionError, SessionTimeouts};
    use applicant_ai::workflows::jobs::{JobId, JobRecord, JobRepository, JobScrapeService, JobScraper};
    use applicant_ai::workflows::RepositoryError;

    #[derive(Default, Clone)]
    pub(super) struct InMemoryJobRepository {
        records: Arc<Mutex<HashMap<JobId, JobRecord>>>,
    }

    impl JobRepository for InMemoryJobRepository {
        fn insert(&self, record: JobRecord) -> Result<JobRecord, RepositoryError> {
            let mut guard = self.records.lock().expect("repository mutex poisoned");
            if guard.values().any(|stored| stored.url == record.url) {
                return Err(RepositoryError::Conflict);
            }
            guard.insert(record.id, record.clone());
            Ok(record)
        }

        fn fetch(&self, id: &JobId) -> Result<Option<JobRecord>, RepositoryError> {
            let guard = self.records.lock().expect("repository mutex poisoned");
            Ok(guard.get(id).cloned())
        }

        fn fetch_by_url(&self, url: &str) -> Result<Option<JobRecord>, RepositoryError> {
            let guard = self.records.lock().expect("repository mutex poisoned");
            Ok(guard.values().find(|record| record.url == url).cloned())
        }
    }

    pub(super) struct StaticPageBrowser {
        markup: Option<String>,
    }

    impl StaticPageBrowser {
        pub(super) fn serving(markup: &str) -> Self {
            Self {
                markup: Some(markup.to_string()),
            }
        }

        pub(super) fn unreachable() -> Self {
            Self { markup: None }
        }
    }

    #[async_trait]
    impl BrowserGateway for StaticPageBrowser {
        async fn open(&self) -> Result<Box<dyn PageSession>, SessionError> {
            Ok(Box::new(StaticPageSession {
                page: self.markup.clone(),
                markup: None,
            }))
        }
    }

    struct StaticPageSession {
        page: Option<String>,
        markup: Option<String>,
    }

    #[async_trait]
    impl PageSession for StaticPageSession {
        async fn goto(&mut self, url: &str, limit: Duration) -> Result<(), SessionError> {
            match &self.page {
                Some(markup) => {
                    self.markup = Some(markup.clone());
                    Ok(())
                }
                None => Err(SessionError::Navigation {
                    url: url.to_string(),
                    reason: format!("page load exceeded {}ms", limit.as_millis()),
                }),
            }
        }

        async fn wait_for(&mut self, selector: &str, _limit: Duration) -> Result<(), SessionError> {
            let markup = self.markup.as_ref().ok_or(SessionError::NoPage)?;
            if markup.contains("<h1") {
                Ok(())
            } else {
                Err(SessionError::ElementNotFound {
                    selector: selector.to_string(),
                })
            }
        }

        fn content(&self) -> Result<String, SessionError> {
            self.markup.clone().ok_or(SessionError::NoPage)
        }

        async fn close(self: Box<Self>) {}
    }

    pub(super) fn service(
        browser: StaticPageBrowser,
    ) -> Arc<JobScrapeService<InMemoryJobRepository>> {
        let scraper = Arc::new(JobScraper::new(
            Arc::new(browser),
            SessionTimeouts::default(),
        ));
        Arc::new(JobScrapeService::new(
            scraper,
            Arc::new(InMemoryJobRepository::default()),
        ))
    }

    pub(super) const LINKEDIN_JOB_PAGE: &str = r#"<html><body>
        <h1 class="top-card-layout__title">Senior Rust Engineer</h1>
        <a class="topcard__org-name-link">Ferrous Systems</a>
        <div class="show-more-less-html__markup">Own the ingestion pipeline.</div>
    </body></html>"#;
}

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use applicant_ai::workflows::jobs::job_router;

use common::{service, StaticPageBrowser, LINKEDIN_JOB_PAGE};

fn scrape_request(url: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/jobs/scrape")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "url": url }).to_string()))
        .expect("request builds")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}

#[tokio::test]
async fn scraping_a_linkedin_page_persists_the_record() {
    let service = service(StaticPageBrowser::serving(LINKEDIN_JOB_PAGE));
    let router = job_router(service);

    let response = router
        .oneshot(scrape_request("https://www.linkedin.com/jobs/view/42"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["title"], "Senior Rust Engineer");
    assert_eq!(body["company"], "Ferrous Systems");
    assert_eq!(body["source"], "linkedin");
    assert!(body["id"].as_u64().is_some());
}

#[tokio::test]
async fn rescraping_the_same_url_returns_the_stored_record() {
    let service = service(StaticPageBrowser::serving(LINKEDIN_JOB_PAGE));

    let first = service
        .scrape("https://www.linkedin.com/jobs/view/7")
        .await
        .expect("first scrape succeeds");
    let second = service
        .scrape("https://www.linkedin.com/jobs/view/7")
        .await
        .expect("second scrape succeeds");

    assert_eq!(first.id, second.id);
    assert_eq!(first, second);
}

#[tokio::test]
async fn generic_urls_persist_the_stub_record() {
    let service = service(StaticPageBrowser::unreachable());
    let record = service
        .scrape("https://generic.example/job/1")
        .await
        .expect("stub scrape succeeds without a session");

    assert_eq!(record.source, "mock");
    assert_eq!(record.title, "Software Engineer");
}

#[tokio::test]
async fn scrape_failures_surface_as_a_500() {
    let service = service(StaticPageBrowser::unreachable());
    let router = job_router(service);

    let response = router
        .oneshot(scrape_request("https://www.linkedin.com/jobs/view/500"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(
        body["error"]
            .as_str()
            .expect("error message present")
            .contains("navigate"),
        "body: {body}"
    );
}

#[tokio::test]
async fn missing_jobs_return_404() {
    let service = service(StaticPageBrowser::unreachable());
    let router = job_router(service);

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/jobs/999999")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
