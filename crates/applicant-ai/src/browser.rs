//! Automated-browser sessions for the scrape and submit workflows.
//!
//! Sessions are single-use: a workflow opens one, drives it through its steps,
//! and closes it on every exit path. There is no pooling or reuse across
//! calls; call volume is page-load bound, not CPU bound. The gateway owns the
//! concurrency cap: each open session holds one permit until it is closed.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio::time::timeout;
use tracing::debug;

/// Session-level failures, prior to workflow-specific wrapping.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },
    #[error("element `{selector}` did not appear in the page")]
    ElementNotFound { selector: String },
    #[error("no page has been loaded in this session")]
    NoPage,
    #[error("browser gateway unavailable: {0}")]
    Gateway(String),
}

/// One automated page, driven step by step.
///
/// `close` consumes the session and must run on success and failure paths
/// alike; implementations release their concurrency permit there or on drop.
#[async_trait]
pub trait PageSession: Send {
    /// Load `url`, bounded by `limit`. Timeouts and network failures both
    /// surface as [`SessionError::Navigation`].
    async fn goto(&mut self, url: &str, limit: Duration) -> Result<(), SessionError>;

    /// Block until `selector` is present in the rendered page, bounded by
    /// `limit`.
    async fn wait_for(&mut self, selector: &str, limit: Duration) -> Result<(), SessionError>;

    /// The rendered markup of the current page. Read once per call flow.
    fn content(&self) -> Result<String, SessionError>;

    async fn close(self: Box<Self>);
}

/// Factory for page sessions. Workflows hold this behind an `Arc` so a single
/// gateway (and its session cap) is shared process-wide.
#[async_trait]
pub trait BrowserGateway: Send + Sync {
    async fn open(&self) -> Result<Box<dyn PageSession>, SessionError>;
}

/// Timeouts applied per navigation / element-wait step.
#[derive(Debug, Clone, Copy)]
pub struct SessionTimeouts {
    pub navigation: Duration,
    pub element_wait: Duration,
}

impl Default for SessionTimeouts {
    fn default() -> Self {
        Self {
            navigation: Duration::from_secs(60),
            element_wait: Duration::from_secs(10),
        }
    }
}

/// Construction knobs for [`HttpBrowser`].
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    pub user_agent: String,
    pub max_sessions: usize,
}

/// Gateway backed by plain HTTP fetches of the rendered page.
///
/// Public job postings serve their content in the initial document, so a
/// fetch-and-parse session covers the scrape/submit flows without driving a
/// full browser binary.
pub struct HttpBrowser {
    client: Client,
    permits: Arc<Semaphore>,
}

impl HttpBrowser {
    pub fn new(config: &BrowserConfig) -> Result<Self, SessionError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|err| SessionError::Gateway(err.to_string()))?;

        Ok(Self {
            client,
            permits: Arc::new(Semaphore::new(config.max_sessions)),
        })
    }
}

#[async_trait]
impl BrowserGateway for HttpBrowser {
    async fn open(&self) -> Result<Box<dyn PageSession>, SessionError> {
        let permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .map_err(|err| SessionError::Gateway(err.to_string()))?;

        Ok(Box::new(HttpPageSession {
            client: self.client.clone(),
            _permit: permit,
            url: None,
            markup: None,
        }))
    }
}

struct HttpPageSession {
    client: Client,
    _permit: OwnedSemaphorePermit,
    url: Option<String>,
    markup: Option<String>,
}

#[async_trait]
impl PageSession for HttpPageSession {
    async fn goto(&mut self, url: &str, limit: Duration) -> Result<(), SessionError> {
        let navigation = |reason: String| SessionError::Navigation {
            url: url.to_string(),
            reason,
        };

        let fetch = async {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|err| navigation(err.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(navigation(format!("http status {status}")));
            }

            response.text().await.map_err(|err| navigation(err.to_string()))
        };

        let markup = match timeout(limit, fetch).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(navigation(format!(
                    "page load exceeded {}ms",
                    limit.as_millis()
                )))
            }
        };

        debug!(%url, bytes = markup.len(), "page fetched");
        self.url = Some(url.to_string());
        self.markup = Some(markup);
        Ok(())
    }

    async fn wait_for(&mut self, selector: &str, _limit: Duration) -> Result<(), SessionError> {
        // A fetched document never re-renders, so the wait degenerates to a
        // single presence check against the loaded markup.
        let markup = self.markup.as_ref().ok_or(SessionError::NoPage)?;

        let missing = || SessionError::ElementNotFound {
            selector: selector.to_string(),
        };
        let parsed = Selector::parse(selector).map_err(|_| missing())?;

        let document = Html::parse_document(markup);
        if document.select(&parsed).next().is_some() {
            Ok(())
        } else {
            Err(missing())
        }
    }

    fn content(&self) -> Result<String, SessionError> {
        self.markup.clone().ok_or(SessionError::NoPage)
    }

    async fn close(self: Box<Self>) {
        if let Some(url) = &self.url {
            debug!(%url, "session closed");
        }
    }
}
