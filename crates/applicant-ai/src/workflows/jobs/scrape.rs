//! Site-specific scraping strategies and the URL router that selects them.

use std::sync::Arc;

use scraper::Html;
use tracing::{debug, info};
use url::Url;

use crate::browser::{BrowserGateway, SessionError, SessionTimeouts};

use super::domain::ScrapedJob;
use super::extract::{LINKEDIN_COMPANY, LINKEDIN_DESCRIPTION, LINKEDIN_TITLE};

/// The closed set of site strategies. Unknown hosts always resolve to
/// [`ScraperKind::Generic`]; routing never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScraperKind {
    LinkedIn,
    Generic,
}

impl ScraperKind {
    /// Deterministic source tag stamped onto every record this strategy
    /// produces; submission routing and store de-duplication key on it.
    pub const fn source_tag(self) -> &'static str {
        match self {
            ScraperKind::LinkedIn => "linkedin",
            ScraperKind::Generic => "mock",
        }
    }
}

/// Pure pattern match from URL to strategy. Host comparison when the URL
/// parses, substring fallback otherwise.
pub fn route(url: &str) -> ScraperKind {
    let is_linkedin = match Url::parse(url) {
        Ok(parsed) => parsed
            .host_str()
            .is_some_and(|host| host == "linkedin.com" || host.ends_with(".linkedin.com")),
        Err(_) => url.to_ascii_lowercase().contains("linkedin.com"),
    };

    if is_linkedin {
        ScraperKind::LinkedIn
    } else {
        ScraperKind::Generic
    }
}

/// Which step of the scrape flow a session error interrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrapeStage {
    Navigate,
    Wait,
}

impl ScrapeStage {
    pub const fn label(self) -> &'static str {
        match self {
            ScrapeStage::Navigate => "navigate",
            ScrapeStage::Wait => "wait",
        }
    }
}

/// Fatal scrape error: the session failed before a record could be produced.
/// Field-level misses never raise this; they degrade to sentinels instead.
#[derive(Debug, thiserror::Error)]
#[error("scraping {url} failed during {}: {source}", .stage.label())]
pub struct ScrapeFailure {
    pub url: String,
    pub stage: ScrapeStage,
    #[source]
    pub source: SessionError,
}

impl ScrapeFailure {
    fn at(url: &str, stage: ScrapeStage, source: SessionError) -> Self {
        Self {
            url: url.to_string(),
            stage,
            source,
        }
    }
}

/// Scraper facade: routes a URL to its strategy and runs the full
/// session-drive-extract flow. No retry here: a failed navigation often
/// means the target blocked the session, so retries stay with the caller.
pub struct JobScraper {
    browser: Arc<dyn BrowserGateway>,
    timeouts: SessionTimeouts,
}

impl JobScraper {
    pub fn new(browser: Arc<dyn BrowserGateway>, timeouts: SessionTimeouts) -> Self {
        Self { browser, timeouts }
    }

    pub async fn scrape(&self, url: &str) -> Result<ScrapedJob, ScrapeFailure> {
        match route(url) {
            ScraperKind::LinkedIn => self.scrape_linkedin(url).await,
            ScraperKind::Generic => Ok(self.stub_job(url)),
        }
    }

    async fn scrape_linkedin(&self, url: &str) -> Result<ScrapedJob, ScrapeFailure> {
        info!(%url, "scraping linkedin posting");

        let mut session = self
            .browser
            .open()
            .await
            .map_err(|source| ScrapeFailure::at(url, ScrapeStage::Navigate, source))?;

        if let Err(source) = session.goto(url, self.timeouts.navigation).await {
            session.close().await;
            return Err(ScrapeFailure::at(url, ScrapeStage::Navigate, source));
        }

        // Public job pages render the posting under an h1; its absence means
        // the page we got is not a posting at all.
        if let Err(source) = session.wait_for("h1", self.timeouts.element_wait).await {
            session.close().await;
            return Err(ScrapeFailure::at(url, ScrapeStage::Wait, source));
        }

        let markup = match session.content() {
            Ok(markup) => markup,
            Err(source) => {
                session.close().await;
                return Err(ScrapeFailure::at(url, ScrapeStage::Wait, source));
            }
        };
        session.close().await;

        let document = Html::parse_document(&markup);
        let title = LINKEDIN_TITLE.extract(&document);
        let company = LINKEDIN_COMPANY.extract(&document);
        let description = LINKEDIN_DESCRIPTION.extract(&document);
        debug!(%url, %title, %company, "fields extracted");

        Ok(ScrapedJob {
            title,
            company,
            description,
            url: url.to_string(),
            source: ScraperKind::LinkedIn.source_tag().to_string(),
        })
    }

    /// Strategy for hosts without a dedicated scraper: a fixed stub record.
    /// No session is opened.
    fn stub_job(&self, url: &str) -> ScrapedJob {
        debug!(%url, "no dedicated scraper for host, returning stub record");
        ScrapedJob {
            title: "Software Engineer".to_string(),
            company: "Tech Corp".to_string(),
            description: "We are looking for a software engineer...".to_string(),
            url: url.to_string(),
            source: ScraperKind::Generic.source_tag().to_string(),
        }
    }
}
