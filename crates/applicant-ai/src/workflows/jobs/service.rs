use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::workflows::RepositoryError;

use super::domain::{JobId, JobRecord};
use super::repository::JobRepository;
use super::scrape::{JobScraper, ScrapeFailure};

static JOB_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_job_id() -> JobId {
    JobId(JOB_SEQUENCE.fetch_add(1, Ordering::Relaxed))
}

/// Service composing the scraper facade with the job store.
pub struct JobScrapeService<R> {
    scraper: Arc<JobScraper>,
    repository: Arc<R>,
}

impl<R> JobScrapeService<R>
where
    R: JobRepository + 'static,
{
    pub fn new(scraper: Arc<JobScraper>, repository: Arc<R>) -> Self {
        Self {
            scraper,
            repository,
        }
    }

    /// Scrape `url` and persist the result. A URL already in the store wins
    /// over a fresh scrape: the posting URL is the record's identity.
    pub async fn scrape(&self, url: &str) -> Result<JobRecord, JobServiceError> {
        if let Some(existing) = self.repository.fetch_by_url(url)? {
            info!(%url, id = existing.id.0, "job already stored, skipping scrape");
            return Ok(existing);
        }

        let scraped = self.scraper.scrape(url).await?;

        let record = JobRecord {
            id: next_job_id(),
            title: scraped.title,
            company: scraped.company,
            description: scraped.description,
            url: scraped.url,
            source: scraped.source,
            created_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(id = stored.id.0, source = %stored.source, "job stored");
        Ok(stored)
    }

    pub fn get(&self, id: &JobId) -> Result<JobRecord, JobServiceError> {
        self.repository
            .fetch(id)?
            .ok_or(JobServiceError::Repository(RepositoryError::NotFound))
    }
}

/// Error raised by the job service.
#[derive(Debug, thiserror::Error)]
pub enum JobServiceError {
    #[error(transparent)]
    Scrape(#[from] ScrapeFailure),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
