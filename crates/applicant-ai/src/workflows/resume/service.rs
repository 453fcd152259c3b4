use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use crate::workflows::RepositoryError;

use super::domain::{ResumeId, ResumeRecord};
use super::repository::ResumeRepository;
use super::tailor::{ResumeTailor, TailorError};

static RESUME_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_resume_id() -> ResumeId {
    ResumeId(RESUME_SEQUENCE.fetch_add(1, Ordering::Relaxed))
}

/// Service composing the tailoring backend with the resume store.
pub struct ResumeService<R, T> {
    repository: Arc<R>,
    tailor: Arc<T>,
}

impl<R, T> ResumeService<R, T>
where
    R: ResumeRepository + 'static,
    T: ResumeTailor + 'static,
{
    pub fn new(repository: Arc<R>, tailor: Arc<T>) -> Self {
        Self { repository, tailor }
    }

    /// Tailor `base_resume` to `job_description` and persist the result.
    ///
    /// Backend failure degrades rather than erroring: the stored content is
    /// the base text annotated with an error marker, so the caller always
    /// gets a usable resume record back.
    pub async fn tailor(
        &self,
        base_resume: &str,
        job_description: &str,
    ) -> Result<ResumeRecord, ResumeServiceError> {
        let content = match self.tailor.tailor(base_resume, job_description).await {
            Ok(tailored) => tailored,
            Err(err) => {
                warn!(%err, "tailoring backend failed, preserving base resume");
                fallback_content(base_resume, &err)
            }
        };

        let record = ResumeRecord {
            id: next_resume_id(),
            content,
            base_resume: false,
            created_at: Utc::now(),
        };

        Ok(self.repository.insert(record)?)
    }

    /// Store a master resume supplied from the outside.
    pub fn create_base(&self, content: &str) -> Result<ResumeRecord, ResumeServiceError> {
        let record = ResumeRecord {
            id: next_resume_id(),
            content: content.to_string(),
            base_resume: true,
            created_at: Utc::now(),
        };
        Ok(self.repository.insert(record)?)
    }

    pub fn get(&self, id: &ResumeId) -> Result<ResumeRecord, ResumeServiceError> {
        self.repository
            .fetch(id)?
            .ok_or(ResumeServiceError::Repository(RepositoryError::NotFound))
    }
}

pub(crate) fn fallback_content(base_resume: &str, _err: &TailorError) -> String {
    format!("Error tailoring resume. Original content preserved.\n\n{base_resume}")
}

/// Error raised by the resume service.
#[derive(Debug, thiserror::Error)]
pub enum ResumeServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
