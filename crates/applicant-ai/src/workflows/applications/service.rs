use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::workflows::jobs::{JobId, JobRepository};
use crate::workflows::resume::{ResumeId, ResumeRepository};
use crate::workflows::RepositoryError;

use super::domain::{ApplicationId, ApplicationRecord};
use super::repository::ApplicationRepository;
use super::status::{ApplicationStatus, SubmissionOutcome};
use super::submit::ApplicationSubmitter;

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    ApplicationId(APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed))
}

/// Service composing reference resolution, the submitter, and the status
/// machine. Holds no state of its own: re-invoking submit for the same
/// references runs a full fresh cycle.
pub struct ApplicationService<J, R, A> {
    jobs: Arc<J>,
    resumes: Arc<R>,
    applications: Arc<A>,
    submitter: Arc<ApplicationSubmitter>,
}

impl<J, R, A> ApplicationService<J, R, A>
where
    J: JobRepository + 'static,
    R: ResumeRepository + 'static,
    A: ApplicationRepository + 'static,
{
    pub fn new(
        jobs: Arc<J>,
        resumes: Arc<R>,
        applications: Arc<A>,
        submitter: Arc<ApplicationSubmitter>,
    ) -> Self {
        Self {
            jobs,
            resumes,
            applications,
            submitter,
        }
    }

    /// Create an application for the referenced job and resume, run the
    /// submitter, and persist the translated status.
    pub async fn submit(
        &self,
        job_id: JobId,
        resume_id: ResumeId,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let job = self
            .jobs
            .fetch(&job_id)?
            .ok_or(ApplicationServiceError::JobNotFound(job_id))?;
        self.resumes
            .fetch(&resume_id)?
            .ok_or(ApplicationServiceError::ResumeNotFound(resume_id))?;

        let record = ApplicationRecord {
            id: next_application_id(),
            job_id,
            resume_id,
            status: ApplicationStatus::Pending,
            submitted_at: None,
            created_at: Utc::now(),
        };
        let mut record = self.applications.insert(record)?;

        let outcome = self.submitter.submit(&job).await;
        record.status = ApplicationStatus::from_outcome(&outcome);
        if let SubmissionOutcome::Failure { reason } = &outcome {
            info!(application = record.id.0, %reason, "submission failed");
        }
        if record.status == ApplicationStatus::Submitted {
            record.submitted_at = Some(Utc::now());
        }

        self.applications.update(record.clone())?;
        info!(
            application = record.id.0,
            status = record.status.label(),
            "application cycle complete"
        );
        Ok(record)
    }

    pub fn get(&self, id: &ApplicationId) -> Result<ApplicationRecord, ApplicationServiceError> {
        self.applications
            .fetch(id)?
            .ok_or(ApplicationServiceError::Repository(
                RepositoryError::NotFound,
            ))
    }
}

/// Error raised by the application service. Submission failures are not
/// errors; they surface as a `failed` status on the returned record.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error("job {} not found", .0 .0)]
    JobNotFound(JobId),
    #[error("resume {} not found", .0 .0)]
    ResumeNotFound(ResumeId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
