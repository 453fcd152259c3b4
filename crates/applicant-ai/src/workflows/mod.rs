//! Workflow modules: job scraping, resume tailoring, application submission.

pub mod applications;
pub mod jobs;
pub mod resume;

/// Error enumeration shared by the workflow storage traits.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
