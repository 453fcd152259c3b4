use crate::workflows::RepositoryError;

use super::domain::{ResumeId, ResumeRecord};

/// Storage abstraction for resumes.
pub trait ResumeRepository: Send + Sync {
    fn insert(&self, record: ResumeRecord) -> Result<ResumeRecord, RepositoryError>;
    fn fetch(&self, id: &ResumeId) -> Result<Option<ResumeRecord>, RepositoryError>;
}
