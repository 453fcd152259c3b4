use crate::workflows::RepositoryError;

use super::domain::{JobId, JobRecord};

/// Storage abstraction for job postings. The engine never queries a concrete
/// store; binaries supply an adapter. `fetch_by_url` backs the identity
/// invariant of one record per posting URL.
pub trait JobRepository: Send + Sync {
    fn insert(&self, record: JobRecord) -> Result<JobRecord, RepositoryError>;
    fn fetch(&self, id: &JobId) -> Result<Option<JobRecord>, RepositoryError>;
    fn fetch_by_url(&self, url: &str) -> Result<Option<JobRecord>, RepositoryError>;
}
