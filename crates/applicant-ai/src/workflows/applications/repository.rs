use crate::workflows::RepositoryError;

use super::domain::{ApplicationId, ApplicationRecord};

/// Storage abstraction for applications. The engine creates records as
/// `Pending` and updates them after the status machine runs; it never
/// deletes them.
pub trait ApplicationRepository: Send + Sync {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError>;
    fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError>;
}
