use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use applicant_ai::workflows::applications::{
    ApplicationId, ApplicationRecord, ApplicationRepository,
};
use applicant_ai::workflows::jobs::{JobId, JobRecord, JobRepository};
use applicant_ai::workflows::resume::{ResumeId, ResumeRecord, ResumeRepository};
use applicant_ai::workflows::RepositoryError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryJobRepository {
    records: Arc<Mutex<HashMap<JobId, JobRecord>>>,
}

impl JobRepository for InMemoryJobRepository {
    fn insert(&self, record: JobRecord) -> Result<JobRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        // The posting URL is the identity key; a second record for the same
        // URL would be a duplicate posting.
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

#[derive(Default, Clone)]
pub(crate) struct InMemoryResumeRepository {
    records: Arc<Mutex<HashMap<ResumeId, ResumeRecord>>>,
}

impl ResumeRepository for InMemoryResumeRepository {
    fn insert(&self, record: ResumeRecord) -> Result<ResumeRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id, record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ResumeId) -> Result<Option<ResumeRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryApplicationRepository {
    records: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
}

impl ApplicationRepository for InMemoryApplicationRepository {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id, record.clone());
        Ok(record)
    }

    fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            guard.insert(record.id, record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}
