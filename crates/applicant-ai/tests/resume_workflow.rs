//! Specifications for resume tailoring, including the degrade-to-base-text
//! fallback when the language-model backend is unavailable.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use applicant_ai::workflows::resume::{
        ResumeId, ResumeRecord, ResumeRepository, ResumeService, ResumeTailor, TailorError,
    };
    use applicant_ai::workflows::RepositoryError;

    #[derive(Default, Clone)]
    pub(super) struct InMemoryResumeRepository {
        records: Arc<Mutex<HashMap<ResumeId, ResumeRecord>>>,
    }

    impl ResumeRepository for InMemoryResumeRepository {
        fn insert(&self, record: ResumeRecord) -> Result<ResumeRecord, RepositoryError> {
            let mut guard = self.records.lock().expect("repository mutex poisoned");
            guard.insert(record.id, record.clone());
            Ok(record)
        }

        fn fetch(&self, id: &ResumeId) -> Result<Option<ResumeRecord>, RepositoryError> {
            let guard = self.records.lock().expect("repository mutex poisoned");
            Ok(guard.get(id).cloned())
        }
    }

    /// Tailor stub: either echoes a canned rewrite or fails like an
    /// unreachable backend.
    pub(super) struct ScriptedTailor {
        pub(super) rewrite: Option<String>,
    }

    #[async_trait]
    impl ResumeTailor for ScriptedTailor {
        async fn tailor(
            &self,
            _base_resume: &str,
            _job_description: &str,
        ) -> Result<String, TailorError> {
            match &self.rewrite {
                Some(text) => Ok(text.clone()),
                None => Err(TailorError::Backend("http status 401".to_string())),
            }
        }
    }

    pub(super) fn service(
        tailor: ScriptedTailor,
    ) -> ResumeService<InMemoryResumeRepository, ScriptedTailor> {
        ResumeService::new(Arc::new(InMemoryResumeRepository::default()), Arc::new(tailor))
    }
}

use common::{service, ScriptedTailor};

#[tokio::test]
async fn tailored_output_is_persisted_as_a_derived_resume() {
    let service = service(ScriptedTailor {
        rewrite: Some("Rust engineer, reworded for the posting.".to_string()),
    });

    let record = service
        .tailor("Rust engineer.", "Looking for a senior Rust engineer.")
        .await
        .expect("tailoring persists");

    assert_eq!(record.content, "Rust engineer, reworded for the posting.");
    assert!(!record.base_resume);

    let stored = service.get(&record.id).expect("record stored");
    assert_eq!(stored, record);
}

#[tokio::test]
async fn backend_failure_degrades_to_the_annotated_base_text() {
    let service = service(ScriptedTailor { rewrite: None });

    let record = service
        .tailor("Rust engineer.", "Job description.")
        .await
        .expect("fallback still persists a record");

    assert!(
        record
            .content
            .starts_with("Error tailoring resume. Original content preserved."),
        "content: {}",
        record.content
    );
    assert!(record.content.ends_with("Rust engineer."));
    assert!(!record.base_resume);
}

#[tokio::test]
async fn base_resumes_are_stored_as_masters() {
    let service = service(ScriptedTailor { rewrite: None });
    let record = service
        .create_base("Rust engineer.")
        .expect("base resume stored");

    assert!(record.base_resume);
    assert_eq!(record.content, "Rust engineer.");
}
