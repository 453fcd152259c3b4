use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::jobs::JobId;
use crate::workflows::resume::ResumeId;

use super::status::ApplicationStatus;

/// Identifier wrapper for submitted applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub u64);

/// An application tracked through the submission lifecycle. Jobs and resumes
/// are referenced by identity, never owned; many applications may share one
/// job or resume. Created `Pending`; only the status machine moves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub resume_id: ResumeId,
    pub status: ApplicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
