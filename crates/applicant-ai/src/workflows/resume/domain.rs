use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored resumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResumeId(pub u64);

/// A stored resume, immutable once created. Tailoring never mutates a base
/// resume; it produces a new non-base record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub id: ResumeId,
    pub content: String,
    /// Master resumes come in from the outside; tailored ones are derived.
    pub base_resume: bool,
    pub created_at: DateTime<Utc>,
}
