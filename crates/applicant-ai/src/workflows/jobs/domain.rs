use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored job postings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub u64);

/// A persisted job posting. The `url` is the stable identity key: re-scraping
/// the same URL yields the already-stored record rather than a duplicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub description: String,
    pub url: String,
    /// Which site strategy produced the record, e.g. "linkedin" or "mock".
    /// Submission routing keys on this tag.
    pub source: String,
    pub created_at: DateTime<Utc>,
}

/// The raw product of a scrape, before the service assigns identity and
/// persists it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedJob {
    pub title: String,
    pub company: String,
    pub description: String,
    pub url: String,
    pub source: String,
}
