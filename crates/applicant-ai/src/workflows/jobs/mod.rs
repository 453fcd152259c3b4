//! Job-posting ingestion: route a URL to a site scraper, drive a browser
//! session through the page, and extract a structured job record.

pub mod domain;
pub mod extract;
pub mod repository;
pub mod router;
pub mod scrape;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{JobId, JobRecord, ScrapedJob};
pub use repository::JobRepository;
pub use router::job_router;
pub use scrape::{JobScraper, ScrapeFailure, ScrapeStage, ScraperKind};
pub use service::{JobScrapeService, JobServiceError};
