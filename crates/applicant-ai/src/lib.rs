//! Engine library for the job-application automation service.
//!
//! The crate is organized around the job scraping, resume tailoring, and
//! application submission workflows, composed from a shared automated-browser
//! layer. Persistence stays behind traits so the API service can wire its own
//! adapters.

pub mod browser;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
