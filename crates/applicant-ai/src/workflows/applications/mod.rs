//! Application submission: route a job's source to a submitter strategy,
//! drive the apply flow, and translate the raw outcome through the status
//! machine.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod status;
pub mod submit;

#[cfg(test)]
mod tests;

pub use domain::{ApplicationId, ApplicationRecord};
pub use repository::ApplicationRepository;
pub use router::application_router;
pub use service::{ApplicationService, ApplicationServiceError};
pub use status::{ApplicationStatus, SubmissionOutcome};
pub use submit::{ApplicationSubmitter, SubmitterKind};
