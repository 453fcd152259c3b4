//! Resume storage and tailoring against a language-model backend.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod tailor;

pub use domain::{ResumeId, ResumeRecord};
pub use repository::ResumeRepository;
pub use router::resume_router;
pub use service::{ResumeService, ResumeServiceError};
pub use tailor::{OpenAiTailor, ResumeTailor, TailorError};
