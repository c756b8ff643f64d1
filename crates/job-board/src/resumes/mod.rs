//! Applicant resumes, keyed by email.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;


pub use domain::{Resume, ResumeDraft, ResumePatch};
pub use repository::{InMemoryResumeStore, ResumeRepository};
pub use router::resume_router;
pub use service::{ResumeService, ResumeServiceError};
