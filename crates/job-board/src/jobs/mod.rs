//! Job postings and the application submission workflow.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod store;
pub mod submission;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicantId, ApplicationResult, ExperienceRequirement, InvalidArgument, Job, JobFilter, JobId,
    JobPatch, JobPosting,
};
pub use repository::{AddToSetOutcome, JobRepository, RepositoryError};
pub use router::{job_router, JobRoutesState};
pub use service::{CatalogError, JobCatalog};
pub use store::InMemoryJobStore;
pub use submission::{ApplicationSubmissionService, SubmissionError};

