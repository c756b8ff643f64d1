use async_trait::async_trait;

use super::domain::{ApplicantId, Job, JobFilter, JobId, JobPatch};

/// Document-store contract for the jobs collection.
///
/// Implementations must execute [`JobRepository::add_applicant_if_absent`] as a single
/// conditional document operation: no caller may observe the applicant list between the
/// membership check and the append.
#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn insert(&self, job: Job) -> Result<Job, RepositoryError>;
    async fn find_by_id(&self, id: &JobId) -> Result<Option<Job>, RepositoryError>;
    async fn find(&self, filter: &JobFilter) -> Result<Vec<Job>, RepositoryError>;
    async fn update(&self, id: &JobId, patch: JobPatch) -> Result<Option<Job>, RepositoryError>;
    async fn delete(&self, id: &JobId) -> Result<Option<Job>, RepositoryError>;
    async fn add_applicant_if_absent(
        &self,
        id: &JobId,
        applicant: &ApplicantId,
    ) -> Result<AddToSetOutcome, RepositoryError>;
}

/// What the atomic add-to-set primitive did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddToSetOutcome {
    Added,
    AlreadyPresent,
    MissingDocument,
}

/// Error enumeration for store failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store request timed out")]
    Timeout,
}
