use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{InvalidArgument, Job, JobFilter, JobId, JobPatch, JobPosting};
use super::repository::{JobRepository, RepositoryError};

/// Field-mapped CRUD over the jobs collection.
pub struct JobCatalog<R> {
    jobs: Arc<R>,
}

impl<R> JobCatalog<R>
where
    R: JobRepository + 'static,
{
    pub fn new(jobs: Arc<R>) -> Self {
        Self { jobs }
    }

    pub async fn create(&self, posting: JobPosting) -> Result<Job, CatalogError> {
        let job = Job::from_posting(posting, Utc::now());
        let stored = self.jobs.insert(job).await?;
        info!(job_id = %stored.id, owner = %stored.job_owner, "job posted");
        Ok(stored)
    }

    pub async fn list(&self) -> Result<Vec<Job>, CatalogError> {
        Ok(self.jobs.find(&JobFilter::default()).await?)
    }

    pub async fn find(&self, filter: &JobFilter) -> Result<Vec<Job>, CatalogError> {
        Ok(self.jobs.find(filter).await?)
    }

    pub async fn get(&self, job_id: &str) -> Result<Option<Job>, CatalogError> {
        let id = JobId::parse(job_id)?;
        Ok(self.jobs.find_by_id(&id).await?)
    }

    pub async fn update(&self, job_id: &str, patch: JobPatch) -> Result<Option<Job>, CatalogError> {
        let id = JobId::parse(job_id)?;
        let updated = self.jobs.update(&id, patch).await?;
        if updated.is_some() {
            info!(job_id = %id, "job updated");
        }
        Ok(updated)
    }

    pub async fn delete(&self, job_id: &str) -> Result<Option<Job>, CatalogError> {
        let id = JobId::parse(job_id)?;
        let deleted = self.jobs.delete(&id).await?;
        if deleted.is_some() {
            info!(job_id = %id, "job deleted");
        }
        Ok(deleted)
    }

    pub async fn count_by_owner(&self, owner: &str) -> Result<usize, CatalogError> {
        let owner = owner.trim();
        if owner.is_empty() {
            return Err(InvalidArgument::BlankOwner.into());
        }
        Ok(self.find(&JobFilter::owned_by(owner)).await?.len())
    }
}

/// Error raised by the job catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    #[error(transparent)]
    Store(#[from] RepositoryError),
}
