use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use super::domain::{ApplicantId, Job, JobFilter, JobId, JobPatch};
use super::repository::{AddToSetOutcome, JobRepository, RepositoryError};

/// In-process document store for jobs, kept in insertion order.
///
/// Every operation runs under one lock, so `add_applicant_if_absent` is a single
/// conditional update from the point of view of every other caller.
#[derive(Default, Clone)]
pub struct InMemoryJobStore {
    documents: Arc<Mutex<Vec<Job>>>,
}

impl InMemoryJobStore {
    fn documents(&self) -> Result<MutexGuard<'_, Vec<Job>>, RepositoryError> {
        self.documents
            .lock()
            .map_err(|_| RepositoryError::Unavailable("job store lock poisoned".to_string()))
    }
}

#[async_trait]
impl JobRepository for InMemoryJobStore {
    async fn insert(&self, job: Job) -> Result<Job, RepositoryError> {
        let mut documents = self.documents()?;
        if documents.iter().any(|existing| existing.id == job.id) {
            return Err(RepositoryError::Conflict);
        }
        documents.push(job.clone());
        Ok(job)
    }

    async fn find_by_id(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        let documents = self.documents()?;
        Ok(documents.iter().find(|job| job.id == *id).cloned())
    }

    async fn find(&self, filter: &JobFilter) -> Result<Vec<Job>, RepositoryError> {
        let documents = self.documents()?;
        Ok(documents
            .iter()
            .filter(|job| filter.matches(job))
            .cloned()
            .collect())
    }

    async fn update(&self, id: &JobId, patch: JobPatch) -> Result<Option<Job>, RepositoryError> {
        let mut documents = self.documents()?;
        let target = documents.iter_mut().find(|job| job.id == *id);
        Ok(target.map(|job| {
            job.apply(patch);
            job.clone()
        }))
    }

    async fn delete(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        let mut documents = self.documents()?;
        let position = documents.iter().position(|job| job.id == *id);
        Ok(position.map(|index| documents.remove(index)))
    }

    async fn add_applicant_if_absent(
        &self,
        id: &JobId,
        applicant: &ApplicantId,
    ) -> Result<AddToSetOutcome, RepositoryError> {
        let mut documents = self.documents()?;
        let Some(job) = documents.iter_mut().find(|job| job.id == *id) else {
            return Ok(AddToSetOutcome::MissingDocument);
        };

        if job.has_applicant(applicant) {
            return Ok(AddToSetOutcome::AlreadyPresent);
        }

        job.applied_applicants.push(applicant.clone());
        Ok(AddToSetOutcome::Added)
    }
}
