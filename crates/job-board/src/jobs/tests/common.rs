use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::jobs::domain::{ApplicantId, Job, JobFilter, JobId, JobPatch, JobPosting};
use crate::jobs::repository::{AddToSetOutcome, JobRepository, RepositoryError};
use crate::jobs::store::InMemoryJobStore;
use crate::jobs::{job_router, ApplicationSubmissionService, JobCatalog, JobRoutesState};

pub(super) fn posting(owner: &str) -> JobPosting {
    JobPosting {
        job_role: "Backend Engineer".to_string(),
        job_requirements: "Rust, PostgreSQL".to_string(),
        job_location: "Tel Aviv".to_string(),
        job_description: "Own the job board API".to_string(),
        job_salary: Some(32000.0),
        name_of_company: "Acme".to_string(),
        job_owner: owner.to_string(),
        job_date: None,
        experience_required: None,
        job_type: Some("Full time".to_string()),
    }
}

pub(super) fn applicant(email: &str) -> ApplicantId {
    ApplicantId(email.to_string())
}

pub(super) async fn seeded_store(applicants: &[&str]) -> (Arc<InMemoryJobStore>, Job) {
    let store = Arc::new(InMemoryJobStore::default());
    let mut job = Job::from_posting(posting("owner@example.com"), chrono::Utc::now());
    job.applied_applicants = applicants.iter().map(|email| applicant(email)).collect();
    let stored = store.insert(job).await.expect("seed job");
    (store, stored)
}

pub(super) fn build_state(store: Arc<InMemoryJobStore>) -> JobRoutesState<InMemoryJobStore> {
    JobRoutesState::from_store(store)
}

pub(super) fn build_catalog(store: Arc<InMemoryJobStore>) -> JobCatalog<InMemoryJobStore> {
    JobCatalog::new(store)
}

pub(super) fn build_submissions<R: JobRepository + 'static>(
    store: Arc<R>,
) -> ApplicationSubmissionService<R> {
    ApplicationSubmissionService::new(store)
}

pub(super) fn router_with_store(store: Arc<InMemoryJobStore>) -> axum::Router {
    job_router(build_state(store))
}

/// Wraps the in-memory store and counts every call that reaches it.
#[derive(Default)]
pub(super) struct CountingStore {
    pub(super) inner: InMemoryJobStore,
    pub(super) calls: AtomicUsize,
}

impl CountingStore {
    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl JobRepository for CountingStore {
    async fn insert(&self, job: Job) -> Result<Job, RepositoryError> {
        self.touch();
        self.inner.insert(job).await
    }

    async fn find_by_id(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        self.touch();
        self.inner.find_by_id(id).await
    }

    async fn find(&self, filter: &JobFilter) -> Result<Vec<Job>, RepositoryError> {
        self.touch();
        self.inner.find(filter).await
    }

    async fn update(&self, id: &JobId, patch: JobPatch) -> Result<Option<Job>, RepositoryError> {
        self.touch();
        self.inner.update(id, patch).await
    }

    async fn delete(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        self.touch();
        self.inner.delete(id).await
    }

    async fn add_applicant_if_absent(
        &self,
        id: &JobId,
        applicant: &ApplicantId,
    ) -> Result<AddToSetOutcome, RepositoryError> {
        self.touch();
        self.inner.add_applicant_if_absent(id, applicant).await
    }
}

/// Store whose every call fails as if the database were offline.
pub(super) struct UnavailableStore;

#[async_trait]
impl JobRepository for UnavailableStore {
    async fn insert(&self, _job: Job) -> Result<Job, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn find_by_id(&self, _id: &JobId) -> Result<Option<Job>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn find(&self, _filter: &JobFilter) -> Result<Vec<Job>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn update(&self, _id: &JobId, _patch: JobPatch) -> Result<Option<Job>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn delete(&self, _id: &JobId) -> Result<Option<Job>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn add_applicant_if_absent(
        &self,
        _id: &JobId,
        _applicant: &ApplicantId,
    ) -> Result<AddToSetOutcome, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Reads succeed, but the conditional append times out.
pub(super) struct TimeoutOnAppendStore {
    pub(super) inner: InMemoryJobStore,
}

#[async_trait]
impl JobRepository for TimeoutOnAppendStore {
    async fn insert(&self, job: Job) -> Result<Job, RepositoryError> {
        self.inner.insert(job).await
    }

    async fn find_by_id(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        self.inner.find_by_id(id).await
    }

    async fn find(&self, filter: &JobFilter) -> Result<Vec<Job>, RepositoryError> {
        self.inner.find(filter).await
    }

    async fn update(&self, id: &JobId, patch: JobPatch) -> Result<Option<Job>, RepositoryError> {
        self.inner.update(id, patch).await
    }

    async fn delete(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        self.inner.delete(id).await
    }

    async fn add_applicant_if_absent(
        &self,
        _id: &JobId,
        _applicant: &ApplicantId,
    ) -> Result<AddToSetOutcome, RepositoryError> {
        Err(RepositoryError::Timeout)
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
