use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ApplicationResult, JobPatch, JobPosting};
use super::repository::JobRepository;
use super::service::{CatalogError, JobCatalog};
use super::submission::{ApplicationSubmissionService, SubmissionError};

/// Shared handles for the job routes.
pub struct JobRoutesState<R> {
    pub catalog: Arc<JobCatalog<R>>,
    pub submissions: Arc<ApplicationSubmissionService<R>>,
}

impl<R> Clone for JobRoutesState<R> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            submissions: Arc::clone(&self.submissions),
        }
    }
}

impl<R> JobRoutesState<R>
where
    R: JobRepository + 'static,
{
    /// Build catalog and submission services over one shared store handle.
    pub fn from_store(jobs: Arc<R>) -> Self {
        Self {
            catalog: Arc::new(JobCatalog::new(Arc::clone(&jobs))),
            submissions: Arc::new(ApplicationSubmissionService::new(jobs)),
        }
    }
}

/// Router builder exposing job posting, lookup, and application endpoints.
pub fn job_router<R>(state: JobRoutesState<R>) -> Router
where
    R: JobRepository + 'static,
{
    Router::new()
        .route("/api/employersJobs", post(create_handler::<R>))
        .route("/api/GetAllJobs", get(list_handler::<R>))
        .route("/api/GetJob/:job_id", get(get_handler::<R>))
        .route("/api/UpdateJob/:job_id", put(update_handler::<R>))
        .route("/api/DeleteJob", delete(delete_handler::<R>))
        .route("/api/countUserJobs/:user_email", get(count_handler::<R>))
        .route("/api/SubmitToJob", get(submit_compat_handler::<R>))
        .route("/api/jobs/:job_id/applications", post(submit_handler::<R>))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct JobIdQuery {
    #[serde(default, rename = "jobId")]
    pub(crate) job_id: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SubmitQuery {
    #[serde(default)]
    pub(crate) email: String,
    #[serde(default, rename = "jobId")]
    pub(crate) job_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApplicationRequest {
    pub(crate) email: String,
}

pub(crate) async fn create_handler<R>(
    State(state): State<JobRoutesState<R>>,
    Json(posting): Json<JobPosting>,
) -> Response
where
    R: JobRepository + 'static,
{
    match state.catalog.create(posting).await {
        Ok(job) => {
            let payload = json!({
                "message": "Job added successfully!",
                "result": job,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => catalog_error_response(err),
    }
}

pub(crate) async fn list_handler<R>(State(state): State<JobRoutesState<R>>) -> Response
where
    R: JobRepository + 'static,
{
    match state.catalog.list().await {
        Ok(jobs) => (StatusCode::OK, Json(jobs)).into_response(),
        Err(err) => catalog_error_response(err),
    }
}

pub(crate) async fn get_handler<R>(
    State(state): State<JobRoutesState<R>>,
    Path(job_id): Path<String>,
) -> Response
where
    R: JobRepository + 'static,
{
    match state.catalog.get(&job_id).await {
        Ok(Some(job)) => (StatusCode::OK, Json(job)).into_response(),
        Ok(None) => job_not_found(),
        Err(err) => catalog_error_response(err),
    }
}

pub(crate) async fn update_handler<R>(
    State(state): State<JobRoutesState<R>>,
    Path(job_id): Path<String>,
    Json(patch): Json<JobPatch>,
) -> Response
where
    R: JobRepository + 'static,
{
    match state.catalog.update(&job_id, patch).await {
        Ok(Some(job)) => (StatusCode::OK, Json(job)).into_response(),
        Ok(None) => job_not_found(),
        Err(err) => catalog_error_response(err),
    }
}

pub(crate) async fn delete_handler<R>(
    State(state): State<JobRoutesState<R>>,
    Query(query): Query<JobIdQuery>,
) -> Response
where
    R: JobRepository + 'static,
{
    match state.catalog.delete(&query.job_id).await {
        Ok(deleted) => (StatusCode::OK, Json(deleted)).into_response(),
        Err(err) => catalog_error_response(err),
    }
}

pub(crate) async fn count_handler<R>(
    State(state): State<JobRoutesState<R>>,
    Path(user_email): Path<String>,
) -> Response
where
    R: JobRepository + 'static,
{
    match state.catalog.count_by_owner(&user_email).await {
        Ok(count) => {
            let payload = json!({ "jobCount": count });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => catalog_error_response(err),
    }
}

/// Boolean contract: only `Submitted` maps to `true`.
pub(crate) async fn submit_compat_handler<R>(
    State(state): State<JobRoutesState<R>>,
    Query(query): Query<SubmitQuery>,
) -> Response
where
    R: JobRepository + 'static,
{
    match state.submissions.submit(&query.email, &query.job_id).await {
        Ok(result) => (StatusCode::OK, Json(result.accepted())).into_response(),
        Err(err) => submission_error_response(err),
    }
}

pub(crate) async fn submit_handler<R>(
    State(state): State<JobRoutesState<R>>,
    Path(job_id): Path<String>,
    Json(request): Json<ApplicationRequest>,
) -> Response
where
    R: JobRepository + 'static,
{
    match state.submissions.submit(&request.email, &job_id).await {
        Ok(result) => {
            let status = match result {
                ApplicationResult::Submitted => StatusCode::CREATED,
                ApplicationResult::AlreadyApplied => StatusCode::CONFLICT,
                ApplicationResult::JobNotFound => StatusCode::NOT_FOUND,
            };
            let payload = json!({ "outcome": result });
            (status, Json(payload)).into_response()
        }
        Err(err) => submission_error_response(err),
    }
}

fn job_not_found() -> Response {
    let payload = json!({ "message": "Job not found" });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}

fn catalog_error_response(err: CatalogError) -> Response {
    let status = match err {
        CatalogError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        CatalogError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = Json(json!({ "error": err.to_string() }));
    (status, body).into_response()
}

fn submission_error_response(err: SubmissionError) -> Response {
    let status = match err {
        SubmissionError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        SubmissionError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = Json(json!({ "error": err.to_string() }));
    (status, body).into_response()
}
