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

use super::domain::{ResumeDraft, ResumePatch};
use super::repository::ResumeRepository;
use super::service::{ResumeService, ResumeServiceError};
use crate::jobs::RepositoryError;

/// Router builder exposing resume CRUD endpoints.
pub fn resume_router<R>(service: Arc<ResumeService<R>>) -> Router
where
    R: ResumeRepository + 'static,
{
    Router::new()
        .route("/api/resume", post(create_handler::<R>))
        .route("/api/getAllResumes", get(list_handler::<R>))
        .route("/api/getAllResumesFiltered", get(filtered_handler::<R>))
        .route("/api/checkExistingResume", get(check_handler::<R>))
        .route("/api/editResume", put(edit_handler::<R>))
        .route("/api/deleteResume/:user_email", delete(delete_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct EmailQuery {
    #[serde(default, rename = "userEmail")]
    pub(crate) user_email: String,
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<ResumeService<R>>>,
    Json(draft): Json<ResumeDraft>,
) -> Response
where
    R: ResumeRepository + 'static,
{
    match service.create(draft).await {
        Ok(resume) => (StatusCode::OK, Json(resume)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<ResumeService<R>>>) -> Response
where
    R: ResumeRepository + 'static,
{
    match service.list().await {
        Ok(resumes) => (StatusCode::OK, Json(resumes)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn filtered_handler<R>(
    State(service): State<Arc<ResumeService<R>>>,
    Query(query): Query<EmailQuery>,
) -> Response
where
    R: ResumeRepository + 'static,
{
    match service.list_for(&query.user_email).await {
        Ok(resumes) => (StatusCode::OK, Json(resumes)).into_response(),
        Err(err) => error_response(err),
    }
}

/// Returns the resume, or JSON `null` when the email has none.
pub(crate) async fn check_handler<R>(
    State(service): State<Arc<ResumeService<R>>>,
    Query(query): Query<EmailQuery>,
) -> Response
where
    R: ResumeRepository + 'static,
{
    match service.get(&query.user_email).await {
        Ok(resume) => (StatusCode::OK, Json(resume)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn edit_handler<R>(
    State(service): State<Arc<ResumeService<R>>>,
    Json(patch): Json<ResumePatch>,
) -> Response
where
    R: ResumeRepository + 'static,
{
    let email = patch.user_email.clone().unwrap_or_default();
    match service.update(&email, patch).await {
        Ok(resume) => (StatusCode::OK, Json(resume)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<ResumeService<R>>>,
    Path(user_email): Path<String>,
) -> Response
where
    R: ResumeRepository + 'static,
{
    match service.delete(&user_email).await {
        Ok(Some(_)) => {
            let payload = json!({ "message": "Resume deleted successfully" });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Ok(None) => {
            let payload = json!({ "message": "Resume not found" });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

fn error_response(err: ResumeServiceError) -> Response {
    let status = match err {
        ResumeServiceError::MissingEmail => StatusCode::BAD_REQUEST,
        ResumeServiceError::Store(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ResumeServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = Json(json!({ "error": err.to_string() }));
    (status, body).into_response()
}
