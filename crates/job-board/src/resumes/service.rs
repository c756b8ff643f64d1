use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{Resume, ResumeDraft, ResumePatch};
use super::repository::ResumeRepository;
use crate::jobs::RepositoryError;

/// Field-mapped CRUD over the resumes collection.
pub struct ResumeService<R> {
    resumes: Arc<R>,
}

impl<R> ResumeService<R>
where
    R: ResumeRepository + 'static,
{
    pub fn new(resumes: Arc<R>) -> Self {
        Self { resumes }
    }

    pub async fn create(&self, draft: ResumeDraft) -> Result<Resume, ResumeServiceError> {
        require_email(&draft.user_email)?;
        let resume = Resume::from_draft(draft, Utc::now());
        let stored = self.resumes.insert(resume).await?;
        info!(email = %stored.user_email, "resume created");
        Ok(stored)
    }

    pub async fn list(&self) -> Result<Vec<Resume>, ResumeServiceError> {
        Ok(self.resumes.list().await?)
    }

    /// Filtered listing; empty when the email has no resume.
    pub async fn list_for(&self, email: &str) -> Result<Vec<Resume>, ResumeServiceError> {
        Ok(self.get(email).await?.into_iter().collect())
    }

    pub async fn get(&self, email: &str) -> Result<Option<Resume>, ResumeServiceError> {
        let email = require_email(email)?;
        Ok(self.resumes.find_by_email(email).await?)
    }

    pub async fn update(
        &self,
        email: &str,
        patch: ResumePatch,
    ) -> Result<Option<Resume>, ResumeServiceError> {
        let email = require_email(email)?;
        let Some(mut resume) = self.resumes.find_by_email(email).await? else {
            return Ok(None);
        };

        resume.apply(patch, Utc::now());
        let updated = self.resumes.replace(resume).await?;
        if updated.is_some() {
            info!(%email, "resume updated");
        }
        Ok(updated)
    }

    pub async fn delete(&self, email: &str) -> Result<Option<Resume>, ResumeServiceError> {
        let email = require_email(email)?;
        let deleted = self.resumes.delete_by_email(email).await?;
        if deleted.is_some() {
            info!(%email, "resume deleted");
        }
        Ok(deleted)
    }
}

fn require_email(raw: &str) -> Result<&str, ResumeServiceError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(ResumeServiceError::MissingEmail);
    }
    Ok(email)
}

/// Error raised by the resume service.
#[derive(Debug, thiserror::Error)]
pub enum ResumeServiceError {
    #[error("userEmail must not be empty")]
    MissingEmail,
    #[error(transparent)]
    Store(#[from] RepositoryError),
}
