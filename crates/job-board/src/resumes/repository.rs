use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use super::domain::Resume;
use crate::jobs::RepositoryError;

/// Document-store contract for the resumes collection, keyed by email.
#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// Fails with [`RepositoryError::Conflict`] when the email already has a resume.
    async fn insert(&self, resume: Resume) -> Result<Resume, RepositoryError>;
    async fn list(&self) -> Result<Vec<Resume>, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Resume>, RepositoryError>;
    async fn replace(&self, resume: Resume) -> Result<Option<Resume>, RepositoryError>;
    async fn delete_by_email(&self, email: &str) -> Result<Option<Resume>, RepositoryError>;
}

#[derive(Default, Clone)]
pub struct InMemoryResumeStore {
    documents: Arc<Mutex<Vec<Resume>>>,
}

impl InMemoryResumeStore {
    fn documents(&self) -> Result<MutexGuard<'_, Vec<Resume>>, RepositoryError> {
        self.documents
            .lock()
            .map_err(|_| RepositoryError::Unavailable("resume store lock poisoned".to_string()))
    }
}

#[async_trait]
impl ResumeRepository for InMemoryResumeStore {
    async fn insert(&self, resume: Resume) -> Result<Resume, RepositoryError> {
        let mut documents = self.documents()?;
        if documents
            .iter()
            .any(|existing| existing.user_email == resume.user_email)
        {
            return Err(RepositoryError::Conflict);
        }
        documents.push(resume.clone());
        Ok(resume)
    }

    async fn list(&self) -> Result<Vec<Resume>, RepositoryError> {
        Ok(self.documents()?.clone())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Resume>, RepositoryError> {
        let documents = self.documents()?;
        Ok(documents
            .iter()
            .find(|resume| resume.user_email == email)
            .cloned())
    }

    async fn replace(&self, resume: Resume) -> Result<Option<Resume>, RepositoryError> {
        let mut documents = self.documents()?;
        Ok(documents
            .iter_mut()
            .find(|existing| existing.user_email == resume.user_email)
            .map(|existing| {
                *existing = resume.clone();
                resume
            }))
    }

    async fn delete_by_email(&self, email: &str) -> Result<Option<Resume>, RepositoryError> {
        let mut documents = self.documents()?;
        let position = documents
            .iter()
            .position(|resume| resume.user_email == email);
        Ok(position.map(|index| documents.remove(index)))
    }
}
