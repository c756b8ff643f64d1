use std::sync::Arc;

use tracing::{debug, info, warn};

use super::domain::{ApplicantId, ApplicationResult, InvalidArgument, JobId};
use super::repository::{AddToSetOutcome, JobRepository, RepositoryError};

/// Enforces "at most one application per applicant per job" while appending applicants.
///
/// The membership check on the fetched document is only a fast path. The decision is made by
/// the store's atomic add-to-set primitive, so concurrent submissions for the same pair
/// linearize: exactly one of them observes [`ApplicationResult::Submitted`].
pub struct ApplicationSubmissionService<R> {
    jobs: Arc<R>,
}

impl<R> ApplicationSubmissionService<R>
where
    R: JobRepository + 'static,
{
    pub fn new(jobs: Arc<R>) -> Self {
        Self { jobs }
    }

    pub async fn submit(
        &self,
        applicant: &str,
        job_id: &str,
    ) -> Result<ApplicationResult, SubmissionError> {
        let applicant = ApplicantId::parse(applicant)?;
        let job_id = JobId::parse(job_id)?;
        self.submit_parsed(&applicant, &job_id).await
    }

    pub async fn submit_parsed(
        &self,
        applicant: &ApplicantId,
        job_id: &JobId,
    ) -> Result<ApplicationResult, SubmissionError> {
        let job = match self.jobs.find_by_id(job_id).await {
            Ok(job) => job,
            Err(err) => {
                warn!(%job_id, error = %err, "job lookup failed during submission");
                return Err(err.into());
            }
        };

        let Some(job) = job else {
            debug!(%job_id, "submission targeted a missing job");
            return Ok(ApplicationResult::JobNotFound);
        };

        if job.has_applicant(applicant) {
            debug!(%job_id, %applicant, "applicant already applied");
            return Ok(ApplicationResult::AlreadyApplied);
        }

        let outcome = match self.jobs.add_applicant_if_absent(job_id, applicant).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(%job_id, error = %err, "applicant append failed");
                return Err(err.into());
            }
        };

        let result = match outcome {
            AddToSetOutcome::Added => {
                info!(%job_id, %applicant, "application submitted");
                ApplicationResult::Submitted
            }
            AddToSetOutcome::AlreadyPresent => {
                debug!(%job_id, %applicant, "concurrent submission already recorded");
                ApplicationResult::AlreadyApplied
            }
            AddToSetOutcome::MissingDocument => {
                debug!(%job_id, "job removed before the application was recorded");
                ApplicationResult::JobNotFound
            }
        };

        Ok(result)
    }
}

/// Faults raised by the submission workflow. Business outcomes live in [`ApplicationResult`].
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    #[error(transparent)]
    Store(#[from] RepositoryError),
}
