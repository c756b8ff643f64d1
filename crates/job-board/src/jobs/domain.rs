use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Store-assigned identifier for a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a caller-supplied identifier. Anything that is not a UUID is malformed.
    pub fn parse(raw: &str) -> Result<Self, InvalidArgument> {
        Uuid::parse_str(raw.trim())
            .map(Self)
            .map_err(|_| InvalidArgument::MalformedJobId(raw.to_string()))
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Applicant identifier, typically the applicant's email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicantId(pub String);

impl ApplicantId {
    pub fn parse(raw: &str) -> Result<Self, InvalidArgument> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidArgument::BlankApplicant);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier or argument rejected before any store access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgument {
    #[error("malformed job identifier '{0}'")]
    MalformedJobId(String),
    #[error("applicant identifier must not be empty")]
    BlankApplicant,
    #[error("owner identifier must not be empty")]
    BlankOwner,
}

/// Experience requirement as posted: either a yes/no flag or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExperienceRequirement {
    Flag(bool),
    Text(String),
}

/// A posted position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: JobId,
    pub job_role: String,
    pub job_requirements: String,
    pub job_location: String,
    pub job_description: String,
    pub job_salary: Option<f64>,
    pub name_of_company: String,
    pub job_owner: String,
    pub job_date: DateTime<Utc>,
    pub experience_required: Option<ExperienceRequirement>,
    pub job_type: Option<String>,
    /// Ordered, duplicate-free. Only the submission workflow appends here.
    pub applied_applicants: Vec<ApplicantId>,
}

impl Job {
    /// Materialize a posting into a stored document with a fresh identifier.
    pub fn from_posting(posting: JobPosting, posted_at: DateTime<Utc>) -> Self {
        Self {
            id: JobId::new(),
            job_role: posting.job_role,
            job_requirements: posting.job_requirements,
            job_location: posting.job_location,
            job_description: posting.job_description,
            job_salary: posting.job_salary,
            name_of_company: posting.name_of_company,
            job_owner: posting.job_owner,
            job_date: posting.job_date.unwrap_or(posted_at),
            experience_required: posting.experience_required,
            job_type: posting.job_type,
            applied_applicants: Vec::new(),
        }
    }

    pub fn has_applicant(&self, applicant: &ApplicantId) -> bool {
        self.applied_applicants.contains(applicant)
    }

    /// Overwrite the fields present in `patch`; the applicant list is never touched.
    pub fn apply(&mut self, patch: JobPatch) {
        let JobPatch {
            job_role,
            job_requirements,
            job_location,
            job_description,
            job_salary,
            name_of_company,
            job_owner,
            job_date,
            experience_required,
            job_type,
        } = patch;

        if let Some(value) = job_role {
            self.job_role = value;
        }
        if let Some(value) = job_requirements {
            self.job_requirements = value;
        }
        if let Some(value) = job_location {
            self.job_location = value;
        }
        if let Some(value) = job_description {
            self.job_description = value;
        }
        if let Some(value) = job_salary {
            self.job_salary = Some(value);
        }
        if let Some(value) = name_of_company {
            self.name_of_company = value;
        }
        if let Some(value) = job_owner {
            self.job_owner = value;
        }
        if let Some(value) = job_date {
            self.job_date = value;
        }
        if let Some(value) = experience_required {
            self.experience_required = Some(value);
        }
        if let Some(value) = job_type {
            self.job_type = Some(value);
        }
    }
}

/// Payload accepted when an employer posts a job. Unknown fields, including any attempt to
/// seed `appliedApplicants`, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPosting {
    pub job_role: String,
    pub job_requirements: String,
    pub job_location: String,
    pub job_description: String,
    pub job_salary: Option<f64>,
    pub name_of_company: String,
    pub job_owner: String,
    pub job_date: Option<DateTime<Utc>>,
    pub experience_required: Option<ExperienceRequirement>,
    pub job_type: Option<String>,
}

/// Partial update for an existing job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPatch {
    pub job_role: Option<String>,
    pub job_requirements: Option<String>,
    pub job_location: Option<String>,
    pub job_description: Option<String>,
    pub job_salary: Option<f64>,
    pub name_of_company: Option<String>,
    pub job_owner: Option<String>,
    pub job_date: Option<DateTime<Utc>>,
    pub experience_required: Option<ExperienceRequirement>,
    pub job_type: Option<String>,
}

/// Field filter for job lookups. Empty filter matches every job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub owner: Option<String>,
}

impl JobFilter {
    pub fn owned_by(owner: impl Into<String>) -> Self {
        Self {
            owner: Some(owner.into()),
        }
    }

    pub fn matches(&self, job: &Job) -> bool {
        match &self.owner {
            Some(owner) => job.job_owner == *owner,
            None => true,
        }
    }
}

/// Result of a submission attempt. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationResult {
    Submitted,
    AlreadyApplied,
    JobNotFound,
}

impl ApplicationResult {
    /// Boolean collapse used by the compatibility endpoint.
    pub fn accepted(self) -> bool {
        matches!(self, ApplicationResult::Submitted)
    }
}
