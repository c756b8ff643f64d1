//! Job board backend: job postings, resumes, application submission, and a thin proxy to the
//! identity provider's role-management API.

pub mod config;
pub mod error;
pub mod identity;
pub mod jobs;
pub mod resumes;
pub mod telemetry;
