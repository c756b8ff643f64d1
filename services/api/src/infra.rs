use job_board::config::IdentityConfig;
use job_board::error::AppError;
use job_board::identity::{DisabledRoleDirectory, ManagementApiClient, RoleDirectory};
use job_board::jobs::{InMemoryJobStore, JobRoutesState};
use job_board::resumes::{InMemoryResumeStore, ResumeService};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Service handles wired over the process-owned stores.
#[derive(Clone)]
pub(crate) struct AppServices {
    pub(crate) jobs: JobRoutesState<InMemoryJobStore>,
    pub(crate) resumes: Arc<ResumeService<InMemoryResumeStore>>,
    pub(crate) roles: Arc<dyn RoleDirectory>,
}

impl AppServices {
    pub(crate) fn in_memory(roles: Arc<dyn RoleDirectory>) -> Self {
        let job_store = Arc::new(InMemoryJobStore::default());
        let resume_store = Arc::new(InMemoryResumeStore::default());

        Self {
            jobs: JobRoutesState::from_store(job_store),
            resumes: Arc::new(ResumeService::new(resume_store)),
            roles,
        }
    }
}

pub(crate) fn role_directory(config: &IdentityConfig) -> Result<Arc<dyn RoleDirectory>, AppError> {
    match ManagementApiClient::from_config(config)? {
        Some(client) => {
            info!(base_url = ?config.base_url, "identity provider role directory enabled");
            Ok(Arc::new(client))
        }
        None => {
            warn!("IDP_BASE_URL/IDP_API_TOKEN not set; role endpoints will answer 503");
            Ok(Arc::new(DisabledRoleDirectory))
        }
    }
}
