use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Role as reported by the identity provider's management API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Read and grant roles for identity-provider users.
#[async_trait]
pub trait RoleDirectory: Send + Sync {
    async fn fetch_user_roles(&self, user_id: &str) -> Result<Vec<Role>, IdentityError>;

    /// `Ok(false)` when the provider refuses the grant (unknown user or role).
    async fn grant_role(&self, user_id: &str, role_id: &str) -> Result<bool, IdentityError>;
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("identity provider is not configured")]
    NotConfigured,
    #[error("identity provider base url '{0}' is not usable")]
    InvalidBaseUrl(String),
    #[error("user identifier must not be empty")]
    BlankUser,
    #[error("role identifier must not be empty")]
    BlankRole,
    #[error("identity provider answered with status {0}")]
    UnexpectedStatus(u16),
    #[error("identity provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Stand-in used when no management credentials are configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledRoleDirectory;

#[async_trait]
impl RoleDirectory for DisabledRoleDirectory {
    async fn fetch_user_roles(&self, _user_id: &str) -> Result<Vec<Role>, IdentityError> {
        Err(IdentityError::NotConfigured)
    }

    async fn grant_role(&self, _user_id: &str, _role_id: &str) -> Result<bool, IdentityError> {
        Err(IdentityError::NotConfigured)
    }
}
