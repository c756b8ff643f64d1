use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::json;
use tracing::{debug, warn};

use super::domain::{IdentityError, Role, RoleDirectory};
use crate::config::IdentityConfig;

/// HTTP client for the identity provider's management API (`/api/v2/users/{id}/roles`).
#[derive(Debug, Clone)]
pub struct ManagementApiClient {
    http: Client,
    base_url: Url,
    api_token: String,
}

impl ManagementApiClient {
    pub fn new(
        http: Client,
        base_url: &str,
        api_token: impl Into<String>,
    ) -> Result<Self, IdentityError> {
        let base_url = Url::parse(base_url)
            .map_err(|_| IdentityError::InvalidBaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(IdentityError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            http,
            base_url,
            api_token: api_token.into(),
        })
    }

    /// Build a client from configuration; `None` when credentials are absent.
    pub fn from_config(config: &IdentityConfig) -> Result<Option<Self>, IdentityError> {
        let (Some(base_url), Some(api_token)) = (&config.base_url, &config.api_token) else {
            return Ok(None);
        };

        let http = Client::builder().timeout(config.timeout).build()?;
        Self::new(http, base_url, api_token.clone()).map(Some)
    }

    fn user_roles_url(&self, user_id: &str) -> Result<Url, IdentityError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| IdentityError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["api", "v2", "users", user_id, "roles"]);
        Ok(url)
    }
}

#[async_trait]
impl RoleDirectory for ManagementApiClient {
    async fn fetch_user_roles(&self, user_id: &str) -> Result<Vec<Role>, IdentityError> {
        let user_id = require(user_id, IdentityError::BlankUser)?;
        let url = self.user_roles_url(user_id)?;

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|err| {
                warn!(%user_id, error = %err, "role lookup request failed");
                err
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%user_id, status = status.as_u16(), "role lookup rejected");
            return Err(IdentityError::UnexpectedStatus(status.as_u16()));
        }

        let roles: Vec<Role> = response.json().await?;
        debug!(%user_id, count = roles.len(), "fetched user roles");
        Ok(roles)
    }

    async fn grant_role(&self, user_id: &str, role_id: &str) -> Result<bool, IdentityError> {
        let user_id = require(user_id, IdentityError::BlankUser)?;
        let role_id = require(role_id, IdentityError::BlankRole)?;
        let url = self.user_roles_url(user_id)?;

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_token)
            .json(&json!({ "roles": [role_id] }))
            .send()
            .await
            .map_err(|err| {
                warn!(%user_id, %role_id, error = %err, "role grant request failed");
                err
            })?;

        match response.status() {
            status if status.is_success() => {
                debug!(%user_id, %role_id, "role granted");
                Ok(true)
            }
            status if status.is_client_error() && status != StatusCode::TOO_MANY_REQUESTS => {
                warn!(%user_id, %role_id, status = status.as_u16(), "role grant refused");
                Ok(false)
            }
            status => Err(IdentityError::UnexpectedStatus(status.as_u16())),
        }
    }
}

fn require(value: &str, blank: IdentityError) -> Result<&str, IdentityError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(blank)
    } else {
        Ok(trimmed)
    }
}
