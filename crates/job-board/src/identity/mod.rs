//! Thin proxy to the identity provider's role-management API.

pub mod client;
pub mod domain;
pub mod router;

pub use client::ManagementApiClient;
pub use domain::{DisabledRoleDirectory, IdentityError, Role, RoleDirectory};
pub use router::identity_router;
