use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{IdentityError, RoleDirectory};

/// Router builder exposing role lookups and grants.
pub fn identity_router(directory: Arc<dyn RoleDirectory>) -> Router {
    Router::new()
        .route("/api/getRolesUrlParams/:user_id", get(roles_by_path_handler))
        .route("/api/getRolesQueryParams", get(roles_by_query_handler))
        .route("/api/grantRole/:user_id", post(grant_handler))
        .with_state(directory)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct UserQuery {
    #[serde(default, rename = "userId")]
    pub(crate) user_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GrantRequest {
    #[serde(rename = "roleId")]
    pub(crate) role_id: String,
}

pub(crate) async fn roles_by_path_handler(
    State(directory): State<Arc<dyn RoleDirectory>>,
    Path(user_id): Path<String>,
) -> Response {
    roles_response(directory.as_ref(), &user_id).await
}

pub(crate) async fn roles_by_query_handler(
    State(directory): State<Arc<dyn RoleDirectory>>,
    Query(query): Query<UserQuery>,
) -> Response {
    roles_response(directory.as_ref(), &query.user_id).await
}

pub(crate) async fn grant_handler(
    State(directory): State<Arc<dyn RoleDirectory>>,
    Path(user_id): Path<String>,
    Json(request): Json<GrantRequest>,
) -> Response {
    match directory.grant_role(&user_id, &request.role_id).await {
        Ok(granted) => (StatusCode::OK, Json(granted)).into_response(),
        Err(err) => error_response(err),
    }
}

async fn roles_response(directory: &dyn RoleDirectory, user_id: &str) -> Response {
    match directory.fetch_user_roles(user_id).await {
        Ok(roles) => (StatusCode::OK, Json(roles)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: IdentityError) -> Response {
    let status = match err {
        IdentityError::BlankUser | IdentityError::BlankRole => StatusCode::BAD_REQUEST,
        IdentityError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        IdentityError::InvalidBaseUrl(_)
        | IdentityError::UnexpectedStatus(_)
        | IdentityError::Transport(_) => {
            let body = Json(json!({ "message": "An error occurred." }));
            return (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
        }
    };

    let body = Json(json!({ "error": err.to_string() }));
    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::domain::{DisabledRoleDirectory, Role};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request};
    use serde_json::Value;
    use tower::ServiceExt;

    struct FixedDirectory;

    #[async_trait]
    impl RoleDirectory for FixedDirectory {
        async fn fetch_user_roles(&self, user_id: &str) -> Result<Vec<Role>, IdentityError> {
            match user_id.trim() {
                "" => Err(IdentityError::BlankUser),
                "locked" => Err(IdentityError::UnexpectedStatus(403)),
                _ => Ok(vec![Role {
                    id: "rol_1".to_string(),
                    name: "employer".to_string(),
                    description: None,
                }]),
            }
        }

        async fn grant_role(&self, _user_id: &str, role_id: &str) -> Result<bool, IdentityError> {
            Ok(role_id == "rol_1")
        }
    }

    async fn read_json_body(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).expect("request")
    }

    #[tokio::test]
    async fn path_and_query_lookups_return_roles() {
        let router = identity_router(Arc::new(FixedDirectory));

        for uri in [
            "/api/getRolesUrlParams/user-1",
            "/api/getRolesQueryParams?userId=user-1",
        ] {
            let response = router.clone().oneshot(get(uri)).await.expect("route");
            assert_eq!(response.status(), StatusCode::OK);
            let roles = read_json_body(response).await;
            assert_eq!(roles[0]["name"], json!("employer"));
        }
    }

    #[tokio::test]
    async fn upstream_rejection_reports_generic_error() {
        let router = identity_router(Arc::new(FixedDirectory));

        for uri in [
            "/api/getRolesUrlParams/locked",
            "/api/getRolesQueryParams?userId=locked",
        ] {
            let response = router.clone().oneshot(get(uri)).await.expect("route");
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(
                read_json_body(response).await,
                json!({ "message": "An error occurred." })
            );
        }
    }

    #[tokio::test]
    async fn missing_query_user_is_bad_request() {
        let router = identity_router(Arc::new(FixedDirectory));

        let response = router
            .oneshot(get("/api/getRolesQueryParams"))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn grant_returns_boolean() {
        let router = identity_router(Arc::new(FixedDirectory));

        let body = json!({ "roleId": "rol_1" }).to_string();
        let request = Request::post("/api/grantRole/user-1")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .expect("request builds");
        let response = router.oneshot(request).await.expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json_body(response).await, json!(true));
    }

    #[tokio::test]
    async fn disabled_directory_is_unavailable() {
        let router = identity_router(Arc::new(DisabledRoleDirectory));

        let response = router
            .oneshot(get("/api/getRolesUrlParams/user-1"))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
