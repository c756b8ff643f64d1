use crate::infra::{AppServices, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use job_board::identity::identity_router;
use job_board::jobs::job_router;
use job_board::resumes::resume_router;
use serde_json::json;

pub(crate) fn build_router(services: AppServices) -> Router {
    let AppServices {
        jobs,
        resumes,
        roles,
    } = services;

    job_router(jobs)
        .merge(resume_router(resumes))
        .merge(identity_router(roles))
        .route("/", get(root))
        .route("/api/test", get(test_endpoint))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn root() -> &'static str {
    "Hello, World!"
}

pub(crate) async fn test_endpoint() -> &'static str {
    "this is test 123"
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use job_board::identity::DisabledRoleDirectory;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(AppServices::in_memory(Arc::new(DisabledRoleDirectory)))
    }

    fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request builds"),
            None => builder.body(Body::empty()).expect("request builds"),
        }
    }

    async fn read_json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn root_greets() {
        let response = app()
            .oneshot(request("GET", "/", None))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn post_then_apply_through_merged_router() {
        let app = app();

        let posting = json!({
            "jobRole": "QA Engineer",
            "jobOwner": "owner@example.com",
            "nameOfCompany": "Acme",
        });
        let created = app
            .clone()
            .oneshot(request("POST", "/api/employersJobs", Some(posting)))
            .await
            .expect("route executes");
        let payload = read_json_body(created).await;
        let job_id = payload["result"]["_id"]
            .as_str()
            .expect("job id")
            .to_string();

        let uri = format!("/api/SubmitToJob?email=x%40example.com&jobId={job_id}");
        let first = app
            .clone()
            .oneshot(request("GET", &uri, None))
            .await
            .expect("route executes");
        assert_eq!(read_json_body(first).await, json!(true));

        let second = app
            .clone()
            .oneshot(request("GET", &uri, None))
            .await
            .expect("route executes");
        assert_eq!(read_json_body(second).await, json!(false));

        let all = app
            .oneshot(request("GET", "/api/GetAllJobs", None))
            .await
            .expect("route executes");
        assert_eq!(
            read_json_body(all).await[0]["appliedApplicants"],
            json!(["x@example.com"])
        );
    }

    #[tokio::test]
    async fn role_routes_answer_unavailable_without_credentials() {
        let response = app()
            .oneshot(request("GET", "/api/getRolesQueryParams?userId=user-1", None))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
