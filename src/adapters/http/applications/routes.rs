//! Route configuration for application endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{list_application_assessments, list_applications, register_application};
use crate::adapters::http::AppState;

/// Creates the application router.
///
/// Routes:
/// - `GET /api/applications` - List applications
/// - `POST /api/applications` - Register an application
/// - `GET /api/applications/:id/assessments` - List an application's assessments
pub fn applications_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/applications",
            get(list_applications).post(register_application),
        )
        .route(
            "/api/applications/:id/assessments",
            get(list_application_assessments),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::testing::{read_json, request, seeded_state};
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn lists_sample_application() {
        let app = applications_router().with_state(seeded_state().await);

        let response = app
            .oneshot(request(Method::GET, "/api/applications", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body[0]["id"], "app1");
        assert_eq!(body[0]["tags"]["language"], "Java");
    }

    #[tokio::test]
    async fn registers_application() {
        let app = applications_router().with_state(seeded_state().await);

        let response = app
            .clone()
            .oneshot(request(
                Method::POST,
                "/api/applications",
                Some(json!({"id": "billing", "name": "Billing", "tags": {"language": "Go"}})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let listed = read_json(
            app.oneshot(request(Method::GET, "/api/applications", None))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(listed.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn blank_name_is_bad_request() {
        let app = applications_router().with_state(seeded_state().await);

        let response = app
            .oneshot(request(
                Method::POST,
                "/api/applications",
                Some(json!({"id": "billing", "name": " "})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn assessments_of_unknown_application_are_not_found() {
        let app = applications_router().with_state(seeded_state().await);

        let response = app
            .oneshot(request(Method::GET, "/api/applications/ghost/assessments", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(read_json(response).await["code"], "APPLICATION_NOT_FOUND");
    }

    #[tokio::test]
    async fn register_without_name_is_bad_request() {
        let app = applications_router().with_state(seeded_state().await);

        let response = app
            .oneshot(request(
                Method::POST,
                "/api/applications",
                Some(json!({"id": "billing"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["code"], "BAD_REQUEST");
    }
}
