//! Route configuration for catalog endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::list_questions;
use crate::adapters::http::AppState;

/// Routes:
/// - `GET /api/questions` - List all questions
pub fn catalog_router() -> Router<AppState> {
    Router::new().route("/api/questions", get(list_questions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::testing::{read_json, request, seeded_state};
    use axum::http::{Method, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn lists_questions_with_options() {
        let app = catalog_router().with_state(seeded_state().await);

        let response = app
            .oneshot(request(Method::GET, "/api/questions", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 5);
        assert_eq!(body[0]["id"], "q1");
        assert_eq!(body[0]["weight"], 5);
        assert_eq!(body[0]["options"][0]["points"], 10);
    }
}
