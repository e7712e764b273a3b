//! HTTP adapters - REST API implementations.
//!
//! Each module area has its own HTTP adapter for endpoint exposure.
//! [`api_router`] assembles them; [`build_app`] adds the tower layers.

pub mod applications;
pub mod assessment;
pub mod catalog;
pub mod error;
pub mod state;

use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

// Re-export key types for convenience
pub use applications::applications_router;
pub use assessment::assessment_router;
pub use catalog::catalog_router;
pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

/// GET /api/health - Liveness probe
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "up" }))
}

/// All API routes bound to `state`, without middleware.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .merge(catalog_router())
        .merge(applications_router())
        .merge(assessment_router())
        .with_state(state)
}

/// The served application: API routes plus tracing, CORS and request timeout.
pub fn build_app(state: AppState, server: &ServerConfig) -> Router {
    api_router(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::response::Response;
    use serde_json::Value;

    use super::AppState;
    use crate::adapters::storage::{InMemoryStore, SampleData};

    pub async fn seeded_state() -> AppState {
        let store = InMemoryStore::new();
        store.seed(&SampleData::load().unwrap()).await;
        AppState::from_store(Arc::new(store))
    }

    pub fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        let body = match body {
            Some(json) => Body::from(json.to_string()),
            None => Body::empty(),
        };
        builder.body(body).unwrap()
    }

    pub async fn read_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}
