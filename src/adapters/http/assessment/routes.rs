//! Route configuration for assessment endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    complete_assessment, get_assessment, get_report, preview_score, save_answer,
    start_assessment,
};
use crate::adapters::http::AppState;

/// Creates the assessment router with all endpoints.
///
/// Routes:
/// - `POST /api/assessments` - Start an assessment
/// - `GET /api/assessments/:id` - Get an assessment
/// - `POST /api/assessments/:id/answers` - Save an answer
/// - `POST /api/assessments/:id/complete` - Complete and generate the report
/// - `GET /api/assessments/:id/report` - Get the generated report
/// - `GET /api/assessments/:id/score` - Live score preview
pub fn assessment_router() -> Router<AppState> {
    Router::new()
        .route("/api/assessments", post(start_assessment))
        .route("/api/assessments/:id", get(get_assessment))
        .route("/api/assessments/:id/answers", post(save_answer))
        .route("/api/assessments/:id/complete", post(complete_assessment))
        .route("/api/assessments/:id/report", get(get_report))
        .route("/api/assessments/:id/score", get(preview_score))
}
