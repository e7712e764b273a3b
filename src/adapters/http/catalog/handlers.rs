//! HTTP handlers for the question catalog.

use axum::extract::State;
use axum::Json;

use super::dto::QuestionResponse;
use crate::adapters::http::{ApiError, AppState};

/// GET /api/questions - The full question catalog
pub async fn list_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuestionResponse>>, ApiError> {
    let questions = state.list_questions_handler().handle().await?;
    Ok(Json(questions.into_iter().map(Into::into).collect()))
}
