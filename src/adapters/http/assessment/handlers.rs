//! HTTP handlers for assessment endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::dto::{
    AssessmentResponse, ReportResponse, SaveAnswerRequest, ScorePreviewResponse,
    StartAssessmentRequest, StatusResponse,
};
use crate::adapters::http::{ApiError, AppState};
use crate::application::handlers::{
    CompleteAssessmentCommand, GetAssessmentQuery, GetReportQuery, PreviewScoreQuery,
    SaveAnswerCommand, StartAssessmentCommand,
};
use crate::domain::foundation::{ApplicationId, AssessmentId, OptionId, QuestionId};

fn parse_assessment_id(raw: &str) -> Result<AssessmentId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_id("assessment", raw))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/assessments - Start an assessment
pub async fn start_assessment(
    State(state): State<AppState>,
    payload: Result<Json<StartAssessmentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let application_id = ApplicationId::new(request.application_id.as_str())
        .map_err(|_| ApiError::BadRequest("applicationId is required".to_string()))?;

    let assessment = state
        .start_assessment_handler()
        .handle(StartAssessmentCommand { application_id })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AssessmentResponse::from(&assessment)),
    ))
}

/// POST /api/assessments/:id/answers - Answer one question
pub async fn save_answer(
    State(state): State<AppState>,
    Path(assessment_id): Path<String>,
    payload: Result<Json<SaveAnswerRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Json(request) = payload?;
    let assessment_id = parse_assessment_id(&assessment_id)?;
    let question_id = QuestionId::new(request.question_id)
        .map_err(|_| ApiError::BadRequest("questionId is required".to_string()))?;
    let option_id = OptionId::new(request.option_id)
        .map_err(|_| ApiError::BadRequest("optionId is required".to_string()))?;

    state
        .save_answer_handler()
        .handle(SaveAnswerCommand {
            assessment_id,
            question_id,
            option_id,
        })
        .await?;

    Ok(Json(StatusResponse::success()))
}

/// POST /api/assessments/:id/complete - Complete and generate the report
pub async fn complete_assessment(
    State(state): State<AppState>,
    Path(assessment_id): Path<String>,
) -> Result<Json<ReportResponse>, ApiError> {
    let assessment_id = parse_assessment_id(&assessment_id)?;

    let result = state
        .complete_assessment_handler()
        .handle(CompleteAssessmentCommand { assessment_id })
        .await?;

    Ok(Json(result.report.into()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/assessments/:id - Assessment with its answers
pub async fn get_assessment(
    State(state): State<AppState>,
    Path(assessment_id): Path<String>,
) -> Result<Json<AssessmentResponse>, ApiError> {
    let assessment_id = parse_assessment_id(&assessment_id)?;

    let assessment = state
        .get_assessment_handler()
        .handle(GetAssessmentQuery { assessment_id })
        .await?;

    Ok(Json(AssessmentResponse::from(&assessment)))
}

/// GET /api/assessments/:id/report - Previously generated report
pub async fn get_report(
    State(state): State<AppState>,
    Path(assessment_id): Path<String>,
) -> Result<Json<ReportResponse>, ApiError> {
    let assessment_id = parse_assessment_id(&assessment_id)?;

    let report = state
        .get_report_handler()
        .handle(GetReportQuery { assessment_id })
        .await?;

    Ok(Json(report.into()))
}

/// GET /api/assessments/:id/score - Live score without persisting
pub async fn preview_score(
    State(state): State<AppState>,
    Path(assessment_id): Path<String>,
) -> Result<Json<ScorePreviewResponse>, ApiError> {
    let id = parse_assessment_id(&assessment_id)?;

    let preview = state
        .preview_score_handler()
        .handle(PreviewScoreQuery { assessment_id: id })
        .await?;

    Ok(Json(ScorePreviewResponse::new(id.to_string(), preview)))
}
