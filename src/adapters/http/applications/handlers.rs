//! HTTP handlers for application endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::dto::{ApplicationResponse, RegisterApplicationRequest};
use crate::adapters::http::assessment::dto::AssessmentResponse;
use crate::adapters::http::{ApiError, AppState};
use crate::application::handlers::{ListApplicationAssessmentsQuery, RegisterApplicationCommand};
use crate::domain::foundation::ApplicationId;

/// GET /api/applications - All applications
pub async fn list_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<ApplicationResponse>>, ApiError> {
    let applications = state.list_applications_handler().handle().await?;
    Ok(Json(applications.into_iter().map(Into::into).collect()))
}

/// POST /api/applications - Register or replace an application
pub async fn register_application(
    State(state): State<AppState>,
    payload: Result<Json<RegisterApplicationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let cmd = RegisterApplicationCommand {
        id: request.id,
        name: request.name,
        description: request.description,
        tags: request.tags,
    };
    let application = state.register_application_handler().handle(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApplicationResponse::from(application)),
    ))
}

/// GET /api/applications/:id/assessments - Assessments of one application
pub async fn list_application_assessments(
    State(state): State<AppState>,
    Path(application_id): Path<String>,
) -> Result<Json<Vec<AssessmentResponse>>, ApiError> {
    let application_id = ApplicationId::new(application_id.as_str())
        .map_err(|_| ApiError::invalid_id("application", &application_id))?;

    let assessments = state
        .list_application_assessments_handler()
        .handle(ListApplicationAssessmentsQuery { application_id })
        .await?;

    Ok(Json(assessments.iter().map(AssessmentResponse::from).collect()))
}
