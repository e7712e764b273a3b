//! Assessment-specific error types.

use thiserror::Error;

use crate::domain::foundation::{
    ApplicationId, AssessmentId, DomainError, ErrorCode, OptionId, QuestionId, ValidationError,
};

/// Errors surfaced by assessment commands and queries.
///
/// Every variant carries the identifiers involved so callers can log and
/// respond without re-deriving context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error("Assessment not found: {0}")]
    NotFound(AssessmentId),

    #[error("Application not found: {0}")]
    ApplicationNotFound(ApplicationId),

    #[error("Question not found: {0}")]
    QuestionNotFound(QuestionId),

    #[error("Option '{option_id}' not found for question '{question_id}'")]
    OptionNotFound {
        question_id: QuestionId,
        option_id: OptionId,
    },

    #[error("Assessment {0} is already completed")]
    AlreadyCompleted(AssessmentId),

    #[error("Report not found for assessment: {0}")]
    ReportNotFound(AssessmentId),

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl AssessmentError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AssessmentError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::NotFound(_) => ErrorCode::AssessmentNotFound,
            AssessmentError::ApplicationNotFound(_) => ErrorCode::ApplicationNotFound,
            AssessmentError::QuestionNotFound(_) => ErrorCode::QuestionNotFound,
            AssessmentError::OptionNotFound { .. } => ErrorCode::OptionNotFound,
            AssessmentError::AlreadyCompleted(_) => ErrorCode::AssessmentCompleted,
            AssessmentError::ReportNotFound(_) => ErrorCode::ReportNotFound,
            AssessmentError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AssessmentError::StorageUnavailable(_) => ErrorCode::StorageUnavailable,
            AssessmentError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl From<DomainError> for AssessmentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::StorageUnavailable => AssessmentError::StorageUnavailable(err.message),
            ErrorCode::ValidationFailed => AssessmentError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            ErrorCode::AssessmentNotFound => match err
                .detail("assessment_id")
                .and_then(|id| id.parse::<AssessmentId>().ok())
            {
                Some(id) => AssessmentError::NotFound(id),
                None => AssessmentError::Infrastructure(err.to_string()),
            },
            ErrorCode::AssessmentCompleted => match err
                .detail("assessment_id")
                .and_then(|id| id.parse::<AssessmentId>().ok())
            {
                Some(id) => AssessmentError::AlreadyCompleted(id),
                None => AssessmentError::Infrastructure(err.to_string()),
            },
            ErrorCode::OptionNotFound => {
                let question_id = err.detail("question_id").and_then(|q| QuestionId::new(q).ok());
                let option_id = err.detail("option_id").and_then(|o| OptionId::new(o).ok());
                match (question_id, option_id) {
                    (Some(question_id), Some(option_id)) => AssessmentError::OptionNotFound {
                        question_id,
                        option_id,
                    },
                    _ => AssessmentError::Infrastructure(err.to_string()),
                }
            }
            _ => AssessmentError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for AssessmentError {
    fn from(err: ValidationError) -> Self {
        AssessmentError::validation(err.field(), err.to_string())
    }
}
