//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod applications;
pub mod assessment;
pub mod catalog;

#[cfg(test)]
pub(crate) mod test_support;

pub use applications::{
    ListApplicationsHandler, RegisterApplicationCommand, RegisterApplicationHandler,
};
pub use assessment::{
    CompleteAssessmentCommand, CompleteAssessmentHandler, CompleteAssessmentResult,
    GetAssessmentHandler, GetAssessmentQuery, GetReportHandler, GetReportQuery,
    ListApplicationAssessmentsHandler, ListApplicationAssessmentsQuery, PreviewScoreHandler,
    PreviewScoreQuery, SaveAnswerCommand, SaveAnswerHandler, SaveAnswerResult, ScorePreview,
    StartAssessmentCommand, StartAssessmentHandler,
};
pub use catalog::ListQuestionsHandler;
