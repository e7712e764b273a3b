//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Assessment handlers
    CompleteAssessmentCommand, CompleteAssessmentHandler, CompleteAssessmentResult,
    GetAssessmentHandler, GetAssessmentQuery, GetReportHandler, GetReportQuery,
    ListApplicationAssessmentsHandler, ListApplicationAssessmentsQuery, PreviewScoreHandler,
    PreviewScoreQuery, SaveAnswerCommand, SaveAnswerHandler, SaveAnswerResult, ScorePreview,
    StartAssessmentCommand, StartAssessmentHandler,
    // Catalog and application handlers
    ListApplicationsHandler, ListQuestionsHandler, RegisterApplicationCommand,
    RegisterApplicationHandler,
};
