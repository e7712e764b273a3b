//! Assessment command and query handlers.

mod complete_assessment;
mod get_assessment;
mod get_report;
mod list_application_assessments;
mod preview_score;
mod save_answer;
mod start_assessment;

pub use complete_assessment::{
    CompleteAssessmentCommand, CompleteAssessmentHandler, CompleteAssessmentResult,
};
pub use get_assessment::{GetAssessmentHandler, GetAssessmentQuery};
pub use get_report::{GetReportHandler, GetReportQuery};
pub use list_application_assessments::{
    ListApplicationAssessmentsHandler, ListApplicationAssessmentsQuery,
};
pub use preview_score::{PreviewScoreHandler, PreviewScoreQuery, ScorePreview};
pub use save_answer::{SaveAnswerCommand, SaveAnswerHandler, SaveAnswerResult};
pub use start_assessment::{StartAssessmentCommand, StartAssessmentHandler};
