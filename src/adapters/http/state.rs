//! Shared application state for all HTTP routes.

use std::sync::Arc;

use crate::application::handlers::{
    CompleteAssessmentHandler, GetAssessmentHandler, GetReportHandler,
    ListApplicationAssessmentsHandler, ListApplicationsHandler, ListQuestionsHandler,
    PreviewScoreHandler, RegisterApplicationHandler, SaveAnswerHandler, StartAssessmentHandler,
};
use crate::ports::{ApplicationRepository, AssessmentRepository, QuestionCatalog, ReportRepository};

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct AppState {
    pub questions: Arc<dyn QuestionCatalog>,
    pub assessments: Arc<dyn AssessmentRepository>,
    pub reports: Arc<dyn ReportRepository>,
    pub applications: Arc<dyn ApplicationRepository>,
}

impl AppState {
    /// State backed by one store implementing every port.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: QuestionCatalog + AssessmentRepository + ReportRepository + ApplicationRepository + 'static,
    {
        Self {
            questions: store.clone(),
            assessments: store.clone(),
            reports: store.clone(),
            applications: store,
        }
    }

    pub fn list_questions_handler(&self) -> ListQuestionsHandler {
        ListQuestionsHandler::new(self.questions.clone())
    }

    pub fn start_assessment_handler(&self) -> StartAssessmentHandler {
        StartAssessmentHandler::new(self.applications.clone(), self.assessments.clone())
    }

    pub fn get_assessment_handler(&self) -> GetAssessmentHandler {
        GetAssessmentHandler::new(self.assessments.clone())
    }

    pub fn save_answer_handler(&self) -> SaveAnswerHandler {
        SaveAnswerHandler::new(self.assessments.clone(), self.questions.clone())
    }

    pub fn complete_assessment_handler(&self) -> CompleteAssessmentHandler {
        CompleteAssessmentHandler::new(
            self.assessments.clone(),
            self.questions.clone(),
            self.reports.clone(),
        )
    }

    pub fn get_report_handler(&self) -> GetReportHandler {
        GetReportHandler::new(self.reports.clone())
    }

    pub fn preview_score_handler(&self) -> PreviewScoreHandler {
        PreviewScoreHandler::new(self.assessments.clone(), self.questions.clone())
    }

    pub fn list_applications_handler(&self) -> ListApplicationsHandler {
        ListApplicationsHandler::new(self.applications.clone())
    }

    pub fn register_application_handler(&self) -> RegisterApplicationHandler {
        RegisterApplicationHandler::new(self.applications.clone())
    }

    pub fn list_application_assessments_handler(&self) -> ListApplicationAssessmentsHandler {
        ListApplicationAssessmentsHandler::new(self.applications.clone(), self.assessments.clone())
    }
}
