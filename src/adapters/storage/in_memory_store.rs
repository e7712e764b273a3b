//! In-Memory Store Adapter
//!
//! Keeps every record kind in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::SampleData;
use crate::domain::application::Application;
use crate::domain::assessment::Assessment;
use crate::domain::catalog::Question;
use crate::domain::foundation::{
    ApplicationId, AssessmentId, DomainError, ErrorCode, QuestionId,
};
use crate::domain::scoring::Report;
use crate::ports::{ApplicationRepository, AssessmentRepository, QuestionCatalog, ReportRepository};

/// In-memory storage for all record kinds.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    questions: Arc<RwLock<BTreeMap<QuestionId, Question>>>,
    applications: Arc<RwLock<BTreeMap<ApplicationId, Application>>>,
    assessments: Arc<RwLock<HashMap<AssessmentId, Assessment>>>,
    reports: Arc<RwLock<HashMap<AssessmentId, Report>>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the sample records when the question catalog is empty.
    ///
    /// Returns whether anything was loaded.
    pub async fn seed(&self, data: &SampleData) -> bool {
        let mut questions = self.questions.write().await;
        if !questions.is_empty() {
            return false;
        }
        questions.extend(data.questions.iter().map(|q| (q.id.clone(), q.clone())));

        let mut applications = self.applications.write().await;
        applications.extend(data.applications.iter().map(|a| (a.id.clone(), a.clone())));
        true
    }

    /// Adds or replaces a catalog question
    pub async fn insert_question(&self, question: Question) {
        self.questions
            .write()
            .await
            .insert(question.id.clone(), question);
    }

    /// Get the number of stored reports
    pub async fn report_count(&self) -> usize {
        self.reports.read().await.len()
    }
}

#[async_trait]
impl QuestionCatalog for InMemoryStore {
    async fn list_questions(&self) -> Result<Vec<Question>, DomainError> {
        Ok(self.questions.read().await.values().cloned().collect())
    }

    async fn find_question(&self, id: &QuestionId) -> Result<Option<Question>, DomainError> {
        Ok(self.questions.read().await.get(id).cloned())
    }
}

#[async_trait]
impl AssessmentRepository for InMemoryStore {
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError> {
        self.assessments
            .write()
            .await
            .insert(*assessment.id(), assessment.clone());
        Ok(())
    }

    async fn update(&self, assessment: &Assessment) -> Result<(), DomainError> {
        let mut assessments = self.assessments.write().await;
        match assessments.get_mut(assessment.id()) {
            Some(existing) => {
                *existing = assessment.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::AssessmentNotFound,
                format!("Assessment not found: {}", assessment.id()),
            )
            .with_detail("assessment_id", assessment.id().to_string())),
        }
    }

    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<Assessment>, DomainError> {
        Ok(self.assessments.read().await.get(id).cloned())
    }

    async fn find_by_application(
        &self,
        application_id: &ApplicationId,
    ) -> Result<Vec<Assessment>, DomainError> {
        let mut found: Vec<Assessment> = self
            .assessments
            .read()
            .await
            .values()
            .filter(|a| a.application_id() == application_id)
            .cloned()
            .collect();
        found.sort_by_key(|a| *a.created_at());
        Ok(found)
    }
}

#[async_trait]
impl ReportRepository for InMemoryStore {
    async fn save(&self, report: &Report) -> Result<(), DomainError> {
        self.reports
            .write()
            .await
            .insert(report.assessment_id, report.clone());
        Ok(())
    }

    async fn find_by_assessment(
        &self,
        assessment_id: &AssessmentId,
    ) -> Result<Option<Report>, DomainError> {
        Ok(self.reports.read().await.get(assessment_id).cloned())
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryStore {
    async fn save(&self, application: &Application) -> Result<(), DomainError> {
        self.applications
            .write()
            .await
            .insert(application.id.clone(), application.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ApplicationId) -> Result<Option<Application>, DomainError> {
        Ok(self.applications.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Application>, DomainError> {
        Ok(self.applications.read().await.values().cloned().collect())
    }
}
