//! Shared fixtures for handler tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::adapters::storage::{InMemoryStore, SampleData};
use crate::domain::application::Application;
use crate::domain::assessment::Assessment;
use crate::domain::catalog::Question;
use crate::domain::foundation::{
    ApplicationId, AssessmentId, DomainError, OptionId, QuestionId,
};
use crate::domain::scoring::Report;
use crate::ports::{ApplicationRepository, AssessmentRepository, QuestionCatalog, ReportRepository};

pub fn qid(id: &str) -> QuestionId {
    QuestionId::new(id).unwrap()
}

pub fn oid(id: &str) -> OptionId {
    OptionId::new(id).unwrap()
}

pub fn app_id(id: &str) -> ApplicationId {
    ApplicationId::new(id).unwrap()
}

/// Store holding the sample catalog and `app1`.
pub async fn seeded_store() -> Arc<InMemoryStore> {
    let store = InMemoryStore::new();
    store.seed(&SampleData::load().unwrap()).await;
    Arc::new(store)
}

/// Saves an in-progress assessment for `app1` with the given answers.
pub async fn assessment_with_answers(
    store: &InMemoryStore,
    answers: &[(&str, &str)],
) -> Assessment {
    let mut assessment = Assessment::start(app_id("app1"));
    for (question, option) in answers {
        let question = store.find_question(&qid(question)).await.unwrap().unwrap();
        assessment.record_answer(&question, oid(option)).unwrap();
    }
    AssessmentRepository::save(store, &assessment).await.unwrap();
    assessment
}

pub fn sample_application(id: &str) -> Application {
    Application::new(app_id(id), "Sample", "", BTreeMap::new()).unwrap()
}

/// Every port operation fails as if the disk were gone.
pub struct UnavailableStore;

fn unavailable() -> DomainError {
    DomainError::storage("Simulated storage outage")
}

#[async_trait]
impl QuestionCatalog for UnavailableStore {
    async fn list_questions(&self) -> Result<Vec<Question>, DomainError> {
        Err(unavailable())
    }

    async fn find_question(&self, _id: &QuestionId) -> Result<Option<Question>, DomainError> {
        Err(unavailable())
    }
}

#[async_trait]
impl AssessmentRepository for UnavailableStore {
    async fn save(&self, _assessment: &Assessment) -> Result<(), DomainError> {
        Err(unavailable())
    }

    async fn update(&self, _assessment: &Assessment) -> Result<(), DomainError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: &AssessmentId) -> Result<Option<Assessment>, DomainError> {
        Err(unavailable())
    }

    async fn find_by_application(
        &self,
        _application_id: &ApplicationId,
    ) -> Result<Vec<Assessment>, DomainError> {
        Err(unavailable())
    }
}

#[async_trait]
impl ReportRepository for UnavailableStore {
    async fn save(&self, _report: &Report) -> Result<(), DomainError> {
        Err(unavailable())
    }

    async fn find_by_assessment(
        &self,
        _assessment_id: &AssessmentId,
    ) -> Result<Option<Report>, DomainError> {
        Err(unavailable())
    }
}

#[async_trait]
impl ApplicationRepository for UnavailableStore {
    async fn save(&self, _application: &Application) -> Result<(), DomainError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: &ApplicationId) -> Result<Option<Application>, DomainError> {
        Err(unavailable())
    }

    async fn list(&self) -> Result<Vec<Application>, DomainError> {
        Err(unavailable())
    }
}
