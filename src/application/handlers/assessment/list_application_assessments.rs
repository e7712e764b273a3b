//! ListApplicationAssessmentsHandler - Query handler for an application's assessments.

use std::sync::Arc;

use crate::domain::assessment::{Assessment, AssessmentError};
use crate::domain::foundation::ApplicationId;
use crate::ports::{ApplicationRepository, AssessmentRepository};

/// Query for every assessment of one application, oldest first.
#[derive(Debug, Clone)]
pub struct ListApplicationAssessmentsQuery {
    pub application_id: ApplicationId,
}

pub struct ListApplicationAssessmentsHandler {
    applications: Arc<dyn ApplicationRepository>,
    assessments: Arc<dyn AssessmentRepository>,
}

impl ListApplicationAssessmentsHandler {
    pub fn new(
        applications: Arc<dyn ApplicationRepository>,
        assessments: Arc<dyn AssessmentRepository>,
    ) -> Self {
        Self {
            applications,
            assessments,
        }
    }

    pub async fn handle(
        &self,
        query: ListApplicationAssessmentsQuery,
    ) -> Result<Vec<Assessment>, AssessmentError> {
        if self
            .applications
            .find_by_id(&query.application_id)
            .await?
            .is_none()
        {
            return Err(AssessmentError::ApplicationNotFound(query.application_id));
        }

        Ok(self
            .assessments
            .find_by_application(&query.application_id)
            .await?)
    }
}
