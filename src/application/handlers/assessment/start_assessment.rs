//! StartAssessmentHandler - Command handler for starting an assessment.

use std::sync::Arc;

use crate::domain::assessment::{Assessment, AssessmentError};
use crate::domain::foundation::ApplicationId;
use crate::ports::{ApplicationRepository, AssessmentRepository};

/// Command to start an assessment for an application.
#[derive(Debug, Clone)]
pub struct StartAssessmentCommand {
    pub application_id: ApplicationId,
}

/// Handler for starting assessments.
pub struct StartAssessmentHandler {
    applications: Arc<dyn ApplicationRepository>,
    assessments: Arc<dyn AssessmentRepository>,
}

impl StartAssessmentHandler {
    pub fn new(
        applications: Arc<dyn ApplicationRepository>,
        assessments: Arc<dyn AssessmentRepository>,
    ) -> Self {
        Self {
            applications,
            assessments,
        }
    }

    pub async fn handle(&self, cmd: StartAssessmentCommand) -> Result<Assessment, AssessmentError> {
        // The application is only checked here; later operations trust the reference.
        if self
            .applications
            .find_by_id(&cmd.application_id)
            .await?
            .is_none()
        {
            return Err(AssessmentError::ApplicationNotFound(cmd.application_id));
        }

        let assessment = Assessment::start(cmd.application_id);
        self.assessments.save(&assessment).await?;

        tracing::info!(
            assessment_id = %assessment.id(),
            application_id = %assessment.application_id(),
            "Assessment started"
        );
        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{app_id, seeded_store, UnavailableStore};
    use crate::domain::assessment::AssessmentStatus;

    #[tokio::test]
    async fn starts_empty_in_progress_assessment() {
        let store = seeded_store().await;
        let handler = StartAssessmentHandler::new(store.clone(), store.clone());

        let assessment = handler
            .handle(StartAssessmentCommand {
                application_id: app_id("app1"),
            })
            .await
            .unwrap();

        assert_eq!(assessment.status(), AssessmentStatus::InProgress);
        assert!(assessment.answers().is_empty());
        let stored = AssessmentRepository::find_by_id(store.as_ref(), assessment.id())
            .await
            .unwrap();
        assert_eq!(stored, Some(assessment));
    }

    #[tokio::test]
    async fn unknown_application_is_rejected() {
        let store = seeded_store().await;
        let handler = StartAssessmentHandler::new(store.clone(), store);

        let err = handler
            .handle(StartAssessmentCommand {
                application_id: app_id("ghost"),
            })
            .await
            .unwrap_err();

        assert_eq!(err, AssessmentError::ApplicationNotFound(app_id("ghost")));
    }

    #[tokio::test]
    async fn save_failure_propagates() {
        let store = seeded_store().await;
        let handler = StartAssessmentHandler::new(store, Arc::new(UnavailableStore));

        let err = handler
            .handle(StartAssessmentCommand {
                application_id: app_id("app1"),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AssessmentError::StorageUnavailable(_)));
    }
}
