//! GetAssessmentHandler - Query handler for a single assessment.

use std::sync::Arc;

use crate::domain::assessment::{Assessment, AssessmentError};
use crate::domain::foundation::AssessmentId;
use crate::ports::AssessmentRepository;

/// Query to get an assessment by ID.
#[derive(Debug, Clone)]
pub struct GetAssessmentQuery {
    pub assessment_id: AssessmentId,
}

/// Handler for retrieving an assessment.
pub struct GetAssessmentHandler {
    assessments: Arc<dyn AssessmentRepository>,
}

impl GetAssessmentHandler {
    pub fn new(assessments: Arc<dyn AssessmentRepository>) -> Self {
        Self { assessments }
    }

    pub async fn handle(&self, query: GetAssessmentQuery) -> Result<Assessment, AssessmentError> {
        self.assessments
            .find_by_id(&query.assessment_id)
            .await?
            .ok_or(AssessmentError::NotFound(query.assessment_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{assessment_with_answers, seeded_store};

    #[tokio::test]
    async fn returns_stored_assessment() {
        let store = seeded_store().await;
        let saved = assessment_with_answers(&store, &[("q1", "q1_a2")]).await;
        let handler = GetAssessmentHandler::new(store);

        let found = handler
            .handle(GetAssessmentQuery {
                assessment_id: *saved.id(),
            })
            .await
            .unwrap();

        assert_eq!(found, saved);
    }

    #[tokio::test]
    async fn missing_assessment_is_not_found() {
        let handler = GetAssessmentHandler::new(seeded_store().await);
        let id = AssessmentId::new();

        let err = handler
            .handle(GetAssessmentQuery { assessment_id: id })
            .await
            .unwrap_err();

        assert_eq!(err, AssessmentError::NotFound(id));
    }
}
