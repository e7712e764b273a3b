//! SaveAnswerHandler - Command handler for recording one answer.

use std::sync::Arc;

use crate::domain::assessment::{Assessment, AssessmentError};
use crate::domain::foundation::{AssessmentId, OptionId, QuestionId};
use crate::ports::{AssessmentRepository, QuestionCatalog};

/// Command to select an option for a question.
#[derive(Debug, Clone)]
pub struct SaveAnswerCommand {
    pub assessment_id: AssessmentId,
    pub question_id: QuestionId,
    pub option_id: OptionId,
}

/// Result of a saved answer.
#[derive(Debug, Clone)]
pub struct SaveAnswerResult {
    pub assessment: Assessment,
    /// Option that was selected before, if the question was re-answered.
    pub replaced: Option<OptionId>,
}

/// Handler for saving answers.
pub struct SaveAnswerHandler {
    assessments: Arc<dyn AssessmentRepository>,
    catalog: Arc<dyn QuestionCatalog>,
}

impl SaveAnswerHandler {
    pub fn new(
        assessments: Arc<dyn AssessmentRepository>,
        catalog: Arc<dyn QuestionCatalog>,
    ) -> Self {
        Self {
            assessments,
            catalog,
        }
    }

    pub async fn handle(&self, cmd: SaveAnswerCommand) -> Result<SaveAnswerResult, AssessmentError> {
        let mut assessment = self
            .assessments
            .find_by_id(&cmd.assessment_id)
            .await?
            .ok_or(AssessmentError::NotFound(cmd.assessment_id))?;

        if assessment.is_completed() {
            return Err(AssessmentError::AlreadyCompleted(cmd.assessment_id));
        }

        let question = self
            .catalog
            .find_question(&cmd.question_id)
            .await?
            .ok_or_else(|| AssessmentError::QuestionNotFound(cmd.question_id.clone()))?;

        let replaced = assessment.record_answer(&question, cmd.option_id.clone())?;
        self.assessments.update(&assessment).await?;

        tracing::debug!(
            assessment_id = %cmd.assessment_id,
            question_id = %cmd.question_id,
            option_id = %cmd.option_id,
            replaced = replaced.is_some(),
            "Answer saved"
        );
        Ok(SaveAnswerResult {
            assessment,
            replaced,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{
        assessment_with_answers, oid, qid, seeded_store,
    };
    use crate::adapters::storage::InMemoryStore;

    fn command(assessment_id: AssessmentId, question: &str, option: &str) -> SaveAnswerCommand {
        SaveAnswerCommand {
            assessment_id,
            question_id: qid(question),
            option_id: oid(option),
        }
    }

    async fn stored(store: &InMemoryStore, id: &AssessmentId) -> Assessment {
        AssessmentRepository::find_by_id(store, id)
            .await
            .unwrap()
            .unwrap()
    }

    #[tokio::test]
    async fn records_answer_and_persists() {
        let store = seeded_store().await;
        let assessment = assessment_with_answers(&store, &[]).await;
        let handler = SaveAnswerHandler::new(store.clone(), store.clone());

        let result = handler
            .handle(command(*assessment.id(), "q1", "q1_a3"))
            .await
            .unwrap();

        assert_eq!(result.replaced, None);
        assert_eq!(
            stored(&store, assessment.id()).await.answer_for(&qid("q1")),
            Some(&oid("q1_a3"))
        );
    }

    #[tokio::test]
    async fn re_answering_overwrites() {
        let store = seeded_store().await;
        let assessment = assessment_with_answers(&store, &[("q2", "q2_a4")]).await;
        let handler = SaveAnswerHandler::new(store.clone(), store.clone());

        let result = handler
            .handle(command(*assessment.id(), "q2", "q2_a1"))
            .await
            .unwrap();

        assert_eq!(result.replaced, Some(oid("q2_a4")));
        let reloaded = stored(&store, assessment.id()).await;
        assert_eq!(reloaded.answers().len(), 1);
        assert_eq!(reloaded.answer_for(&qid("q2")), Some(&oid("q2_a1")));
    }

    #[tokio::test]
    async fn unknown_assessment_is_not_found() {
        let store = seeded_store().await;
        let handler = SaveAnswerHandler::new(store.clone(), store);
        let id = AssessmentId::new();

        let err = handler.handle(command(id, "q1", "q1_a1")).await.unwrap_err();

        assert_eq!(err, AssessmentError::NotFound(id));
    }

    #[tokio::test]
    async fn unknown_question_is_not_found() {
        let store = seeded_store().await;
        let assessment = assessment_with_answers(&store, &[]).await;
        let handler = SaveAnswerHandler::new(store.clone(), store);

        let err = handler
            .handle(command(*assessment.id(), "q42", "q42_a1"))
            .await
            .unwrap_err();

        assert_eq!(err, AssessmentError::QuestionNotFound(qid("q42")));
    }

    #[tokio::test]
    async fn option_of_another_question_is_rejected() {
        let store = seeded_store().await;
        let assessment = assessment_with_answers(&store, &[]).await;
        let handler = SaveAnswerHandler::new(store.clone(), store.clone());

        let err = handler
            .handle(command(*assessment.id(), "q1", "q2_a1"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AssessmentError::OptionNotFound {
                question_id: qid("q1"),
                option_id: oid("q2_a1"),
            }
        );
        assert!(stored(&store, assessment.id()).await.answers().is_empty());
    }

    #[tokio::test]
    async fn completed_assessment_rejects_answers() {
        let store = seeded_store().await;
        let mut assessment = assessment_with_answers(&store, &[("q1", "q1_a1")]).await;
        assessment.complete();
        store.update(&assessment).await.unwrap();
        let handler = SaveAnswerHandler::new(store.clone(), store.clone());

        let err = handler
            .handle(command(*assessment.id(), "q1", "q1_a4"))
            .await
            .unwrap_err();

        assert_eq!(err, AssessmentError::AlreadyCompleted(*assessment.id()));
        assert_eq!(
            stored(&store, assessment.id()).await.answer_for(&qid("q1")),
            Some(&oid("q1_a1"))
        );
    }
}
