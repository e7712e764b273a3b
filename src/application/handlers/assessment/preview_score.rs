//! PreviewScoreHandler - Query handler scoring the current answers without
//! persisting anything.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::AssessmentId;
use crate::domain::scoring::{ScoreResult, Scorer, SuitabilityTier};
use crate::ports::{AssessmentRepository, QuestionCatalog};

/// Query for a live score of an assessment.
#[derive(Debug, Clone)]
pub struct PreviewScoreQuery {
    pub assessment_id: AssessmentId,
}

/// Live score of an assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorePreview {
    pub scores: ScoreResult,
    pub ratio: f64,
    pub tier: SuitabilityTier,
    /// Answers that resolved to a catalog question.
    pub answered: usize,
    pub total_questions: usize,
}

pub struct PreviewScoreHandler {
    assessments: Arc<dyn AssessmentRepository>,
    catalog: Arc<dyn QuestionCatalog>,
}

impl PreviewScoreHandler {
    pub fn new(
        assessments: Arc<dyn AssessmentRepository>,
        catalog: Arc<dyn QuestionCatalog>,
    ) -> Self {
        Self {
            assessments,
            catalog,
        }
    }

    pub async fn handle(&self, query: PreviewScoreQuery) -> Result<ScorePreview, AssessmentError> {
        let assessment = self
            .assessments
            .find_by_id(&query.assessment_id)
            .await?
            .ok_or(AssessmentError::NotFound(query.assessment_id))?;
        let questions = self.catalog.list_questions().await?;

        let scores = Scorer::score(&questions, assessment.answers());
        let ratio = scores.overall_ratio();
        let answered = questions
            .iter()
            .filter(|q| assessment.answer_for(&q.id).is_some())
            .count();

        Ok(ScorePreview {
            ratio,
            tier: SuitabilityTier::from_ratio(ratio),
            answered,
            total_questions: questions.len(),
            scores,
        })
    }
}
