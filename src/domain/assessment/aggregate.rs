//! Assessment aggregate entity.
//!
//! An assessment is one answer set for one application. It references
//! questions and options by id and never embeds catalog data.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::catalog::Question;
use crate::domain::foundation::{
    ApplicationId, AssessmentId, DomainError, ErrorCode, OptionId, QuestionId, StateMachine,
    Timestamp,
};

use super::AssessmentStatus;

/// Assessment aggregate.
///
/// # Invariants
///
/// - At most one answer per question; re-answering overwrites
/// - Status only moves `in_progress -> completed`
/// - Answers are frozen once completed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    id: AssessmentId,
    application_id: ApplicationId,
    created_at: Timestamp,
    #[serde(default)]
    answers: HashMap<QuestionId, OptionId>,
    #[serde(default)]
    status: AssessmentStatus,
}

impl Assessment {
    /// Starts a new in-progress assessment with no answers.
    pub fn start(application_id: ApplicationId) -> Self {
        Self {
            id: AssessmentId::new(),
            application_id,
            created_at: Timestamp::now(),
            answers: HashMap::new(),
            status: AssessmentStatus::InProgress,
        }
    }

    /// Reconstitute an assessment from persistence (no validation).
    pub fn reconstitute(
        id: AssessmentId,
        application_id: ApplicationId,
        created_at: Timestamp,
        answers: HashMap<QuestionId, OptionId>,
        status: AssessmentStatus,
    ) -> Self {
        Self {
            id,
            application_id,
            created_at,
            answers,
            status,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &AssessmentId {
        &self.id
    }

    pub fn application_id(&self) -> &ApplicationId {
        &self.application_id
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Selected option per question.
    pub fn answers(&self) -> &HashMap<QuestionId, OptionId> {
        &self.answers
    }

    pub fn answer_for(&self, question_id: &QuestionId) -> Option<&OptionId> {
        self.answers.get(question_id)
    }

    pub fn status(&self) -> AssessmentStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == AssessmentStatus::Completed
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Records the selected option for a question, replacing any earlier
    /// answer. Returns the option that was replaced.
    ///
    /// # Errors
    ///
    /// - `AssessmentCompleted` if the assessment is completed
    /// - `OptionNotFound` if the option does not belong to the question
    pub fn record_answer(
        &mut self,
        question: &Question,
        option_id: OptionId,
    ) -> Result<Option<OptionId>, DomainError> {
        self.ensure_mutable()?;

        if question.find_option(&option_id).is_none() {
            return Err(DomainError::new(
                ErrorCode::OptionNotFound,
                format!(
                    "Option '{}' does not belong to question '{}'",
                    option_id, question.id
                ),
            )
            .with_detail("question_id", question.id.as_str())
            .with_detail("option_id", option_id.as_str()));
        }

        Ok(self.answers.insert(question.id.clone(), option_id))
    }

    /// Marks the assessment completed. Returns `false` when it already was,
    /// which lets a caller regenerate the report without a state change.
    pub fn complete(&mut self) -> bool {
        match self.status.transition_to(AssessmentStatus::Completed) {
            Ok(next) => {
                self.status = next;
                true
            }
            Err(_) => false,
        }
    }

    fn ensure_mutable(&self) -> Result<(), DomainError> {
        if self.status.is_mutable() {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::AssessmentCompleted,
                "Cannot change answers of a completed assessment",
            )
            .with_detail("assessment_id", self.id.to_string()))
        }
    }
}
