//! CompleteAssessmentHandler - Command handler that completes an assessment
//! and computes and persists its report.

use std::sync::Arc;

use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::AssessmentId;
use crate::domain::scoring::{Report, ReportGenerator, Scorer};
use crate::ports::{AssessmentRepository, QuestionCatalog, ReportRepository};

/// Command to complete an assessment.
#[derive(Debug, Clone)]
pub struct CompleteAssessmentCommand {
    pub assessment_id: AssessmentId,
}

/// Result of completing an assessment.
#[derive(Debug, Clone)]
pub struct CompleteAssessmentResult {
    pub report: Report,
    /// `false` when the assessment was already completed and the report was
    /// regenerated.
    pub newly_completed: bool,
}

/// Handler for completing assessments.
///
/// Storage failures propagate unchanged; nothing is retried.
pub struct CompleteAssessmentHandler {
    assessments: Arc<dyn AssessmentRepository>,
    catalog: Arc<dyn QuestionCatalog>,
    reports: Arc<dyn ReportRepository>,
    generator: ReportGenerator,
}

impl CompleteAssessmentHandler {
    pub fn new(
        assessments: Arc<dyn AssessmentRepository>,
        catalog: Arc<dyn QuestionCatalog>,
        reports: Arc<dyn ReportRepository>,
    ) -> Self {
        Self {
            assessments,
            catalog,
            reports,
            generator: ReportGenerator::new(),
        }
    }

    pub fn with_generator(mut self, generator: ReportGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub async fn handle(
        &self,
        cmd: CompleteAssessmentCommand,
    ) -> Result<CompleteAssessmentResult, AssessmentError> {
        // 1. Load assessment and catalog
        let mut assessment = self
            .assessments
            .find_by_id(&cmd.assessment_id)
            .await?
            .ok_or(AssessmentError::NotFound(cmd.assessment_id))?;
        let questions = self.catalog.list_questions().await?;

        // 2. Transition (no-op on regeneration)
        let newly_completed = assessment.complete();
        if newly_completed {
            self.assessments.update(&assessment).await?;
        }

        // 3. Score and generate
        let scores = Scorer::score(&questions, assessment.answers());
        let report = self.generator.generate(
            *assessment.id(),
            assessment.application_id().clone(),
            &scores,
        );

        // 4. Persist (upsert)
        self.reports.save(&report).await?;

        tracing::info!(
            assessment_id = %cmd.assessment_id,
            total_score = report.total_score,
            max_possible_score = report.max_possible_score,
            recommendations = report.recommendations.len(),
            risks = report.risks.len(),
            newly_completed,
            "Assessment completed"
        );
        Ok(CompleteAssessmentResult {
            report,
            newly_completed,
        })
    }
}
