//! HTTP DTOs (Data Transfer Objects) for assessment endpoints.
//!
//! Field names follow the established camelCase wire format.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::application::handlers::ScorePreview;
use crate::domain::assessment::{Assessment, AssessmentStatus};
use crate::domain::scoring::{Effort, ModernizationStep, Priority, Recommendation, Report, Risk, Severity, SuitabilityTier};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to start an assessment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartAssessmentRequest {
    pub application_id: String,
}

/// Request to answer one question.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAnswerRequest {
    pub question_id: String,
    pub option_id: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Acknowledgement body, `{"status":"success"}`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}

/// An assessment and its answers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    pub id: String,
    pub application_id: String,
    pub created_at: String,
    /// Question id to selected option id.
    pub answers: BTreeMap<String, String>,
    pub status: AssessmentStatus,
}

impl From<&Assessment> for AssessmentResponse {
    fn from(assessment: &Assessment) -> Self {
        Self {
            id: assessment.id().to_string(),
            application_id: assessment.application_id().to_string(),
            created_at: assessment.created_at().to_rfc3339(),
            answers: assessment
                .answers()
                .iter()
                .map(|(q, o)| (q.to_string(), o.to_string()))
                .collect(),
            status: assessment.status(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub category: String,
    pub description: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskResponse {
    pub category: String,
    pub description: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModernizationStepResponse {
    pub order: u32,
    pub description: String,
    pub effort: Effort,
}

/// A generated suitability report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub assessment_id: String,
    pub application_id: String,
    pub generated_at: String,
    pub total_score: u64,
    pub max_possible_score: u64,
    pub category_scores: BTreeMap<String, u64>,
    pub recommendations: Vec<RecommendationResponse>,
    pub risks: Vec<RiskResponse>,
    pub modernization_plan: Vec<ModernizationStepResponse>,
}

impl From<Recommendation> for RecommendationResponse {
    fn from(r: Recommendation) -> Self {
        Self {
            category: r.category,
            description: r.description,
            priority: r.priority,
        }
    }
}

impl From<Risk> for RiskResponse {
    fn from(r: Risk) -> Self {
        Self {
            category: r.category,
            description: r.description,
            severity: r.severity,
        }
    }
}

impl From<ModernizationStep> for ModernizationStepResponse {
    fn from(s: ModernizationStep) -> Self {
        Self {
            order: s.order,
            description: s.description,
            effort: s.effort,
        }
    }
}

impl From<Report> for ReportResponse {
    fn from(report: Report) -> Self {
        Self {
            assessment_id: report.assessment_id.to_string(),
            application_id: report.application_id.to_string(),
            generated_at: report.generated_at.to_rfc3339(),
            total_score: report.total_score,
            max_possible_score: report.max_possible_score,
            category_scores: report.category_scores,
            recommendations: report.recommendations.into_iter().map(Into::into).collect(),
            risks: report.risks.into_iter().map(Into::into).collect(),
            modernization_plan: report
                .modernization_plan
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

/// Live score of an in-progress or completed assessment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorePreviewResponse {
    pub assessment_id: String,
    pub total_score: u64,
    pub max_possible_score: u64,
    pub ratio: f64,
    pub tier: SuitabilityTier,
    pub category_scores: BTreeMap<String, u64>,
    pub category_max_scores: BTreeMap<String, u64>,
    pub answered: usize,
    pub total_questions: usize,
}

impl ScorePreviewResponse {
    pub fn new(assessment_id: String, preview: ScorePreview) -> Self {
        Self {
            assessment_id,
            total_score: preview.scores.total,
            max_possible_score: preview.scores.max_possible,
            ratio: preview.ratio,
            tier: preview.tier,
            category_scores: preview.scores.category_scores,
            category_max_scores: preview.scores.category_max_scores,
            answered: preview.answered,
            total_questions: preview.total_questions,
        }
    }
}
