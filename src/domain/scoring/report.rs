//! Suitability report and its narrative parts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{ApplicationId, AssessmentId, Timestamp};

/// Priority of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Severity of a migration risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// Effort estimate of a modernization step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effort {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: String,
    pub description: String,
    pub priority: Priority,
}

impl Recommendation {
    pub fn new(category: impl Into<String>, description: impl Into<String>, priority: Priority) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
            priority,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Risk {
    pub category: String,
    pub description: String,
    pub severity: Severity,
}

impl Risk {
    pub fn new(category: impl Into<String>, description: impl Into<String>, severity: Severity) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
            severity,
        }
    }
}

/// One step of the modernization plan. `order` is the 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModernizationStep {
    pub order: u32,
    pub description: String,
    pub effort: Effort,
}

/// Report derived from a completed assessment.
///
/// Keyed 1:1 by assessment id and replaced wholesale when regenerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub assessment_id: AssessmentId,
    pub application_id: ApplicationId,
    pub generated_at: Timestamp,
    pub total_score: u64,
    pub max_possible_score: u64,
    pub category_scores: BTreeMap<String, u64>,
    pub recommendations: Vec<Recommendation>,
    pub risks: Vec<Risk>,
    pub modernization_plan: Vec<ModernizationStep>,
}

impl Report {
    /// The single overall recommendation, category "General".
    pub fn overall_recommendation(&self) -> Option<&Recommendation> {
        self.recommendations
            .iter()
            .find(|r| r.category == super::GENERAL_CATEGORY)
    }
}
