//! Report generation from raw scores.
//!
//! Pure and deterministic apart from the timestamp taken by [`ReportGenerator::generate`].

use super::plan::build_plan;
use super::report::{Priority, Recommendation, Report, Risk, Severity};
use super::rules::{matching_rule, CategoryRule, CATEGORY_RULES};
use super::scorer::ScoreResult;
use super::tier::SuitabilityTier;
use super::GENERAL_CATEGORY;
use crate::domain::foundation::{ApplicationId, AssessmentId, Timestamp};

const DEPLOYMENT_CATEGORY: &str = "Deployment";

/// Builds reports using a category rule table.
#[derive(Debug, Clone, Copy)]
pub struct ReportGenerator {
    rules: &'static [CategoryRule],
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator {
    /// Generator using the shipped [`CATEGORY_RULES`].
    pub fn new() -> Self {
        Self {
            rules: CATEGORY_RULES,
        }
    }

    /// Generator using a custom rule table.
    pub fn with_rules(rules: &'static [CategoryRule]) -> Self {
        Self { rules }
    }

    /// Generates a report stamped with the current time.
    pub fn generate(
        &self,
        assessment_id: AssessmentId,
        application_id: ApplicationId,
        scores: &ScoreResult,
    ) -> Report {
        self.generate_at(assessment_id, application_id, scores, Timestamp::now())
    }

    /// Generates a report stamped with `generated_at`.
    pub fn generate_at(
        &self,
        assessment_id: AssessmentId,
        application_id: ApplicationId,
        scores: &ScoreResult,
        generated_at: Timestamp,
    ) -> Report {
        let tier = SuitabilityTier::from_ratio(scores.overall_ratio());

        let mut recommendations = vec![overall_recommendation(tier)];
        let mut risks: Vec<Risk> = overall_risk(tier).into_iter().collect();

        // BTreeMap iteration: categories in name order.
        for category in scores.category_scores.keys() {
            let Some(category_ratio) = scores.category_ratio(category) else {
                continue;
            };
            if let Some(rule) = matching_rule(self.rules, category, category_ratio) {
                recommendations.push(rule.recommendation());
                risks.push(rule.risk());
            }
        }

        Report {
            assessment_id,
            application_id,
            generated_at,
            total_score: scores.total,
            max_possible_score: scores.max_possible,
            category_scores: scores.category_scores.clone(),
            recommendations,
            risks,
            modernization_plan: build_plan(tier),
        }
    }
}

fn overall_recommendation(tier: SuitabilityTier) -> Recommendation {
    let (description, priority) = match tier {
        SuitabilityTier::NeedsSignificantWork => (
            "Application requires significant modifications for Kubernetes deployment",
            Priority::High,
        ),
        SuitabilityTier::NeedsModerateWork => (
            "Application needs moderate changes to be suitable for Kubernetes",
            Priority::Medium,
        ),
        SuitabilityTier::GoodCandidate => (
            "Application is a good candidate for Kubernetes deployment",
            Priority::Low,
        ),
    };
    Recommendation::new(GENERAL_CATEGORY, description, priority)
}

fn overall_risk(tier: SuitabilityTier) -> Option<Risk> {
    match tier {
        SuitabilityTier::NeedsSignificantWork => Some(Risk::new(
            DEPLOYMENT_CATEGORY,
            "Application architecture not suitable for containerization",
            Severity::High,
        )),
        SuitabilityTier::NeedsModerateWork | SuitabilityTier::GoodCandidate => None,
    }
}
