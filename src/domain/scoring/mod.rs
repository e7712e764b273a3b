//! Scoring and report generation.
//!
//! Question catalog + answers → [`Scorer`] → [`ScoreResult`] →
//! [`ReportGenerator`] → [`Report`]. Everything here is pure.

mod plan;
mod report;
mod report_generator;
mod rules;
mod scorer;
mod tier;

pub use plan::build_plan;
pub use report::{Effort, ModernizationStep, Priority, Recommendation, Report, Risk, Severity};
pub use report_generator::ReportGenerator;
pub use rules::{matching_rule, CategoryRule, CATEGORY_RULES};
pub use scorer::{ratio, ScoreResult, Scorer};
pub use tier::{SuitabilityTier, GOOD_CANDIDATE_THRESHOLD, SIGNIFICANT_WORK_THRESHOLD};

/// Category of the overall recommendation.
pub const GENERAL_CATEGORY: &str = "General";
