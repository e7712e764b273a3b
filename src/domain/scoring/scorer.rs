//! Weighted score aggregation over the question catalog.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::domain::catalog::Question;
use crate::domain::foundation::{OptionId, QuestionId};

/// Raw scores for one answer set.
///
/// Category maps are ordered by category name so that everything derived
/// from them iterates in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub total: u64,
    pub max_possible: u64,
    /// Score per category. A category only appears once an answer in it
    /// resolved to one of its question's options.
    pub category_scores: BTreeMap<String, u64>,
    /// Ceiling per category, for every category in the catalog.
    ///
    /// Public on purpose: the score preview endpoint reports it as
    /// `categoryMaxScores`, and reports use it for per-category ratios.
    pub category_max_scores: BTreeMap<String, u64>,
}

impl ScoreResult {
    /// `total / max_possible`, 0.0 when nothing can be scored.
    pub fn overall_ratio(&self) -> f64 {
        ratio(self.total, self.max_possible)
    }

    /// Ratio for one category, `None` when the category scored nothing or
    /// has no ceiling.
    pub fn category_ratio(&self, category: &str) -> Option<f64> {
        let score = *self.category_scores.get(category)?;
        match self.category_max_scores.get(category) {
            Some(&max) if max > 0 => Some(ratio(score, max)),
            _ => None,
        }
    }
}

/// Divides a score by its ceiling; a zero ceiling yields 0.0 rather than a fault.
pub fn ratio(score: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    score as f64 / max as f64
}

/// Stateless scorer.
pub struct Scorer;

impl Scorer {
    /// Scores an answer set against the full catalog.
    ///
    /// Every question adds `weight * max(points)` to the ceilings. An answer
    /// adds `weight * points` of the chosen option. Answers naming an option
    /// the question does not have, or a question missing from the catalog,
    /// are ignored. Never fails and has no side effects.
    pub fn score(questions: &[Question], answers: &HashMap<QuestionId, OptionId>) -> ScoreResult {
        let mut result = ScoreResult::default();

        for question in questions {
            let weight = u64::from(question.weight);
            let ceiling = weight * u64::from(question.max_points());

            result.max_possible += ceiling;
            *result
                .category_max_scores
                .entry(question.category.clone())
                .or_insert(0) += ceiling;

            let Some(option) = answers
                .get(&question.id)
                .and_then(|option_id| question.find_option(option_id))
            else {
                continue;
            };

            let earned = weight * u64::from(option.points);
            result.total += earned;
            *result
                .category_scores
                .entry(question.category.clone())
                .or_insert(0) += earned;
        }

        result
    }
}
