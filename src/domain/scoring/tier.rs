//! Suitability tiers selected by the overall ratio.

use serde::{Deserialize, Serialize};

/// Below this overall ratio an application needs significant work.
pub const SIGNIFICANT_WORK_THRESHOLD: f64 = 0.5;

/// Below this overall ratio an application needs moderate work.
pub const GOOD_CANDIDATE_THRESHOLD: f64 = 0.7;

/// Narrative tier for an overall ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuitabilityTier {
    /// ratio < 0.5
    NeedsSignificantWork,
    /// 0.5 <= ratio < 0.7
    NeedsModerateWork,
    /// ratio >= 0.7
    GoodCandidate,
}

impl SuitabilityTier {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < SIGNIFICANT_WORK_THRESHOLD {
            SuitabilityTier::NeedsSignificantWork
        } else if ratio < GOOD_CANDIDATE_THRESHOLD {
            SuitabilityTier::NeedsModerateWork
        } else {
            SuitabilityTier::GoodCandidate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_belong_to_the_upper_tier() {
        assert_eq!(SuitabilityTier::from_ratio(0.0), SuitabilityTier::NeedsSignificantWork);
        assert_eq!(SuitabilityTier::from_ratio(0.49), SuitabilityTier::NeedsSignificantWork);
        assert_eq!(SuitabilityTier::from_ratio(0.5), SuitabilityTier::NeedsModerateWork);
        assert_eq!(SuitabilityTier::from_ratio(0.69), SuitabilityTier::NeedsModerateWork);
        assert_eq!(SuitabilityTier::from_ratio(0.7), SuitabilityTier::GoodCandidate);
        assert_eq!(SuitabilityTier::from_ratio(1.0), SuitabilityTier::GoodCandidate);
    }
}
