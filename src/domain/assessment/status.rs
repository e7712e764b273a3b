//! AssessmentStatus enum for tracking the lifecycle of an assessment.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle status of an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    #[default]
    InProgress,
    Completed,
}

impl AssessmentStatus {
    /// Returns true if answers may still be recorded.
    pub fn is_mutable(&self) -> bool {
        matches!(self, AssessmentStatus::InProgress)
    }
}

impl StateMachine for AssessmentStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AssessmentStatus::*;
        matches!((self, target), (InProgress, Completed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            AssessmentStatus::InProgress => vec![AssessmentStatus::Completed],
            AssessmentStatus::Completed => vec![],
        }
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssessmentStatus::InProgress => "in_progress",
            AssessmentStatus::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_in_progress() {
        assert_eq!(AssessmentStatus::default(), AssessmentStatus::InProgress);
    }

    #[test]
    fn only_in_progress_is_mutable() {
        assert!(AssessmentStatus::InProgress.is_mutable());
        assert!(!AssessmentStatus::Completed.is_mutable());
    }

    #[test]
    fn in_progress_can_complete() {
        assert_eq!(
            AssessmentStatus::InProgress.transition_to(AssessmentStatus::Completed),
            Ok(AssessmentStatus::Completed)
        );
    }

    #[test]
    fn completed_is_terminal() {
        assert!(AssessmentStatus::Completed.is_terminal());
        assert!(AssessmentStatus::Completed
            .transition_to(AssessmentStatus::InProgress)
            .is_err());
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&AssessmentStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::to_string(&AssessmentStatus::Completed).unwrap(),
            "\"completed\""
        );
    }

    #[test]
    fn display_matches_wire_format() {
        assert_eq!(AssessmentStatus::InProgress.to_string(), "in_progress");
        assert_eq!(AssessmentStatus::Completed.to_string(), "completed");
    }
}
