//! Validated transitions for lifecycle status enums.

use super::ValidationError;

/// A status enum with a fixed set of allowed transitions.
///
/// Implement `can_transition_to` and `valid_transitions`; `transition_to`
/// and `is_terminal` follow from them.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    fn can_transition_to(&self, target: &Self) -> bool;

    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns `target` if the move is allowed.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if !self.can_transition_to(&target) {
            return Err(ValidationError::invalid_format(
                "status",
                format!("{:?} cannot move to {:?}", self, target),
            ));
        }
        Ok(target)
    }

    /// No outgoing transitions.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Migration {
        Planned,
        Containerized,
        Deployed,
        Abandoned,
    }

    impl StateMachine for Migration {
        fn can_transition_to(&self, target: &Self) -> bool {
            self.valid_transitions().contains(target)
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use Migration::*;
            match self {
                Planned => vec![Containerized, Abandoned],
                Containerized => vec![Deployed, Abandoned],
                Deployed | Abandoned => vec![],
            }
        }
    }

    #[test]
    fn allowed_move_returns_target() {
        assert_eq!(
            Migration::Planned.transition_to(Migration::Containerized),
            Ok(Migration::Containerized)
        );
    }

    #[test]
    fn skipped_step_is_rejected_on_status_field() {
        let err = Migration::Planned
            .transition_to(Migration::Deployed)
            .unwrap_err();
        assert_eq!(err.field(), "status");
    }

    #[test]
    fn end_states_are_terminal() {
        assert!(Migration::Deployed.is_terminal());
        assert!(Migration::Abandoned.is_terminal());
        assert!(!Migration::Containerized.is_terminal());
    }
}
