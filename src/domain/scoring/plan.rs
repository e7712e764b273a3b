//! Modernization plan construction.

use super::report::{Effort, ModernizationStep};
use super::tier::SuitabilityTier;

type StepTemplate = (&'static str, Effort);

const LEADING_STEPS: &[StepTemplate] = &[(
    "Analyze application dependencies and external integrations",
    Effort::Low,
)];

const SIGNIFICANT_WORK_STEPS: &[StepTemplate] = &[
    ("Refactor application architecture for microservices", Effort::High),
    ("Implement appropriate data persistence strategy", Effort::High),
    (
        "Create containerization strategy with multiple containers",
        Effort::Medium,
    ),
];

const MODERATE_WORK_STEPS: &[StepTemplate] = &[
    (
        "Refactor specific components for containerization",
        Effort::Medium,
    ),
    ("Adapt data persistence for cloud environment", Effort::Medium),
];

const TRAILING_STEPS: &[StepTemplate] = &[
    ("Containerize application components", Effort::Medium),
    ("Create Kubernetes deployment manifests", Effort::Medium),
    (
        "Set up CI/CD pipeline for Kubernetes deployment",
        Effort::Medium,
    ),
    ("Implement monitoring and observability", Effort::Medium),
];

fn tier_steps(tier: SuitabilityTier) -> &'static [StepTemplate] {
    match tier {
        SuitabilityTier::NeedsSignificantWork => SIGNIFICANT_WORK_STEPS,
        SuitabilityTier::NeedsModerateWork => MODERATE_WORK_STEPS,
        SuitabilityTier::GoodCandidate => &[],
    }
}

/// Builds the plan for a tier: leading steps, the tier's block, then the
/// trailing steps. `order` is assigned from the final position.
pub fn build_plan(tier: SuitabilityTier) -> Vec<ModernizationStep> {
    LEADING_STEPS
        .iter()
        .chain(tier_steps(tier))
        .chain(TRAILING_STEPS)
        .zip(1u32..)
        .map(|(&(description, effort), order)| ModernizationStep {
            order,
            description: description.to_string(),
            effort,
        })
        .collect()
}
