//! Category rules: per-category thresholds that add a recommendation and a
//! risk when a category scores below them.

use super::report::{Priority, Recommendation, Risk, Severity};

/// A threshold rule for one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryRule {
    pub category: &'static str,
    /// The rule fires when the category ratio is strictly below this.
    pub threshold: f64,
    pub recommendation: &'static str,
    pub priority: Priority,
    pub risk: &'static str,
    pub severity: Severity,
}

impl CategoryRule {
    pub fn applies(&self, category: &str, ratio: f64) -> bool {
        self.category == category && ratio < self.threshold
    }

    pub fn recommendation(&self) -> Recommendation {
        Recommendation::new(self.category, self.recommendation, self.priority)
    }

    pub fn risk(&self) -> Risk {
        Risk::new(self.category, self.risk, self.severity)
    }
}

/// Rules in evaluation order. At most one rule fires per category.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: "Architecture",
        threshold: 0.5,
        recommendation:
            "Consider refactoring application architecture to be more containerization-friendly",
        priority: Priority::High,
        risk: "Complex architecture may lead to challenges in containerization",
        severity: Severity::High,
    },
    CategoryRule {
        category: "Persistence",
        threshold: 0.6,
        recommendation: "Review database access patterns for compatibility with Kubernetes",
        priority: Priority::Medium,
        risk: "Data persistence implementation may cause issues in containerized environment",
        severity: Severity::Medium,
    },
];

/// First rule in `rules` that fires for the category, if any.
pub fn matching_rule<'a>(
    rules: &'a [CategoryRule],
    category: &str,
    ratio: f64,
) -> Option<&'a CategoryRule> {
    rules.iter().find(|rule| rule.applies(category, ratio))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn architecture_rule_fires_below_half() {
        let rule = matching_rule(CATEGORY_RULES, "Architecture", 0.4).unwrap();
        assert_eq!(rule.priority, Priority::High);
        assert_eq!(rule.risk().severity, Severity::High);
        assert!(matching_rule(CATEGORY_RULES, "Architecture", 0.5).is_none());
    }

    #[test]
    fn persistence_rule_fires_below_sixty_percent() {
        let rule = matching_rule(CATEGORY_RULES, "Persistence", 0.55).unwrap();
        assert_eq!(rule.recommendation().priority, Priority::Medium);
        assert_eq!(rule.recommendation().category, "Persistence");
        assert!(matching_rule(CATEGORY_RULES, "Persistence", 0.6).is_none());
    }

    #[test]
    fn other_categories_have_no_rule() {
        assert!(matching_rule(CATEGORY_RULES, "Observability", 0.0).is_none());
        assert!(matching_rule(CATEGORY_RULES, "architecture", 0.0).is_none());
    }

    #[test]
    fn first_matching_rule_wins() {
        let rules = [
            CategoryRule {
                category: "Security",
                threshold: 0.3,
                recommendation: "strict",
                priority: Priority::High,
                risk: "strict risk",
                severity: Severity::High,
            },
            CategoryRule {
                category: "Security",
                threshold: 0.8,
                recommendation: "lenient",
                priority: Priority::Low,
                risk: "lenient risk",
                severity: Severity::Low,
            },
        ];

        assert_eq!(matching_rule(&rules, "Security", 0.1).unwrap().recommendation, "strict");
        assert_eq!(matching_rule(&rules, "Security", 0.5).unwrap().recommendation, "lenient");
    }
}
