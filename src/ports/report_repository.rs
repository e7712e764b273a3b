//! Report repository port.

use crate::domain::foundation::{AssessmentId, DomainError};
use crate::domain::scoring::Report;
use async_trait::async_trait;

/// Repository port for generated reports, keyed 1:1 by assessment id.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Insert or replace the report for its assessment.
    ///
    /// # Errors
    ///
    /// - `StorageUnavailable` on persistence failure
    async fn save(&self, report: &Report) -> Result<(), DomainError>;

    /// Find the report generated for an assessment.
    ///
    /// Returns `None` if the assessment was never completed.
    async fn find_by_assessment(
        &self,
        assessment_id: &AssessmentId,
    ) -> Result<Option<Report>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ReportRepository) {}
    }
}
