//! Assessment repository port.
//!
//! Each assessment is one record keyed by its id. Writes are last-write-wins;
//! no cross-record transactions are required.

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{ApplicationId, AssessmentId, DomainError};
use async_trait::async_trait;

/// Repository port for Assessment aggregate persistence.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Save a new assessment.
    ///
    /// # Errors
    ///
    /// - `StorageUnavailable` on persistence failure
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError>;

    /// Update an existing assessment.
    ///
    /// # Errors
    ///
    /// - `AssessmentNotFound` if the assessment doesn't exist
    /// - `StorageUnavailable` on persistence failure
    async fn update(&self, assessment: &Assessment) -> Result<(), DomainError>;

    /// Find an assessment by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<Assessment>, DomainError>;

    /// Find all assessments for an application, oldest first.
    async fn find_by_application(
        &self,
        application_id: &ApplicationId,
    ) -> Result<Vec<Assessment>, DomainError>;
}
