//! Question catalog port (read-only reference data).
//!
//! The catalog is shared by every assessment and never mutated through this
//! port. Seeding happens in the storage adapters.

use crate::domain::catalog::Question;
use crate::domain::foundation::{DomainError, QuestionId};
use async_trait::async_trait;

/// Port for reading the question catalog.
#[async_trait]
pub trait QuestionCatalog: Send + Sync {
    /// Fetch every question, ordered by question id.
    ///
    /// # Errors
    ///
    /// - `StorageUnavailable` if the backing store cannot be read
    async fn list_questions(&self) -> Result<Vec<Question>, DomainError>;

    /// Find a question by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_question(&self, id: &QuestionId) -> Result<Option<Question>, DomainError>;
}
