//! Application repository port.

use crate::domain::application::Application;
use crate::domain::foundation::{ApplicationId, DomainError};
use async_trait::async_trait;

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Insert or replace an application.
    async fn save(&self, application: &Application) -> Result<(), DomainError>;

    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ApplicationId) -> Result<Option<Application>, DomainError>;

    /// All applications, ordered by id.
    async fn list(&self) -> Result<Vec<Application>, DomainError>;
}
