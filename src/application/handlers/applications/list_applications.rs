//! ListApplicationsHandler - Query handler for registered applications.

use std::sync::Arc;

use crate::domain::application::Application;
use crate::domain::assessment::AssessmentError;
use crate::ports::ApplicationRepository;

/// Handler for listing applications.
pub struct ListApplicationsHandler {
    applications: Arc<dyn ApplicationRepository>,
}

impl ListApplicationsHandler {
    pub fn new(applications: Arc<dyn ApplicationRepository>) -> Self {
        Self { applications }
    }

    pub async fn handle(&self) -> Result<Vec<Application>, AssessmentError> {
        Ok(self.applications.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{seeded_store, UnavailableStore};

    #[tokio::test]
    async fn lists_sample_application() {
        let handler = ListApplicationsHandler::new(seeded_store().await);

        let apps = handler.handle().await.unwrap();

        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].name, "Sample Application");
    }

    #[tokio::test]
    async fn storage_failure_propagates() {
        let handler = ListApplicationsHandler::new(Arc::new(UnavailableStore));

        assert!(matches!(
            handler.handle().await,
            Err(AssessmentError::StorageUnavailable(_))
        ));
    }
}
