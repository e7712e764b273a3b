//! RegisterApplicationHandler - Command handler for adding or replacing an application.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::application::Application;
use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::ApplicationId;
use crate::ports::ApplicationRepository;

/// Command to register an application. An existing id is overwritten.
#[derive(Debug, Clone)]
pub struct RegisterApplicationCommand {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: BTreeMap<String, String>,
}

/// Handler for registering applications.
pub struct RegisterApplicationHandler {
    applications: Arc<dyn ApplicationRepository>,
}

impl RegisterApplicationHandler {
    pub fn new(applications: Arc<dyn ApplicationRepository>) -> Self {
        Self { applications }
    }

    pub async fn handle(
        &self,
        cmd: RegisterApplicationCommand,
    ) -> Result<Application, AssessmentError> {
        let id = ApplicationId::new(cmd.id)?;
        let application = Application::new(id, cmd.name, cmd.description, cmd.tags)?;

        self.applications.save(&application).await?;

        tracing::info!(application_id = %application.id, "Application registered");
        Ok(application)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryStore;
    use crate::application::handlers::test_support::app_id;

    fn command(id: &str, name: &str) -> RegisterApplicationCommand {
        RegisterApplicationCommand {
            id: id.to_string(),
            name: name.to_string(),
            description: "Billing backend".to_string(),
            tags: BTreeMap::from([("language".to_string(), "Go".to_string())]),
        }
    }

    #[tokio::test]
    async fn registers_and_persists_application() {
        let store = Arc::new(InMemoryStore::new());
        let handler = RegisterApplicationHandler::new(store.clone());

        let app = handler.handle(command("billing", "Billing")).await.unwrap();

        assert_eq!(app.tags.get("language").map(String::as_str), Some("Go"));
        let stored = ApplicationRepository::find_by_id(store.as_ref(), &app_id("billing"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored, app);
    }

    #[tokio::test]
    async fn blank_name_fails_validation() {
        let handler = RegisterApplicationHandler::new(Arc::new(InMemoryStore::new()));

        let err = handler.handle(command("billing", "  ")).await.unwrap_err();

        assert!(matches!(err, AssessmentError::ValidationFailed { ref field, .. } if field == "name"));
    }

    #[tokio::test]
    async fn blank_id_fails_validation() {
        let handler = RegisterApplicationHandler::new(Arc::new(InMemoryStore::new()));

        let err = handler.handle(command("", "Billing")).await.unwrap_err();

        assert!(matches!(err, AssessmentError::ValidationFailed { ref field, .. } if field == "application_id"));
    }
}
