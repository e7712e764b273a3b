//! HTTP DTOs for application endpoints.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::application::Application;

/// Request to register (or replace) an application.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterApplicationRequest {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

/// An application under assessment.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: BTreeMap<String, String>,
}

impl From<Application> for ApplicationResponse {
    fn from(app: Application) -> Self {
        Self {
            id: app.id.to_string(),
            name: app.name,
            description: app.description,
            tags: app.tags,
        }
    }
}
