//! Application domain module.
//!
//! An application is the system under assessment. Assessments reference it
//! by id; its existence is only checked when an assessment is started.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{ApplicationId, ValidationError};

/// An application that can be assessed for Kubernetes suitability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Free-form labels such as `language` or `type`.
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl Application {
    /// Creates a new application.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    pub fn new(
        id: ApplicationId,
        name: impl Into<String>,
        description: impl Into<String>,
        tags: BTreeMap<String, String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id,
            name,
            description: description.into(),
            tags,
        })
    }
}
