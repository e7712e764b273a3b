//! Built-in sample catalog and application, embedded as YAML.

use serde::Deserialize;

use crate::domain::application::Application;
use crate::domain::catalog::Question;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

const SAMPLE_DATA_YAML: &str = include_str!("sample_data.yaml");

/// Seed records for an empty store.
#[derive(Debug, Clone, Deserialize)]
pub struct SampleData {
    pub questions: Vec<Question>,
    #[serde(default)]
    pub applications: Vec<Application>,
}

impl SampleData {
    /// Parses the embedded sample data.
    pub fn load() -> Result<Self, DomainError> {
        Self::from_yaml(SAMPLE_DATA_YAML)
    }

    /// Parses seed data and re-checks question and application invariants.
    ///
    /// # Errors
    ///
    /// - `InternalError` if the YAML is malformed
    /// - `ValidationFailed` if a record breaks its invariants
    pub fn from_yaml(yaml: &str) -> Result<Self, DomainError> {
        let raw: SampleData = serde_yaml::from_str(yaml).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Invalid sample data: {}", e),
            )
        })?;

        let questions = raw
            .questions
            .into_iter()
            .map(|q| Question::new(q.id, q.text, q.category, q.weight, q.options))
            .collect::<Result<Vec<_>, ValidationError>>()?;
        let applications = raw
            .applications
            .into_iter()
            .map(|a| Application::new(a.id, a.name, a.description, a.tags))
            .collect::<Result<Vec<_>, ValidationError>>()?;

        Ok(Self {
            questions,
            applications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_has_five_weighted_questions() {
        let data = SampleData::load().unwrap();

        let categories: Vec<&str> = data.questions.iter().map(|q| q.category.as_str()).collect();
        assert_eq!(
            categories,
            vec!["Architecture", "Configuration", "Observability", "Persistence", "Scalability"]
        );
        let weights: Vec<u32> = data.questions.iter().map(|q| q.weight).collect();
        assert_eq!(weights, vec![5, 3, 2, 4, 5]);
        assert!(data.questions.iter().all(|q| q.options.len() == 4 && q.max_points() == 10));
    }

    #[test]
    fn embedded_sample_application_is_tagged() {
        let data = SampleData::load().unwrap();

        assert_eq!(data.applications.len(), 1);
        let app = &data.applications[0];
        assert_eq!(app.id.as_str(), "app1");
        assert_eq!(app.tags.get("language").map(String::as_str), Some("Java"));
        assert_eq!(app.tags.get("type").map(String::as_str), Some("Web Application"));
    }

    #[test]
    fn rejects_question_with_zero_weight() {
        let yaml = r#"
questions:
  - id: q1
    text: Broken
    category: Architecture
    weight: 0
    options:
      - { id: a, text: A, points: 1 }
"#;
        let err = SampleData::from_yaml(yaml).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.detail("field"), Some("weight"));
    }

    #[test]
    fn rejects_malformed_yaml() {
        let err = SampleData::from_yaml("questions: [").unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalError);
    }
}
