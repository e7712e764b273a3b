//! ListQuestionsHandler - Query handler for the question catalog.

use std::sync::Arc;

use crate::domain::assessment::AssessmentError;
use crate::domain::catalog::Question;
use crate::ports::QuestionCatalog;

/// Handler for fetching the full question catalog.
pub struct ListQuestionsHandler {
    catalog: Arc<dyn QuestionCatalog>,
}

impl ListQuestionsHandler {
    pub fn new(catalog: Arc<dyn QuestionCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self) -> Result<Vec<Question>, AssessmentError> {
        Ok(self.catalog.list_questions().await?)
    }
}
