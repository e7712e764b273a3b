//! HTTP DTOs for the question catalog.

use serde::Serialize;

use crate::domain::catalog::{AnswerOption, Question};

/// A selectable answer option.
#[derive(Debug, Clone, Serialize)]
pub struct OptionResponse {
    pub id: String,
    pub text: String,
    pub points: u32,
}

/// A catalog question.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub id: String,
    pub text: String,
    pub category: String,
    pub weight: u32,
    pub options: Vec<OptionResponse>,
}

impl From<AnswerOption> for OptionResponse {
    fn from(option: AnswerOption) -> Self {
        Self {
            id: option.id.to_string(),
            text: option.text,
            points: option.points,
        }
    }
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            id: question.id.to_string(),
            text: question.text,
            category: question.category,
            weight: question.weight,
            options: question.options.into_iter().map(Into::into).collect(),
        }
    }
}
