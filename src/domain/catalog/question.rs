//! Question and answer option value objects.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{OptionId, QuestionId, ValidationError};

/// A selectable answer to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: OptionId,
    pub text: String,
    /// Raw score for selecting this option, before weighting.
    pub points: u32,
}

impl AnswerOption {
    pub fn new(id: OptionId, text: impl Into<String>, points: u32) -> Self {
        Self {
            id,
            text: text.into(),
            points,
        }
    }
}

/// A weighted multiple-choice question.
///
/// # Invariants
///
/// - `weight` is at least 1
/// - `options` is non-empty and option ids are unique within the question
///
/// Questions read back from storage are trusted as-is; scoring tolerates a
/// question that breaks these rules instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub category: String,
    pub weight: u32,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the category is blank or there are no options
    /// - `OutOfRange` if the weight is zero
    /// - `InvalidFormat` if two options share an id
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        category: impl Into<String>,
        weight: u32,
        options: Vec<AnswerOption>,
    ) -> Result<Self, ValidationError> {
        let category = category.into();
        if category.trim().is_empty() {
            return Err(ValidationError::empty_field("category"));
        }
        if weight == 0 {
            return Err(ValidationError::out_of_range(
                "weight",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }
        if options.is_empty() {
            return Err(ValidationError::empty_field("options"));
        }

        let mut seen = HashSet::new();
        for option in &options {
            if !seen.insert(&option.id) {
                return Err(ValidationError::invalid_format(
                    "options",
                    format!("duplicate option id '{}'", option.id),
                ));
            }
        }

        Ok(Self {
            id,
            text: text.into(),
            category,
            weight,
            options,
        })
    }

    /// Highest points among the options; the per-question ceiling.
    pub fn max_points(&self) -> u32 {
        self.options.iter().map(|o| o.points).max().unwrap_or(0)
    }

    /// Looks up one of this question's options.
    pub fn find_option(&self, option_id: &OptionId) -> Option<&AnswerOption> {
        self.options.iter().find(|o| &o.id == option_id)
    }
}
