//! Question catalog query handlers.

mod list_questions;

pub use list_questions::ListQuestionsHandler;
