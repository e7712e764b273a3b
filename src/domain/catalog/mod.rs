//! Question catalog domain module.
//!
//! The catalog is shared, read-only reference data: the same weighted
//! questions are presented for every assessment.

mod question;

pub use question::{AnswerOption, Question};
