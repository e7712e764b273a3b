//! Assessment domain module.
//!
//! Handles the assessment lifecycle: started for an application, answered
//! question by question while `in_progress`, then completed once. Completing
//! an assessment is what triggers report generation.

mod aggregate;
mod errors;
mod status;

pub use aggregate::Assessment;
pub use errors::AssessmentError;
pub use status::AssessmentStatus;
