//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `catalog` - Weighted questions and their answer options
//! - `application` - Applications under assessment
//! - `assessment` - Assessment aggregate and lifecycle
//! - `scoring` - Pure scoring and report generation

pub mod application;
pub mod assessment;
pub mod catalog;
pub mod foundation;
pub mod scoring;
