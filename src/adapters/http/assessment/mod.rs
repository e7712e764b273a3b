//! HTTP adapter for the assessment module.
//!
//! This module exposes the assessment lifecycle via REST endpoints:
//! start, answer, complete, and read back the report or a live score.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::assessment_router;
