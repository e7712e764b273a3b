//! HTTP adapter for applications under assessment.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::applications_router;
