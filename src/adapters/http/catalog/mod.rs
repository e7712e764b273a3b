//! HTTP adapter for the question catalog.
//!
//! - `GET /api/questions` - The full question catalog

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::catalog_router;
