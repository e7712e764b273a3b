//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST API (axum)
//! - `storage` - File and in-memory record stores

pub mod http;
pub mod storage;

pub use http::{api_router, build_app, AppState};
pub use storage::{FileStore, InMemoryStore, SampleData};
