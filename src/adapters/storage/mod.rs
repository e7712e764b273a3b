//! Storage Adapters
//!
//! Implementations of the storage ports (`QuestionCatalog`,
//! `AssessmentRepository`, `ReportRepository`, `ApplicationRepository`).
//!
//! ## Available Adapters
//!
//! - **FileStore** - One JSON file per record on disk
//! - **InMemoryStore** - Records kept in memory (testing/development)
//!
//! Both can be seeded with the embedded [`SampleData`].
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileStore, InMemoryStore, SampleData};
//!
//! // Production: file-based storage
//! let store = FileStore::open("./data").await?;
//! store.seed(&SampleData::load()?).await?;
//!
//! // Testing: in-memory storage
//! let store = InMemoryStore::new();
//! ```

mod file_store;
mod in_memory_store;
mod sample_data;

pub use file_store::FileStore;
pub use in_memory_store::InMemoryStore;
pub use sample_data::SampleData;
