//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `QuestionCatalog` - Read-only question reference data
//! - `AssessmentRepository` - Assessment records
//! - `ReportRepository` - Generated reports, one per assessment
//! - `ApplicationRepository` - Applications under assessment
//!
//! All ports report backing-store failures as `StorageUnavailable`.

mod application_repository;
mod assessment_repository;
mod question_catalog;
mod report_repository;

pub use application_repository::ApplicationRepository;
pub use assessment_repository::AssessmentRepository;
pub use question_catalog::QuestionCatalog;
pub use report_repository::ReportRepository;
