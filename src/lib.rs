//! Kube Readiness - Kubernetes suitability assessment
//!
//! Applications are assessed against a weighted question catalog. A completed
//! assessment is scored per category and turned into a report with
//! recommendations, risks and a modernization plan.
//!
//! Layout follows a ports-and-adapters split:
//! - `domain` - Pure types and scoring rules
//! - `ports` - Storage traits the domain depends on
//! - `application` - Command and query handlers
//! - `adapters` - HTTP API and storage implementations
//! - `config` - Environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
