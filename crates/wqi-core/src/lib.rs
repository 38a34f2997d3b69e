//! Core types and traits for the writing quality inspector client
//!
//! This crate defines the request/response model shared by every front-end,
//! the error taxonomy, and the `QualityService` trait that abstracts the
//! remote service so workflows can be exercised without a network.

pub mod error;
pub mod service;
pub mod types;

pub use error::{Error, Result};
pub use service::QualityService;
pub use types::{
    AnalysisReport, AnalyzeRequest, HealthStatus, Improvement, ImproveRequest, Purpose, Scores,
};
