//! HTTP integration for the writing quality inspector
//!
//! This crate provides the `reqwest`-based implementation of the
//! `QualityService` trait, plus its configuration.

mod client;
mod config;
mod wire;


pub use client::HttpQualityService;
pub use config::ClientConfig;

// Re-export core types for convenience
pub use wqi_core::{
    AnalysisReport, AnalyzeRequest, Error, HealthStatus, Improvement, ImproveRequest,
    QualityService, Result,
};
