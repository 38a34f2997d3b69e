//! Service trait abstracting the remote inspector API

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{AnalysisReport, AnalyzeRequest, HealthStatus, Improvement, ImproveRequest};

/// The remote writing quality service.
///
/// Workflows are generic over this trait so they can run against the HTTP
/// client in production and an in-memory double in tests.
#[async_trait]
pub trait QualityService {
    /// Score the text against the service's rubrics.
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisReport>;

    /// Rewrite the text, guided by the request's focus areas.
    async fn improve(&self, request: &ImproveRequest) -> Result<Improvement>;

    /// Check whether the service is reachable.
    async fn health(&self) -> Result<HealthStatus>;
}
