//! The analyze and improve workflows

use wqi_core::{AnalyzeRequest, ImproveRequest, Purpose, QualityService, Result};

use crate::render;
use crate::ui;

/// Orchestrates the request/response workflows against a quality service.
///
/// Generic over [`QualityService`] so tests can drive the workflows with an
/// in-memory double.
pub struct Inspector<S: QualityService> {
    service: S,
}

impl<S: QualityService> Inspector<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Run the analyze workflow and return the rendered report.
    ///
    /// Validation failures return before any request is issued; the busy
    /// indicator is cleared on success and failure alike.
    pub async fn analyze(&self, text: &str, purpose: Purpose, strict: bool) -> Result<String> {
        let request = AnalyzeRequest::new(text, purpose, strict)?;

        let busy = ui::busy("Analyzing...");
        let outcome = self.service.analyze(&request).await;
        busy.finish_and_clear();

        Ok(render::render_report(&outcome?))
    }

    /// Run the improve workflow and return the rendered result. Text is
    /// validated before focus areas.
    pub async fn improve(&self, text: &str, focus: &[String]) -> Result<String> {
        let request = ImproveRequest::new(text, focus)?;

        let busy = ui::busy("Improving...");
        let outcome = self.service.improve(&request).await;
        busy.finish_and_clear();

        Ok(render::render_improvement(&outcome?))
    }

    /// Ask the service whether it is up.
    pub async fn health(&self) -> Result<String> {
        let status = self.service.health().await?;
        Ok(render::render_health(&status))
    }
}
