//! Workflow tests against an in-memory service double

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use wqi_core::{
    AnalysisReport, AnalyzeRequest, Error, HealthStatus, Improvement, ImproveRequest, Purpose,
    QualityService, Result, Scores,
};

use crate::workflows::Inspector;

/// Counts calls so tests can assert that validation failures never reach
/// the service. `fail_first` makes only the first call error.
#[derive(Default)]
struct MockService {
    analyze_calls: Arc<AtomicUsize>,
    improve_calls: Arc<AtomicUsize>,
    fail_first: bool,
}

impl MockService {
    fn failing_first() -> Self {
        Self {
            fail_first: true,
            ..Self::default()
        }
    }

    fn report() -> AnalysisReport {
        AnalysisReport {
            overall_score: 85.0,
            scores: Scores {
                clarity: 90.0,
                coherence: 80.0,
                grammar: 95.0,
                tone_consistency: 70.0,
                originality: None,
                verbosity: None,
            },
            summary: "Solid draft".to_string(),
            strengths: vec!["Clear intro".to_string()],
            weaknesses: vec!["Weak ending".to_string()],
            ai_likeness: None,
            suggestions: Vec::new(),
        }
    }

    fn improvement() -> Improvement {
        Improvement {
            improved_text: "Better text".to_string(),
            explanation: "Fixed grammar".to_string(),
            changes_made: vec!["Fixed typo".to_string()],
            original_text: None,
        }
    }
}

#[async_trait]
impl QualityService for MockService {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisReport> {
        let call = self.analyze_calls.fetch_add(1, Ordering::SeqCst);
        assert!(!request.text.trim().is_empty());
        if self.fail_first && call == 0 {
            return Err(Error::Network("connection refused".to_string()));
        }
        Ok(Self::report())
    }

    async fn improve(&self, request: &ImproveRequest) -> Result<Improvement> {
        let call = self.improve_calls.fetch_add(1, Ordering::SeqCst);
        assert!(!request.focus.is_empty());
        if self.fail_first && call == 0 {
            return Err(Error::Network("connection refused".to_string()));
        }
        Ok(Self::improvement())
    }

    async fn health(&self) -> Result<HealthStatus> {
        Ok(HealthStatus {
            status: "ok".to_string(),
            service: Some("Writing Quality Inspector".to_string()),
        })
    }
}

fn no_color() {
    colored::control::set_override(false);
}

#[tokio::test]
async fn analyze_with_blank_text_sends_nothing() {
    let service = MockService::default();
    let calls = service.analyze_calls.clone();
    let inspector = Inspector::new(service);

    let err = inspector
        .analyze("   \n", Purpose::General, false)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Please enter some text first."));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn improve_without_focus_sends_nothing() {
    let service = MockService::default();
    let calls = service.improve_calls.clone();
    let inspector = Inspector::new(service);

    let err = inspector
        .improve("A perfectly fine sentence.", &[])
        .await
        .unwrap_err();

    assert!(err.to_string().contains("at least one focus area"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn improve_reports_blank_text_before_missing_focus() {
    let inspector = Inspector::new(MockService::default());

    let err = inspector.improve("  ", &[]).await.unwrap_err();

    assert!(err.to_string().contains("Please enter text."));
}

#[tokio::test]
async fn analyze_renders_the_report() {
    no_color();
    let inspector = Inspector::new(MockService::default());

    let out = inspector
        .analyze("Hello world", Purpose::Email, false)
        .await
        .unwrap();

    assert!(out.contains("Overall score: 85"));
    assert!(out.contains("Clarity:          90"));
    assert!(out.contains("Coherence:        80"));
    assert!(out.contains("Grammar:          95"));
    assert!(out.contains("Tone consistency: 70"));
    assert!(out.contains("Solid draft"));
    assert!(out.contains("• Clear intro"));
    assert!(out.contains("• Weak ending"));
}

#[tokio::test]
async fn improve_renders_the_result() {
    no_color();
    let inspector = Inspector::new(MockService::default());

    let out = inspector
        .improve("Helo world", &["grammar".to_string()])
        .await
        .unwrap();

    assert!(out.contains("Better text"));
    assert!(out.contains("Fixed grammar"));
    assert!(out.contains("• Fixed typo"));
}

#[tokio::test]
async fn a_failed_call_surfaces_and_the_next_one_succeeds() {
    no_color();
    let service = MockService::failing_first();
    let calls = service.analyze_calls.clone();
    let inspector = Inspector::new(service);

    let err = inspector
        .analyze("Hello world", Purpose::General, false)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("connection refused"));

    // The same inspector stays usable afterwards.
    let out = inspector
        .analyze("Hello world", Purpose::General, false)
        .await
        .unwrap();
    assert!(out.contains("Overall score: 85"));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn health_renders_service_status() {
    no_color();
    let inspector = Inspector::new(MockService::default());

    let out = inspector.health().await.unwrap();
    assert!(out.contains("Writing Quality Inspector is up"));
}
