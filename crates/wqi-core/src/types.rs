//! Request and response types for the writing quality service

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Intended purpose of the submitted text, sent as a lowercase string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    #[default]
    General,
    Academic,
    Email,
    Blog,
    Casual,
}

impl Purpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            Purpose::General => "general",
            Purpose::Academic => "academic",
            Purpose::Email => "email",
            Purpose::Blog => "blog",
            Purpose::Casual => "casual",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Purpose {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(Purpose::General),
            "academic" => Ok(Purpose::Academic),
            "email" => Ok(Purpose::Email),
            "blog" => Ok(Purpose::Blog),
            "casual" => Ok(Purpose::Casual),
            other => Err(Error::InvalidInput(format!(
                "Unknown purpose '{}'. Expected one of: general, academic, email, blog, casual.",
                other
            ))),
        }
    }
}

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    pub text: String,
    pub purpose: Purpose,
    pub strict: bool,
}

impl AnalyzeRequest {
    /// Build a request, rejecting empty or whitespace-only text. The text is
    /// sent as entered; trimming applies to the check only.
    pub fn new(text: impl Into<String>, purpose: Purpose, strict: bool) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::InvalidInput(
                "Please enter some text first.".to_string(),
            ));
        }
        Ok(Self {
            text,
            purpose,
            strict,
        })
    }
}

/// Body of `POST /improve`. The tone is always preserved.
#[derive(Debug, Clone, Serialize)]
pub struct ImproveRequest {
    pub text: String,
    pub focus: Vec<String>,
    pub preserve_tone: bool,
}

impl ImproveRequest {
    /// Build a request. Text is checked before focus areas, so an empty text
    /// is reported even when the focus list is also empty. Focus areas keep
    /// their first-seen order; duplicates and blank entries are dropped.
    pub fn new(text: impl Into<String>, focus: &[String]) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::InvalidInput("Please enter text.".to_string()));
        }

        let mut seen: Vec<String> = Vec::new();
        for area in focus {
            let area = area.trim();
            if area.is_empty() || seen.iter().any(|s| s == area) {
                continue;
            }
            seen.push(area.to_string());
        }
        if seen.is_empty() {
            return Err(Error::InvalidInput(
                "Please select at least one focus area.".to_string(),
            ));
        }

        Ok(Self {
            text,
            focus: seen,
            preserve_tone: true,
        })
    }
}

/// Per-rubric scores. The first four are part of the stable contract;
/// `originality` and `verbosity` only appear on newer servers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scores {
    pub clarity: f64,
    pub coherence: f64,
    pub grammar: f64,
    pub tone_consistency: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub originality: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbosity: Option<f64>,
}

/// Result of an analyze call.
///
/// List fields tolerate being absent (rendered as "None detected"); the
/// scalar fields are required and a response missing one is rejected as
/// malformed rather than rendered blank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub overall_score: f64,
    pub scores: Scores,
    pub summary: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_likeness: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

/// Result of an improve call, after wire-level key resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Improvement {
    pub improved_text: String,
    pub explanation: String,
    #[serde(default)]
    pub changes_made: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
