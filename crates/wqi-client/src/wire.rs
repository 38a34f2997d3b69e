//! Wire-format adapters for the inspector API
//!
//! The improve endpoint has shipped the improved text under two different
//! keys across service versions. `ImproveResponseWire` absorbs both here, at
//! the network boundary, so the rest of the client only ever sees
//! [`Improvement`].

use serde::Deserialize;
use tracing::warn;

use wqi_core::{Error, Improvement, Result};

#[derive(Debug, Deserialize)]
pub(crate) struct ImproveResponseWire {
    /// Key used by the current service schema.
    #[serde(default)]
    improved_text: Option<String>,
    /// Key used before the schema rename; wins when both are present.
    #[serde(default)]
    improvements: Option<String>,
    explanation: String,
    #[serde(default)]
    changes_made: Vec<String>,
    #[serde(default)]
    original_text: Option<String>,
}

impl ImproveResponseWire {
    pub(crate) fn into_improvement(self) -> Result<Improvement> {
        let improved_text = match (self.improvements, self.improved_text) {
            (Some(legacy), _) => {
                warn!("service answered with the legacy 'improvements' key");
                legacy
            }
            (None, Some(current)) => current,
            (None, None) => {
                return Err(Error::Schema(
                    "response carries neither 'improved_text' nor 'improvements'".to_string(),
                ));
            }
        };

        Ok(Improvement {
            improved_text,
            explanation: self.explanation,
            changes_made: self.changes_made,
            original_text: self.original_text,
        })
    }
}
