//! Terminal front-end for the writing quality inspector
//!
//! Holds the two workflows (analyze, improve), the interactive panel state,
//! and the rendering/input helpers the binary wires together.

mod panel;
mod render;
mod score;
mod ui;
mod workflows;

#[cfg(test)]
mod tests;

pub use panel::{AnalyzeForm, ImproveForm, Panel, Session};
pub use score::Band;
pub use ui::{display_banner, print_help, read_line_with_history};
pub use workflows::Inspector;

// Re-export core types
pub use wqi_core::{Error, Result};
