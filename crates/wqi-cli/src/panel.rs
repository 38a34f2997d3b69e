//! Panel selection and per-panel form state

use std::fmt;
use std::str::FromStr;

use wqi_core::{Error, Purpose, Result};

/// The two mutually exclusive panels of an interactive session.
///
/// Parsing is closed: anything other than "analyze" or "improve" is an
/// error, never a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Analyze,
    Improve,
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Panel::Analyze => f.write_str("analyze"),
            Panel::Improve => f.write_str("improve"),
        }
    }
}

impl FromStr for Panel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "analyze" => Ok(Panel::Analyze),
            "improve" => Ok(Panel::Improve),
            other => Err(Error::InvalidInput(format!(
                "Unknown panel '{}'. Expected 'analyze' or 'improve'.",
                other
            ))),
        }
    }
}

/// Form state of the analyze panel.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeForm {
    pub purpose: Purpose,
    pub strict: bool,
}

/// Form state of the improve panel.
#[derive(Debug, Clone, Default)]
pub struct ImproveForm {
    pub focus: Vec<String>,
}

/// Interactive session state. Exactly one panel is active at a time; both
/// forms keep their values across switches.
#[derive(Debug, Default)]
pub struct Session {
    active: Panel,
    pub analyze: AnalyzeForm,
    pub improve: ImproveForm,
}

impl Session {
    pub fn active(&self) -> Panel {
        self.active
    }

    pub fn switch(&mut self, panel: Panel) {
        self.active = panel;
    }

    /// One-line description of the active panel's form, for `show`.
    pub fn describe_active(&self) -> String {
        match self.active {
            Panel::Analyze => format!(
                "analyze panel: purpose={}, strict={}",
                self.analyze.purpose,
                if self.analyze.strict { "on" } else { "off" }
            ),
            Panel::Improve => {
                if self.improve.focus.is_empty() {
                    "improve panel: focus=(none selected)".to_string()
                } else {
                    format!("improve panel: focus={}", self.improve.focus.join(", "))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_parses_both_names() {
        assert_eq!("analyze".parse::<Panel>().unwrap(), Panel::Analyze);
        assert_eq!("  Improve ".parse::<Panel>().unwrap(), Panel::Improve);
    }

    #[test]
    fn panel_rejects_unknown_names() {
        let err = "settings".parse::<Panel>().unwrap_err();
        assert!(err.to_string().contains("Unknown panel 'settings'"));
    }

    #[test]
    fn session_starts_on_analyze() {
        let session = Session::default();
        assert_eq!(session.active(), Panel::Analyze);
    }

    #[test]
    fn switching_changes_exactly_the_active_panel() {
        let mut session = Session::default();
        session.analyze.strict = true;

        session.switch(Panel::Improve);
        assert_eq!(session.active(), Panel::Improve);
        // The other form's state survives the switch.
        assert!(session.analyze.strict);

        session.switch(Panel::Analyze);
        assert_eq!(session.active(), Panel::Analyze);
    }

    #[test]
    fn describe_active_reflects_the_form() {
        let mut session = Session::default();
        assert_eq!(
            session.describe_active(),
            "analyze panel: purpose=general, strict=off"
        );

        session.switch(Panel::Improve);
        assert_eq!(
            session.describe_active(),
            "improve panel: focus=(none selected)"
        );

        session.improve.focus = vec!["grammar".to_string(), "tone".to_string()];
        assert_eq!(
            session.describe_active(),
            "improve panel: focus=grammar, tone"
        );
    }
}
