//! Shared enums used by both the CLI and the TUI

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the analyzer input box contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Free text, analyzed as-is
    #[default]
    Text,
    /// Article link, extracted server-side before analysis
    Url,
}

impl InputMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Text => Self::Url,
            Self::Url => Self::Text,
        }
    }

    /// Label of the mode switcher button
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Enter Text",
            Self::Url => "Paste Article Link",
        }
    }

    /// Placeholder shown in an empty input box
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Text => "Paste text here...",
            Self::Url => "Paste article link here...",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Url => write!(f, "url"),
        }
    }
}
