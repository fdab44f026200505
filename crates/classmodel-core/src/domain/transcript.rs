//! Narration produced by scripted walkthroughs.

use std::fmt;

use serde::Serialize;

/// Default line printed between walkthrough sections.
pub const DEFAULT_SEPARATOR: &str = "-------------------";

/// Lines produced by a walkthrough, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcript {
    lines: Vec<String>,
    #[serde(skip)]
    separator: String,
}

impl Transcript {
    pub fn new() -> Self {
        Self::with_separator(DEFAULT_SEPARATOR)
    }

    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            lines: Vec::new(),
            separator: separator.into(),
        }
    }

    /// Record one printed line.
    pub fn say(&mut self, line: impl fmt::Display) {
        self.lines.push(line.to_string());
    }

    /// Record a section break.
    pub fn separator(&mut self) {
        let line = self.separator.clone();
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
