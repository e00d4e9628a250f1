//! Report layout configuration.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Narrowest body line that still fits a marker, a space and one character.
pub const MIN_LINE_WIDTH: usize = 5;

/// Layout of a generated report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// First line of the report; underlined with `=`.
    pub title: String,
    /// Maximum characters per body line, marker included, number excluded.
    ///
    /// A single word longer than this still gets a line of its own rather
    /// than being split.
    pub line_width: usize,
    /// Width the body line numbers are left-padded to.
    pub line_number_width: usize,
    /// `strftime`-style format for the generation timestamp.
    pub timestamp_format: String,
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }

    pub fn with_line_number_width(mut self, width: usize) -> Self {
        self.line_number_width = width;
        self
    }

    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    pub fn validate(&self) -> Result<(), ReportError> {
        if self.title.trim().is_empty() {
            return Err(ReportError::InvalidConfig("title must not be empty".into()));
        }
        if self.line_width < MIN_LINE_WIDTH {
            return Err(ReportError::InvalidConfig(format!(
                "line_width must be >= {MIN_LINE_WIDTH}, got {}",
                self.line_width
            )));
        }
        if self.line_number_width == 0 {
            return Err(ReportError::InvalidConfig(
                "line_number_width must be >= 1".into(),
            ));
        }
        // chrono only reports a bad specifier when the timestamp is rendered.
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(ReportError::InvalidConfig(format!(
                "timestamp_format {:?} is not a valid strftime format",
                self.timestamp_format
            )));
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Document comparison report".to_string(),
            line_width: 80,
            line_number_width: 4,
            timestamp_format: "%Y-%m-%d %H:%M:%S UTC".to_string(),
        }
    }
}

/// Names of the two compared sources, as shown in the report header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceLabels {
    pub left: String,
    pub right: String,
}

impl SourceLabels {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

impl Default for SourceLabels {
    fn default() -> Self {
        Self::new("document A", "document B")
    }
}
