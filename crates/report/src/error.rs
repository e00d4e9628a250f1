use std::fmt;

use thiserror::Error;

/// Which change percentage a [`ReportError::DegenerateMetric`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Words,
    Lines,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Words => f.write_str("words"),
            Metric::Lines => f.write_str("lines"),
        }
    }
}

/// Errors that can occur while building a report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// A change percentage was requested over a tally with no counted
    /// units, so the ratio is undefined.
    #[error("{metric} changed percentage is undefined: total {metric} is zero")]
    DegenerateMetric { metric: Metric },
    #[error("invalid report configuration: {0}")]
    InvalidConfig(String),
}
