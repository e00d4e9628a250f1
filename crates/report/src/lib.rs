//! Plain-text difference reports.
//!
//! [`format_report`] turns a word diff into a line-numbered report made of
//! three blocks:
//!
//! 1. a header with the title, generation timestamp, both source labels, the
//!    similarity score and a legend of the line markers
//! 2. the diff body, wrapped to [`ReportConfig::line_width`] characters per
//!    line; each line starts with the marker of the segment that opened it
//!    (`[-]` removed, `[+]` added, `[ ]` unchanged)
//! 3. a change summary with the six counters of [`ChangeTally`] and the
//!    percentage of changed words and lines
//!
//! The timestamp is passed in rather than read from the clock, so a report
//! is a pure function of its inputs.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use report::{format_report, ReportConfig, SourceLabels};
//! use worddiff::diff_words;
//!
//! let segments = diff_words("balance 10 eur", "balance 12 eur");
//! let at = Utc.with_ymd_and_hms(2024, 1, 31, 9, 0, 0).unwrap();
//! let report = format_report(
//!     &segments,
//!     0.8,
//!     &SourceLabels::new("ours.txt", "theirs.txt"),
//!     at,
//!     &ReportConfig::default(),
//! )
//! .unwrap();
//!
//! assert!(report.to_string().contains("   1 [ ] balance 10 12 eur"));
//! assert_eq!(report.tally.added_words, 1);
//! ```

mod config;
mod error;
mod format;
mod tally;

pub use crate::config::{ReportConfig, SourceLabels, MIN_LINE_WIDTH};
pub use crate::error::{Metric, ReportError};
pub use crate::format::{format_report, Report};
pub use crate::tally::ChangeTally;
