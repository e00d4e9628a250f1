//! Aggregate change counters.

use serde::{Deserialize, Serialize};
use worddiff::{DiffSegment, SegmentKind};

use crate::error::{Metric, ReportError};

/// Words and lines added, removed and unchanged across a diff.
///
/// A segment's line contribution is the number of pieces its text splits
/// into on `\n`; normalized text has no newlines, so every segment counts
/// as one line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeTally {
    pub added_words: usize,
    pub removed_words: usize,
    pub unchanged_words: usize,
    pub added_lines: usize,
    pub removed_lines: usize,
    pub unchanged_lines: usize,
}

impl ChangeTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: &[DiffSegment]) -> Self {
        let mut tally = Self::new();
        for segment in segments {
            tally.record(segment);
        }
        tally
    }

    /// Count one segment.
    pub fn record(&mut self, segment: &DiffSegment) {
        let words = segment.word_count();
        let lines = segment.text.split('\n').count();
        let (word_counter, line_counter) = match segment.kind {
            SegmentKind::Inserted => (&mut self.added_words, &mut self.added_lines),
            SegmentKind::Deleted => (&mut self.removed_words, &mut self.removed_lines),
            SegmentKind::Kept => (&mut self.unchanged_words, &mut self.unchanged_lines),
        };
        *word_counter += words;
        *line_counter += lines;
    }

    pub fn total_words(&self) -> usize {
        self.added_words + self.removed_words + self.unchanged_words
    }

    pub fn total_lines(&self) -> usize {
        self.added_lines + self.removed_lines + self.unchanged_lines
    }

    pub fn changed_words(&self) -> usize {
        self.added_words + self.removed_words
    }

    pub fn changed_lines(&self) -> usize {
        self.added_lines + self.removed_lines
    }

    /// `(added + removed) / total × 100` over words.
    pub fn words_changed_percentage(&self) -> Result<f64, ReportError> {
        percentage(self.changed_words(), self.total_words(), Metric::Words)
    }

    /// `(added + removed) / total × 100` over lines.
    pub fn lines_changed_percentage(&self) -> Result<f64, ReportError> {
        percentage(self.changed_lines(), self.total_lines(), Metric::Lines)
    }
}

fn percentage(part: usize, total: usize, metric: Metric) -> Result<f64, ReportError> {
    if total == 0 {
        return Err(ReportError::DegenerateMetric { metric });
    }
    Ok(part as f64 / total as f64 * 100.0)
}
