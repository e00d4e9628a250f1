//! Report assembly: header, wrapped diff body, change summary.

use std::fmt;
use std::io::{self, Write};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use worddiff::{DiffSegment, SegmentKind};

use crate::config::{ReportConfig, SourceLabels};
use crate::error::ReportError;
use crate::tally::ChangeTally;

/// A finished difference report.
///
/// Immutable once built; the caller decides where it goes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Every line of the report, without line terminators.
    pub lines: Vec<String>,
    /// Counters the summary block was rendered from.
    pub tally: ChangeTally,
}

impl Report {
    /// The numbered diff lines only.
    pub fn body(&self) -> impl Iterator<Item = &str> {
        let start = self
            .lines
            .iter()
            .rposition(|l| l == BODY_HEADING)
            .map_or(self.lines.len(), |i| i + 3);
        let end = self
            .lines
            .iter()
            .rposition(|l| l == SUMMARY_HEADING)
            .map_or(self.lines.len(), |i| i.saturating_sub(1));
        self.lines[start..end.max(start)].iter().map(String::as_str)
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(writer, "{line}")?;
        }
        writer.flush()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

const BODY_HEADING: &str = "Differences:";
const SUMMARY_HEADING: &str = "Change summary:";

/// Build the report for a diff.
///
/// `similarity` is the score in `[0, 1]`; the header shows it as a
/// percentage with two decimals. `generated_at` is injected so that the
/// same inputs always give the same report.
///
/// Fails with [`ReportError::DegenerateMetric`] when `segments` holds no
/// words, since the change percentages are then undefined.
pub fn format_report(
    segments: &[DiffSegment],
    similarity: f64,
    labels: &SourceLabels,
    generated_at: DateTime<Utc>,
    cfg: &ReportConfig,
) -> Result<Report, ReportError> {
    cfg.validate()?;

    let mut lines = Vec::new();
    push_header(&mut lines, similarity, labels, generated_at, cfg);

    let mut tally = ChangeTally::new();
    let mut wrapper = LineWrapper::new(cfg.line_width, cfg.line_number_width);
    for segment in segments {
        for word in segment.words() {
            wrapper.push_word(segment.kind, word);
        }
        tally.record(segment);
    }
    lines.extend(wrapper.finish());

    push_summary(&mut lines, &tally)?;

    Ok(Report { lines, tally })
}

fn push_header(
    lines: &mut Vec<String>,
    similarity: f64,
    labels: &SourceLabels,
    generated_at: DateTime<Utc>,
    cfg: &ReportConfig,
) {
    push_heading(lines, &cfg.title);
    lines.push(String::new());
    lines.push(format!(
        "Generated: {}",
        generated_at.format(&cfg.timestamp_format)
    ));
    lines.push(format!("Source 1: {}", labels.left));
    lines.push(format!("Source 2: {}", labels.right));
    lines.push(format!("Similarity: {:.2}%", similarity * 100.0));
    lines.push(String::new());
    lines.push("Legend:".to_string());
    for (kind, meaning) in [
        (SegmentKind::Deleted, "Removed text"),
        (SegmentKind::Inserted, "Added text"),
        (SegmentKind::Kept, "Unchanged text"),
    ] {
        lines.push(format!("  {} {meaning}", kind.marker()));
    }
    lines.push(String::new());
    push_heading(lines, BODY_HEADING);
    lines.push(String::new());
}

fn push_summary(lines: &mut Vec<String>, tally: &ChangeTally) -> Result<(), ReportError> {
    let words_pct = tally.words_changed_percentage()?;
    let lines_pct = tally.lines_changed_percentage()?;

    lines.push(String::new());
    push_heading(lines, SUMMARY_HEADING);
    lines.push(format!("Words added: {}", tally.added_words));
    lines.push(format!("Words removed: {}", tally.removed_words));
    lines.push(format!("Words unchanged: {}", tally.unchanged_words));
    lines.push(format!("Lines added: {}", tally.added_lines));
    lines.push(format!("Lines removed: {}", tally.removed_lines));
    lines.push(format!("Lines unchanged: {}", tally.unchanged_lines));
    lines.push(format!("Total words: {}", tally.total_words()));
    lines.push(format!("Total lines: {}", tally.total_lines()));
    lines.push(format!("Words changed: {words_pct:.2}%"));
    lines.push(format!("Lines changed: {lines_pct:.2}%"));
    Ok(())
}

fn push_heading(lines: &mut Vec<String>, heading: &str) {
    lines.push(heading.to_string());
    lines.push("=".repeat(heading.chars().count()));
}

/// Packs words into numbered lines of bounded width.
///
/// A line carries the marker of the word that started it; words appended
/// later keep no marker of their own, even when their segment kind differs.
struct LineWrapper {
    width: usize,
    number_width: usize,
    next_number: usize,
    buffer: String,
    buffer_chars: usize,
    lines: Vec<String>,
}

impl LineWrapper {
    fn new(width: usize, number_width: usize) -> Self {
        Self {
            width,
            number_width,
            next_number: 1,
            buffer: String::new(),
            buffer_chars: 0,
            lines: Vec::new(),
        }
    }

    fn push_word(&mut self, kind: SegmentKind, word: &str) {
        let word_chars = word.chars().count();
        if !self.buffer.is_empty() && self.buffer_chars + 1 + word_chars > self.width {
            self.flush();
        }
        if self.buffer.is_empty() {
            let marker = kind.marker();
            self.buffer.push_str(marker);
            self.buffer_chars = marker.chars().count();
        }
        self.buffer.push(' ');
        self.buffer.push_str(word);
        self.buffer_chars += 1 + word_chars;
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        self.lines.push(format!(
            "{:>width$} {}",
            self.next_number,
            self.buffer,
            width = self.number_width
        ));
        self.next_number += 1;
        self.buffer.clear();
        self.buffer_chars = 0;
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.lines
    }
}
