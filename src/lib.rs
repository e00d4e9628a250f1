//! Workspace umbrella crate for document comparison.
//!
//! This crate stitches the normalization, similarity, diff and report stages
//! together so callers can compare two extracted texts with a single entry
//! point. [`compare`] normalizes both inputs, scores them, and only when the
//! score does not exceed the threshold builds a word diff and a report.

pub mod config;
pub mod output;
pub mod runner;

pub use canonical::{
    CanonicalError, DEFAULT_DATE_SENTINEL, NormalizeConfig, NormalizedText, Token,
    collapse_whitespace, mask_dates, normalize, normalize_bytes, tokenize,
};
pub use config::{ConfigLoadError, DoccmpConfig, PairSpec};
pub use report::{
    ChangeTally, MIN_LINE_WIDTH, Metric, Report, ReportConfig, ReportError, SourceLabels,
    format_report,
};
pub use similarity::{Bigrams, SimilarityConfig, similarity, similarity_with};
pub use worddiff::{
    DiffSegment, SegmentKind, diff_normalized, diff_words, reconstruct_left, reconstruct_right,
};

use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{Level, debug, info, warn};

/// Similarity a pair must strictly exceed to count as equivalent.
pub const DEFAULT_THRESHOLD: f64 = 0.95;

/// Errors that can abort a single comparison.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompareError {
    #[error("normalization failure: {0}")]
    Canonical(#[from] CanonicalError),
    #[error("report failure: {0}")]
    Report(#[from] ReportError),
    #[error("invalid comparison configuration: {0}")]
    InvalidConfig(String),
}

/// Settings for every stage of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Pass/fail cutoff; a pair is equivalent only when its score is
    /// strictly greater than this value.
    pub threshold: f64,
    pub normalize: NormalizeConfig,
    pub similarity: SimilarityConfig,
    pub report: ReportConfig,
}

impl CompareConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_normalize(mut self, normalize: NormalizeConfig) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_similarity(mut self, similarity: SimilarityConfig) -> Self {
        self.similarity = similarity;
        self
    }

    pub fn with_report(mut self, report: ReportConfig) -> Self {
        self.report = report;
        self
    }

    pub fn validate(&self) -> Result<(), CompareError> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(CompareError::InvalidConfig(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        self.normalize.validate()?;
        self.report.validate()?;
        Ok(())
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            normalize: NormalizeConfig::default(),
            similarity: SimilarityConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// Outcome of one comparison.
///
/// `report` is present exactly when `is_equivalent` is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub is_equivalent: bool,
    pub similarity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<Report>,
}

impl ComparisonResult {
    /// Score scaled to `[0, 100]`.
    pub fn similarity_percentage(&self) -> f64 {
        self.similarity * 100.0
    }
}

/// Metrics observer for comparison stages.
pub trait ComparisonMetrics: Send + Sync {
    fn record_normalize(&self, latency: Duration, result: Result<(), CanonicalError>);
    fn record_similarity(&self, latency: Duration, score: f64);
    /// Covers both the word diff and report assembly.
    fn record_diff(&self, latency: Duration, result: Result<(), ReportError>);
}

/// Install or clear the global comparison metrics recorder.
pub fn set_comparison_metrics(recorder: Option<Arc<dyn ComparisonMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn ComparisonMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn ComparisonMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn ComparisonMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Arc<dyn ComparisonMetrics>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    fn record_normalize(self, result: Result<(), CanonicalError>) {
        self.recorder.record_normalize(self.start.elapsed(), result);
    }

    fn record_similarity(self, score: f64) {
        self.recorder.record_similarity(self.start.elapsed(), score);
    }

    fn record_diff(self, result: Result<(), ReportError>) {
        self.recorder.record_diff(self.start.elapsed(), result);
    }
}

/// Compare two texts, stamping any report with the current time.
pub fn compare(
    a: &str,
    b: &str,
    labels: &SourceLabels,
    cfg: &CompareConfig,
) -> Result<ComparisonResult, CompareError> {
    compare_at(a, b, labels, cfg, Utc::now())
}

/// Compare two texts with an explicit report timestamp.
///
/// The result is a pure function of the arguments.
pub fn compare_at(
    a: &str,
    b: &str,
    labels: &SourceLabels,
    cfg: &CompareConfig,
    generated_at: DateTime<Utc>,
) -> Result<ComparisonResult, CompareError> {
    cfg.validate()?;
    let left = normalize_stage(|| normalize(a, &cfg.normalize))?;
    let right = normalize_stage(|| normalize(b, &cfg.normalize))?;
    compare_normalized(&left, &right, labels, cfg, generated_at)
}

/// Compare two byte buffers that should hold UTF-8 text.
///
/// Undecodable input fails with [`CanonicalError::InvalidInput`].
pub fn compare_bytes(
    a: &[u8],
    b: &[u8],
    labels: &SourceLabels,
    cfg: &CompareConfig,
) -> Result<ComparisonResult, CompareError> {
    cfg.validate()?;
    let left = normalize_stage(|| normalize_bytes(a, &cfg.normalize))?;
    let right = normalize_stage(|| normalize_bytes(b, &cfg.normalize))?;
    compare_normalized(&left, &right, labels, cfg, Utc::now())
}

fn normalize_stage(
    run: impl FnOnce() -> Result<NormalizedText, CanonicalError>,
) -> Result<NormalizedText, CanonicalError> {
    let mut normalize_metrics = MetricsSpan::start();
    match run() {
        Ok(text) => {
            if let Some(span) = normalize_metrics.take() {
                span.record_normalize(Ok(()));
            }
            debug!(words = text.word_count(), "normalize_success");
            Ok(text)
        }
        Err(err) => {
            if let Some(span) = normalize_metrics.take() {
                span.record_normalize(Err(err.clone()));
            }
            warn!(error = %err, "normalize_failure");
            Err(err)
        }
    }
}

fn compare_normalized(
    left: &NormalizedText,
    right: &NormalizedText,
    labels: &SourceLabels,
    cfg: &CompareConfig,
    generated_at: DateTime<Utc>,
) -> Result<ComparisonResult, CompareError> {
    let span = tracing::span!(
        Level::INFO,
        "doccmp.compare",
        left = %labels.left,
        right = %labels.right
    );
    let _guard = span.enter();

    let similarity_metrics = MetricsSpan::start();
    let score = similarity_with(left.as_str(), right.as_str(), &cfg.similarity);
    if let Some(span) = similarity_metrics {
        span.record_similarity(score);
    }

    let is_equivalent = score > cfg.threshold;
    info!(
        similarity = %format!("{:.2}%", score * 100.0),
        threshold = cfg.threshold,
        is_equivalent,
        "similarity_scored"
    );
    if is_equivalent {
        return Ok(ComparisonResult {
            is_equivalent,
            similarity: score,
            report: None,
        });
    }

    let mut diff_metrics = MetricsSpan::start();
    let segments = diff_normalized(left, right);
    debug!(segments = segments.len(), "diff_computed");
    match format_report(&segments, score, labels, generated_at, &cfg.report) {
        Ok(report) => {
            if let Some(span) = diff_metrics.take() {
                span.record_diff(Ok(()));
            }
            info!(
                added_words = report.tally.added_words,
                removed_words = report.tally.removed_words,
                unchanged_words = report.tally.unchanged_words,
                "report_built"
            );
            Ok(ComparisonResult {
                is_equivalent,
                similarity: score,
                report: Some(report),
            })
        }
        Err(err) => {
            if let Some(span) = diff_metrics.take() {
                span.record_diff(Err(err.clone()));
            }
            warn!(error = %err, "report_failure");
            Err(CompareError::Report(err))
        }
    }
}
