//! YAML configuration file support.
//!
//! A single file holds the settings for every comparison stage plus an
//! optional list of named document pairs to compare in one run.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "monthly statements"
//!
//! threshold: 0.95
//! output_dir: "downloads"
//!
//! canonical:
//!   version: 1
//!   normalize_unicode: false
//!   lowercase: true
//!   mask_dates: true
//!   date_sentinel: "DATE"
//!
//! similarity:
//!   ignore_whitespace: false
//!
//! report:
//!   title: "Document comparison report"
//!   line_width: 80
//!   line_number_width: 4
//!
//! pairs:
//!   - name: "statement"
//!     generated: "out/statement.txt"
//!     reference: "reference/statement.txt"
//! ```
//!
//! Relative pair paths and `output_dir` are resolved against the directory
//! holding the file when it is loaded with [`DoccmpConfig::from_file`].
//! Each pair's report is named after its generated document's file stem, so
//! two pairs whose generated documents share a stem are rejected.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use canonical::NormalizeConfig;
use report::ReportConfig;
use serde::{Deserialize, Serialize};
use similarity::SimilarityConfig;
use thiserror::Error;

use crate::output::report_file_name_for;
use crate::{CompareConfig, DEFAULT_THRESHOLD};

/// Output directory used when neither the file nor the command line sets one.
pub const DEFAULT_OUTPUT_DIR: &str = "downloads";

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DoccmpConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Where failure reports are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub canonical: NormalizeConfig,

    #[serde(default)]
    pub similarity: SimilarityConfig,

    #[serde(default)]
    pub report: ReportConfig,

    /// Document pairs compared in one run.
    #[serde(default)]
    pub pairs: Vec<PairSpec>,
}

/// One named pair of documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairSpec {
    /// Used in log lines and the run summary.
    pub name: String,
    /// Its file stem names the failure report.
    pub generated: PathBuf,
    pub reference: PathBuf,
}

impl DoccmpConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&content)?;
        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        Ok(config)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: DoccmpConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Settings handed to [`crate::compare`].
    pub fn compare_config(&self) -> CompareConfig {
        CompareConfig {
            threshold: self.threshold,
            normalize: self.canonical.clone(),
            similarity: self.similarity.clone(),
            report: self.report.clone(),
        }
    }

    /// Join relative pair paths and the output directory onto `base`.
    pub fn resolve_relative_to(&mut self, base: &Path) {
        if self.output_dir.is_relative() {
            self.output_dir = base.join(&self.output_dir);
        }
        for pair in &mut self.pairs {
            for path in [&mut pair.generated, &mut pair.reference] {
                if path.is_relative() {
                    *path = base.join(&*path);
                }
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.compare_config()
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;

        let mut seen = HashSet::new();
        let mut report_names = HashSet::new();
        for (i, pair) in self.pairs.iter().enumerate() {
            if pair.name.trim().is_empty() {
                return Err(ConfigLoadError::Validation(format!(
                    "pairs[{i}].name must not be empty"
                )));
            }
            if !seen.insert(pair.name.as_str()) {
                return Err(ConfigLoadError::Validation(format!(
                    "duplicate pair name {:?}",
                    pair.name
                )));
            }
            if pair.generated.as_os_str().is_empty() || pair.reference.as_os_str().is_empty() {
                return Err(ConfigLoadError::Validation(format!(
                    "pair {:?} needs both generated and reference paths",
                    pair.name
                )));
            }
            let report_name = report_file_name_for(&pair.generated);
            if !report_names.insert(report_name.clone()) {
                return Err(ConfigLoadError::Validation(format!(
                    "pair {:?} would overwrite report {report_name}",
                    pair.name
                )));
            }
        }

        Ok(())
    }
}

impl Default for DoccmpConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            threshold: DEFAULT_THRESHOLD,
            output_dir: default_output_dir(),
            canonical: NormalizeConfig::default(),
            similarity: SimilarityConfig::default(),
            report: ReportConfig::default(),
            pairs: Vec::new(),
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}
