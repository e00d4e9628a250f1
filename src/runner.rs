//! Runs a batch of document pairs and writes a report for each failure.
//!
//! The binary is a thin shell over this module: it picks the pairs, chooses
//! a [`ReportTarget`], and maps [`RunSummary::all_equivalent`] to the exit
//! status.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{DEFAULT_OUTPUT_DIR, DoccmpConfig, PairSpec};
use crate::output::{report_path_for, write_report};
use crate::{CompareConfig, CompareError, SourceLabels, compare_bytes};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("nothing to compare: pass two documents or a config with `pairs`")]
    NothingToCompare,

    #[error("an exact report path only applies to a single pair, got {0} pairs")]
    ExactPathForMany(usize),

    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("comparing pair {pair:?}: {source}")]
    Compare {
        pair: String,
        #[source]
        source: CompareError,
    },

    #[error("writing report {path}: {source}")]
    WriteReport {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where failure reports land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportTarget {
    /// One explicit file; valid for a single pair only.
    File(PathBuf),
    /// `differences_<stem>.txt` under this directory, keyed on the
    /// generated document's file stem.
    Directory(PathBuf),
}

impl Default for ReportTarget {
    fn default() -> Self {
        ReportTarget::Directory(PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}

impl ReportTarget {
    pub fn path_for(&self, pair: &PairSpec) -> PathBuf {
        match self {
            ReportTarget::File(path) => path.clone(),
            ReportTarget::Directory(dir) => report_path_for(dir, &pair.generated),
        }
    }
}

/// Result of one pair, as printed by the binary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairOutcome {
    pub name: String,
    pub is_equivalent: bool,
    pub similarity: f64,
    pub similarity_percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub outcomes: Vec<PairOutcome>,
}

impl RunSummary {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_equivalent).count()
    }

    pub fn all_equivalent(&self) -> bool {
        self.passed() == self.outcomes.len()
    }
}

/// The pairs to run: an explicit pair wins over the config's `pairs` list.
pub fn select_pairs(
    explicit: Option<(PathBuf, PathBuf)>,
    config: &DoccmpConfig,
) -> Result<Vec<PairSpec>, RunError> {
    match explicit {
        Some((generated, reference)) => Ok(vec![PairSpec {
            name: display_stem(&generated),
            generated,
            reference,
        }]),
        None if !config.pairs.is_empty() => Ok(config.pairs.clone()),
        None => Err(RunError::NothingToCompare),
    }
}

/// Compare every pair in order, stopping at the first hard error.
pub fn run_pairs(
    pairs: &[PairSpec],
    cfg: &CompareConfig,
    target: &ReportTarget,
) -> Result<RunSummary, RunError> {
    if matches!(target, ReportTarget::File(_)) && pairs.len() != 1 {
        return Err(RunError::ExactPathForMany(pairs.len()));
    }
    info!(pairs = pairs.len(), threshold = cfg.threshold, "comparison_run_start");

    let outcomes = pairs
        .iter()
        .map(|pair| run_pair(pair, cfg, &target.path_for(pair)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RunSummary { outcomes })
}

/// Compare one pair; a failed comparison writes its report to `report_path`.
pub fn run_pair(
    pair: &PairSpec,
    cfg: &CompareConfig,
    report_path: &Path,
) -> Result<PairOutcome, RunError> {
    let generated = read(&pair.generated)?;
    let reference = read(&pair.reference)?;
    let labels = SourceLabels::new(
        pair.generated.display().to_string(),
        pair.reference.display().to_string(),
    );

    let result =
        compare_bytes(&generated, &reference, &labels, cfg).map_err(|source| RunError::Compare {
            pair: pair.name.clone(),
            source,
        })?;
    let percentage = format!("{:.2}%", result.similarity_percentage());

    let written = match &result.report {
        Some(report) => {
            write_report(report, report_path).map_err(|source| RunError::WriteReport {
                path: report_path.to_path_buf(),
                source,
            })?;
            warn!(
                pair = %pair.name,
                similarity = %percentage,
                report = %report_path.display(),
                "pair_differs"
            );
            Some(report_path.to_path_buf())
        }
        None => {
            info!(pair = %pair.name, similarity = %percentage, "pair_equivalent");
            None
        }
    };

    Ok(PairOutcome {
        name: pair.name.clone(),
        is_equivalent: result.is_equivalent,
        similarity: result.similarity,
        similarity_percentage: result.similarity_percentage(),
        report_path: written,
    })
}

fn read(path: &Path) -> Result<Vec<u8>, RunError> {
    fs::read(path).map_err(|source| RunError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn display_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(dir: &Path, name: &str, generated: &str, reference: &str) -> PairSpec {
        let spec = PairSpec {
            name: name.to_string(),
            generated: dir.join(format!("gen_{name}.txt")),
            reference: dir.join(format!("ref_{name}.txt")),
        };
        fs::write(&spec.generated, generated).unwrap();
        fs::write(&spec.reference, reference).unwrap();
        spec
    }

    #[test]
    fn explicit_pair_is_named_after_generated_stem() {
        let pairs = select_pairs(
            Some(("out/releve.txt".into(), "ref/releve.txt".into())),
            &DoccmpConfig::default(),
        )
        .unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].name, "releve");
    }

    #[test]
    fn no_pairs_is_an_error() {
        let err = select_pairs(None, &DoccmpConfig::default()).unwrap_err();
        assert!(matches!(err, RunError::NothingToCompare));
    }

    #[test]
    fn directory_target_uses_generated_stem_not_pair_name() {
        let spec = PairSpec {
            name: "monthly".to_string(),
            generated: PathBuf::from("gen/statement_03.txt"),
            reference: PathBuf::from("ref/statement_03.txt"),
        };
        let target = ReportTarget::Directory(PathBuf::from("reports"));
        assert_eq!(
            target.path_for(&spec),
            PathBuf::from("reports/differences_statement_03.txt")
        );
        let exact = ReportTarget::File(PathBuf::from("out.txt"));
        assert_eq!(exact.path_for(&spec), PathBuf::from("out.txt"));
    }

    #[test]
    fn failures_write_reports_and_passes_do_not() {
        let dir = tempfile::tempdir().unwrap();
        let same = pair(dir.path(), "same", "Total 10 01/02/2023", "total 10 05/06/2024");
        let diff = pair(dir.path(), "diff", "line one line two", "line one line 2 line three");
        let reports = dir.path().join("reports");

        let summary = run_pairs(
            &[same, diff],
            &CompareConfig::default(),
            &ReportTarget::Directory(reports.clone()),
        )
        .unwrap();

        assert_eq!(summary.passed(), 1);
        assert!(!summary.all_equivalent());
        assert_eq!(summary.outcomes[0].report_path, None);
        let written = reports.join("differences_gen_diff.txt");
        assert_eq!(summary.outcomes[1].report_path.as_deref(), Some(written.as_path()));
        assert!(written.exists());
        assert!(!reports.join("differences_gen_same.txt").exists());
    }

    #[test]
    fn exact_path_with_several_pairs_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let a = pair(dir.path(), "a", "x", "x");
        let b = pair(dir.path(), "b", "y", "y");
        let err = run_pairs(
            &[a, b],
            &CompareConfig::default(),
            &ReportTarget::File(dir.path().join("out.txt")),
        )
        .unwrap_err();
        assert!(matches!(err, RunError::ExactPathForMany(2)));
    }

    #[test]
    fn missing_input_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let spec = PairSpec {
            name: "ghost".to_string(),
            generated: dir.path().join("missing.txt"),
            reference: dir.path().join("missing.txt"),
        };
        let err = run_pair(&spec, &CompareConfig::default(), &dir.path().join("r.txt"))
            .unwrap_err();
        assert!(matches!(err, RunError::Read { ref path, .. } if path.ends_with("missing.txt")));
    }

    #[test]
    fn undecodable_input_surfaces_as_compare_error() {
        let dir = tempfile::tempdir().unwrap();
        let spec = pair(dir.path(), "bin", "", "text");
        fs::write(&spec.generated, [0xff, 0xfe, 0x00]).unwrap();
        let err = run_pair(&spec, &CompareConfig::default(), &dir.path().join("r.txt"))
            .unwrap_err();
        assert!(matches!(err, RunError::Compare { ref pair, .. } if pair == "bin"));
    }
}
