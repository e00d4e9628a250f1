//! Where failure reports go on disk.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use report::Report;

/// File name for the report of a comparison whose first input is `stem`.
///
/// Characters outside `[A-Za-z0-9._-]` are replaced by `_` so that a pair
/// name can always be used.
pub fn report_file_name(stem: &str) -> String {
    let safe: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("differences_{safe}.txt")
}

/// Report file name for a generated document, keyed on its file stem.
pub fn report_file_name_for(generated: &Path) -> String {
    let stem = generated
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    report_file_name(&stem)
}

/// Report path for a generated document under `output_dir`.
pub fn report_path_for(output_dir: &Path, generated: &Path) -> PathBuf {
    output_dir.join(report_file_name_for(generated))
}

/// Write `report` to `path`, creating missing parent directories.
pub fn write_report(report: &Report, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    report.write_to(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CompareConfig, SourceLabels, compare};

    #[test]
    fn file_name_uses_stem() {
        assert_eq!(report_file_name("statement"), "differences_statement.txt");
        assert_eq!(
            report_file_name("march report/v2"),
            "differences_march_report_v2.txt"
        );
    }

    #[test]
    fn path_for_generated_document() {
        let path = report_path_for(Path::new("downloads"), Path::new("/tmp/out/invoice.txt"));
        assert_eq!(path, PathBuf::from("downloads/differences_invoice.txt"));
    }

    #[test]
    fn writes_report_into_new_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = compare(
            "alpha beta",
            "alpha gamma",
            &SourceLabels::default(),
            &CompareConfig::default(),
        )
        .expect("comparison");
        let report = result.report.expect("report");

        let path = dir.path().join("nested").join(report_file_name("alpha"));
        write_report(&report, &path).expect("write report");

        let written = fs::read_to_string(&path).expect("read back");
        assert_eq!(written, report.to_string());
    }
}
