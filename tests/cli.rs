#![cfg(feature = "cli")]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn doccmp(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_doccmp"))
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .args(args)
        .output()
        .expect("run doccmp")
}

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write fixture");
}

#[test]
fn equivalent_pair_exits_zero_without_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "gen.txt", "Total:  123,45  01/02/2023");
    write(dir.path(), "ref.txt", "total: 123,45 05/06/2024");

    let out = doccmp(dir.path(), &["gen.txt", "ref.txt"]);
    assert!(out.status.success(), "{out:?}");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("PASS gen (similarity 100.00%)"), "{stdout}");
    assert!(stdout.contains("1 of 1 pairs equivalent"), "{stdout}");
    assert!(!dir.path().join("downloads").exists());
}

#[test]
fn differing_pair_exits_one_and_names_report_after_generated_stem() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "releve_mars.txt", "the cat sat on the mat");
    write(dir.path(), "reference.txt", "the dog sat on the rug");

    let out = doccmp(dir.path(), &["releve_mars.txt", "reference.txt"]);
    assert_eq!(out.status.code(), Some(1), "{out:?}");
    let report = dir.path().join("downloads/differences_releve_mars.txt");
    let text = fs::read_to_string(&report).expect("report written");
    assert!(text.contains("   1 [ ] the cat dog sat on the mat rug"), "{text}");
}

#[test]
fn exact_output_path_for_single_pair() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "a.txt", "alpha beta gamma");
    write(dir.path(), "b.txt", "alpha beta delta");

    let out = doccmp(dir.path(), &["a.txt", "b.txt", "-o", "out/diff.txt", "--json"]);
    assert_eq!(out.status.code(), Some(1), "{out:?}");
    assert!(dir.path().join("out/diff.txt").exists());
    assert!(!dir.path().join("downloads").exists());

    let outcomes: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json summary");
    assert_eq!(outcomes[0]["name"], "a");
    assert_eq!(outcomes[0]["is_equivalent"], false);
    assert_eq!(outcomes[0]["report_path"], "out/diff.txt");
}

#[test]
fn config_pairs_write_stem_named_reports_beside_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let conf = dir.path().join("conf");
    fs::create_dir_all(&conf).expect("mkdir");
    write(&conf, "invoice_gen.txt", "Invoice 42 due 01/02/2024 amount 10,00");
    write(&conf, "invoice_ref.txt", "invoice 42 due 03/04/2025 amount 10,00");
    write(&conf, "letter_gen.txt", "dear customer your balance is low");
    write(&conf, "letter_ref.txt", "dear client your account is closed");
    write(
        &conf,
        "doccmp.yaml",
        r#"
version: "1.0"
output_dir: "reports"
pairs:
  - { name: "invoice", generated: "invoice_gen.txt", reference: "invoice_ref.txt" }
  - { name: "letter", generated: "letter_gen.txt", reference: "letter_ref.txt" }
"#,
    );

    let out = doccmp(dir.path(), &["--config", "conf/doccmp.yaml"]);
    assert_eq!(out.status.code(), Some(1), "{out:?}");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("PASS invoice"), "{stdout}");
    assert!(stdout.contains("FAIL letter"), "{stdout}");
    assert!(stdout.contains("1 of 2 pairs equivalent"), "{stdout}");

    assert!(conf.join("reports/differences_letter_gen.txt").exists());
    assert!(!conf.join("reports/differences_letter.txt").exists());
    assert!(!conf.join("reports/differences_invoice_gen.txt").exists());
}

#[test]
fn nothing_to_compare_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = doccmp(dir.path(), &[]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("nothing to compare"));
}

#[test]
fn json_log_format_is_accepted() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "a.txt", "same words");
    write(dir.path(), "b.txt", "same words");

    let out = Command::new(env!("CARGO_BIN_EXE_doccmp"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .args(["a.txt", "b.txt", "--log-format", "json"])
        .output()
        .expect("run doccmp");
    assert!(out.status.success(), "{out:?}");
    let stderr = String::from_utf8_lossy(&out.stderr);
    let first = stderr.lines().next().expect("a log line");
    let event: serde_json::Value = serde_json::from_str(first).expect("json log line");
    assert!(event.get("fields").is_some(), "{first}");
}
