//! End-to-end tests for the synoverlap binary and the file-based detector.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use synoverlap::detector::PlagiarismDetector;
use synoverlap::error::{Result, SynOverlapError};
use synoverlap::matching::MatchConfig;
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Fixture {
            dir: TempDir::new().unwrap(),
        }
    }

    fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }
}

fn run(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_synoverlap"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_percentage_output() {
    let fx = Fixture::new();
    let synonyms = fx.file("syns.txt", "run sprint jog\n");
    let plagiarized = fx.file("plagiarized.txt", "go for a jog");
    let source = fx.file("source.txt", "go for a run");

    let output = run(&[&synonyms, &plagiarized, &source]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "100.000000%\n");
}

#[test]
fn test_explicit_tuple_size() {
    let fx = Fixture::new();
    let synonyms = fx.file("syns.txt", "");
    let plagiarized = fx.file("plagiarized.txt", "the cat sat");
    let source = fx.file("source.txt", "the cat");

    let output = run(&[&synonyms, &plagiarized, &source, Path::new("2")]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "50.000000%\n");
}

#[test]
fn test_json_output() {
    let fx = Fixture::new();
    let synonyms = fx.file("syns.txt", "big large\n");
    let plagiarized = fx.file("plagiarized.txt", "Big dog!");
    let source = fx.file("source.txt", "large dog");

    let output = run(&[
        Path::new("--format"),
        Path::new("json"),
        &synonyms,
        &plagiarized,
        &source,
        Path::new("2"),
    ]);

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["match_count"], 1);
    assert_eq!(value["percentage"], 100.0);
    assert_eq!(value["tuple_size"], 2);
}

#[test]
fn test_argument_errors_exit_with_1() {
    let output = run(&[Path::new("only-one-argument")]);
    assert_eq!(output.status.code(), Some(1));

    let fx = Fixture::new();
    let file = fx.file("doc.txt", "a b c");
    let output = run(&[&file, &file, &file, Path::new("0")]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_missing_file_exits_with_2() {
    let fx = Fixture::new();
    let synonyms = fx.file("syns.txt", "");
    let source = fx.file("source.txt", "a b c");
    let missing = fx.dir.path().join("missing.txt");

    let output = run(&[&synonyms, &missing, &source]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.txt"));
}

#[test]
fn test_short_plagiarized_document_exits_with_3() {
    let fx = Fixture::new();
    let synonyms = fx.file("syns.txt", "");
    let plagiarized = fx.file("plagiarized.txt", "too short");
    let source = fx.file("source.txt", "a b c d");

    let output = run(&[&synonyms, &plagiarized, &source]);

    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_detector_compare_files() -> Result<()> {
    let fx = Fixture::new();
    let synonyms = fx.file("syns.json", r#"[["quick", "fast"], ["fox", "vixen"]]"#);
    let plagiarized = fx.file("plagiarized.txt", "The fast brown vixen.");
    let source = fx.file("source.txt", "the quick brown fox");

    let config = MatchConfig::new(2).with_synonym_format("json".parse()?);
    let detector = PlagiarismDetector::from_config(config, &synonyms)?;
    let report = detector.compare_files(&plagiarized, &source)?;

    assert_eq!(report.total_tuples, 3);
    assert_eq!(report.match_count, 3);
    assert_eq!(report.percentage, 100.0);

    Ok(())
}

#[test]
fn test_detector_strict_synonyms() {
    let fx = Fixture::new();
    let synonyms = fx.file("syns.txt", "big large\nlarge huge\n");

    let lenient = PlagiarismDetector::from_config(MatchConfig::new(2), &synonyms).unwrap();
    assert_eq!(lenient.dictionary().synonyms_of("large"), ["huge"]);

    let strict = MatchConfig::new(2).with_strict_synonyms(true);
    let err = PlagiarismDetector::from_config(strict, &synonyms).unwrap_err();
    assert!(matches!(err, SynOverlapError::Configuration(_)));
}

#[test]
fn test_multi_word_json_synonym_exits_with_2() {
    let fx = Fixture::new();
    let synonyms = fx.file("syns.json", r#"[["ice cream", "gelato"]]"#);
    let plagiarized = fx.file("plagiarized.txt", "eat gelato");
    let source = fx.file("source.txt", "eat ice cream");

    let config = MatchConfig::new(2).with_synonym_format("json".parse().unwrap());
    let err = PlagiarismDetector::from_config(config, &synonyms).unwrap_err();
    assert!(matches!(err, SynOverlapError::Parse(_)));

    let output = run(&[
        Path::new("--synonym-format"),
        Path::new("json"),
        &synonyms,
        &plagiarized,
        &source,
        Path::new("2"),
    ]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ice cream"));
}
