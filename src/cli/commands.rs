//! Command implementation for the synoverlap CLI.

use std::time::Instant;

use crate::cli::args::SynOverlapArgs;
use crate::cli::output::{ComparisonResult, output_result};
use crate::detector::PlagiarismDetector;
use crate::error::{Result, SynOverlapError};
use crate::matching::config::MatchConfig;

/// Execute the comparison described by the arguments and print the result.
pub fn execute_command(args: SynOverlapArgs) -> Result<()> {
    let result = run_comparison(&args)?;
    output_result(&result, &args)
}

/// Load everything, compare the two documents and collect the result.
pub fn run_comparison(args: &SynOverlapArgs) -> Result<ComparisonResult> {
    let config = build_config(args)?;
    let tuple_size = config.tuple_size;

    let start = Instant::now();
    let detector = PlagiarismDetector::from_config(config, &args.synonyms)?;
    log::info!(
        "loaded {} synonym entries from {}",
        detector.dictionary().len(),
        args.synonyms.display()
    );

    let report = detector.compare_files(&args.plagiarized, &args.source)?;

    Ok(ComparisonResult {
        synonyms: args.synonyms.to_string_lossy().to_string(),
        plagiarized: args.plagiarized.to_string_lossy().to_string(),
        source: args.source.to_string_lossy().to_string(),
        tuple_size,
        report,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

/// Merge the optional config file with the command line flags. Flags given
/// explicitly win over file values.
pub fn build_config(args: &SynOverlapArgs) -> Result<MatchConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::debug!("loading config from {}", path.display());
            MatchConfig::load_from_file(path)?
        }
        None => MatchConfig::default(),
    };

    if let Some(tuple_size) = args.tuple_size {
        config.tuple_size = to_usize(tuple_size, "tuple size")?;
    }
    if let Some(format) = args.synonym_format {
        config.synonym_format = format.into();
    }
    if args.strict_synonyms {
        config.strict_synonyms = true;
    }
    if let Some(max_variants) = args.max_variants {
        config.max_variants_per_tuple = Some(to_usize(max_variants, "max variants")?);
    }
    if args.parallel {
        config.parallel = true;
    }
    if let Some(threads) = args.threads {
        config.thread_pool_size = Some(to_usize(threads, "thread count")?);
    }

    config.validate()?;
    Ok(config)
}

fn to_usize(value: u64, what: &str) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| SynOverlapError::configuration(format!("{what} {value} is too large")))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use tempfile::TempDir;

    use super::*;
    use crate::analysis::synonym::dictionary::SynonymFormat;

    fn parse(argv: &[&str]) -> SynOverlapArgs {
        let mut full = vec!["synoverlap"];
        full.extend_from_slice(argv);
        SynOverlapArgs::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_build_config_defaults() {
        let config = build_config(&parse(&["s", "a", "b"])).unwrap();
        assert_eq!(config, MatchConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"tuple_size": 5, "parallel": true, "thread_pool_size": 2, "synonym_format": "json"}"#,
        )
        .unwrap();

        let config = build_config(&parse(&[
            "--config",
            path.to_str().unwrap(),
            "--threads",
            "3",
            "s",
            "a",
            "b",
            "2",
        ]))
        .unwrap();

        assert_eq!(config.tuple_size, 2);
        assert!(config.parallel);
        assert_eq!(config.thread_pool_size, Some(3));
        assert_eq!(config.synonym_format, SynonymFormat::Json);
    }

    #[test]
    fn test_run_comparison() {
        let dir = TempDir::new().unwrap();
        let synonyms = dir.path().join("syns.txt");
        let plagiarized = dir.path().join("plagiarized.txt");
        let source = dir.path().join("source.txt");
        fs::write(&synonyms, "run sprint jog\n").unwrap();
        fs::write(&plagiarized, "go for a jog").unwrap();
        fs::write(&source, "go for a run").unwrap();

        let args = parse(&[
            synonyms.to_str().unwrap(),
            plagiarized.to_str().unwrap(),
            source.to_str().unwrap(),
        ]);
        let result = run_comparison(&args).unwrap();

        assert_eq!(result.tuple_size, 3);
        assert_eq!(result.report.total_tuples, 2);
        assert_eq!(result.report.match_count, 2);
        assert_eq!(result.report.percentage, 100.0);
    }

    #[test]
    fn test_missing_synonym_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");
        let args = parse(&[missing.to_str().unwrap(), "a", "b"]);

        let err = run_comparison(&args).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
