//! Output formatting for CLI results.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SynOverlapArgs};
use crate::error::Result;
use crate::matching::counter::MatchReport;

/// Result of one document comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub synonyms: String,
    pub plagiarized: String,
    pub source: String,
    pub tuple_size: usize,
    #[serde(flatten)]
    pub report: MatchReport,
    pub duration_ms: u64,
}

/// Output a result on stdout in the requested format.
pub fn output_result(result: &ComparisonResult, args: &SynOverlapArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, result, args)?;
    out.flush()?;
    Ok(())
}

/// Write a result to `out` in the requested format.
pub fn write_result<W: Write>(
    out: &mut W,
    result: &ComparisonResult,
    args: &SynOverlapArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => write_human(out, result, args),
        OutputFormat::Json => write_json(out, result, args),
    }
}

/// The percentage with six decimals, e.g. `50.000000%`.
pub fn format_percentage(percentage: f64) -> String {
    format!("{percentage:.6}%")
}

fn write_human<W: Write>(out: &mut W, result: &ComparisonResult, args: &SynOverlapArgs) -> Result<()> {
    let report = &result.report;

    if args.verbosity() > 1 {
        writeln!(out, "Synonyms:        {}", result.synonyms)?;
        writeln!(out, "Plagiarized:     {}", result.plagiarized)?;
        writeln!(out, "Source:          {}", result.source)?;
        writeln!(out, "Tuple size:      {}", result.tuple_size)?;
        writeln!(out, "Tuples:          {}", report.total_tuples)?;
        writeln!(out, "Matches:         {}", report.match_count)?;
        writeln!(
            out,
            "Matched tuples:  {} ({})",
            report.matched_tuples,
            format_percentage(report.matched_tuple_percentage)
        )?;
        writeln!(out, "Variants tested: {}", report.variants_tested)?;
        writeln!(out, "Time:            {}ms", result.duration_ms)?;
    }

    writeln!(out, "{}", format_percentage(report.percentage))?;
    Ok(())
}

fn write_json<W: Write>(out: &mut W, result: &ComparisonResult, args: &SynOverlapArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}
