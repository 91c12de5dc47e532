//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, RelataArgs};
use crate::error::Result;
use crate::graph::index::BuildStats;
use crate::graph::triple::ScoredTriple;

/// Ranked triples for one phrase pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    pub entity1: String,
    pub entity2: String,
    pub results: Vec<ScoredHit>,
}

/// One ranked triple as reported on the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredHit {
    pub subject: String,
    pub relation: String,
    pub object: String,
    pub score: f32,
    /// Sentence form, e.g. "dog a type of animal".
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

impl From<&ScoredTriple> for ScoredHit {
    fn from(scored: &ScoredTriple) -> Self {
        ScoredHit {
            subject: scored.triple.subject.clone(),
            relation: scored.triple.relation.clone(),
            object: scored.triple.object.clone(),
            score: scored.score,
            text: scored.triple.display(),
            position: scored.position,
        }
    }
}

impl QueryResult {
    pub fn new(entity1: &str, entity2: &str, results: &[ScoredTriple]) -> Self {
        QueryResult {
            entity1: entity1.to_string(),
            entity2: entity2.to_string(),
            results: results.iter().map(ScoredHit::from).collect(),
        }
    }
}

/// Index statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStatsReport {
    pub labels: usize,
    pub triples: usize,
    pub distinct_stems: usize,
    pub ignore_related: bool,
    pub build: BuildStats,
    pub duration_ms: u64,
}

/// Output a single query result in the selected format.
pub fn output_query(result: &QueryResult, args: &RelataArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", render_query_human(result));
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output batch results, one document per pair in input order.
///
/// JSON output is written as JSON lines regardless of `--pretty`.
pub fn output_batch(results: &[QueryResult], args: &RelataArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for (i, result) in results.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print!("{}", render_query_human(result));
            }
        }
        OutputFormat::Json => {
            for result in results {
                println!("{}", serde_json::to_string(result)?);
            }
        }
    }
    Ok(())
}

/// Output index statistics in the selected format.
pub fn output_stats(report: &IndexStatsReport, args: &RelataArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", render_stats_human(report));
            Ok(())
        }
        OutputFormat::Json => output_json(report, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &RelataArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn render_query_human(result: &QueryResult) -> String {
    let mut out = format!("{} <-> {}\n", result.entity1, result.entity2);
    out.push_str(&"─".repeat(out.chars().count() - 1));
    out.push('\n');

    for (i, hit) in result.results.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. [{:.3}] {}  ({}, {}, {})\n",
            i + 1,
            hit.score,
            hit.text,
            hit.subject,
            hit.relation,
            hit.object
        ));
    }
    out
}

fn render_stats_human(report: &IndexStatsReport) -> String {
    let build = &report.build;
    let mut out = String::from("Index Statistics:\n════════════════\n");
    out.push_str(&format!("Labels: {}\n", report.labels));
    out.push_str(&format!("Records read: {}\n", build.records_read));
    out.push_str(&format!("Triples indexed: {}\n", report.triples));
    out.push_str(&format!("Skipped (unresolved): {}\n", build.skipped_unresolved));
    out.push_str(&format!("Skipped (relation): {}\n", build.skipped_relation));
    out.push_str(&format!("Distinct stems: {}\n", report.distinct_stems));
    out.push_str(&format!("Ignore related: {}\n", report.ignore_related));
    out.push_str(&format!("Build time: {}ms\n", report.duration_ms));
    out
}
