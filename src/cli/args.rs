//! Command line argument parsing for the Relata CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Relata - rank knowledge-graph triples that connect two phrases
#[derive(Parser, Debug, Clone)]
#[command(name = "relata")]
#[command(about = "Rank knowledge-graph triples that connect two phrases")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RelataArgs {
    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE", env = "RELATA_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl RelataArgs {
    /// Log level implied by `-q` / `-v`.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank the triples connecting two phrases
    Query(QueryArgs),

    /// Rank triples for every phrase pair in a TSV file
    Batch(BatchArgs),

    /// Show index build statistics
    Stats(StatsArgs),
}

/// Inputs needed to build the index.
#[derive(Args, Debug, Clone, Default)]
pub struct IndexArgs {
    /// Node label file (id<TAB>label<TAB>...)
    #[arg(short, long, value_name = "LABELS_TSV")]
    pub labels: Option<PathBuf>,

    /// Triple file (subject<TAB>relation<TAB>object)
    #[arg(short, long, value_name = "TRIPLES_TSV")]
    pub triples: Option<PathBuf>,

    /// Do not index /r/RelatedTo relations
    #[arg(long)]
    pub ignore_related: bool,
}

/// Arguments for a single query
#[derive(Parser, Debug, Clone)]
pub struct QueryArgs {
    #[command(flatten)]
    pub index: IndexArgs,

    /// Maximum number of results
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// First phrase
    #[arg(value_name = "ENTITY1")]
    pub entity1: String,

    /// Second phrase
    #[arg(value_name = "ENTITY2")]
    pub entity2: String,
}

/// Arguments for batch queries
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub index: IndexArgs,

    /// Maximum number of results per pair
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Pair file (entity1<TAB>entity2 per line)
    #[arg(value_name = "PAIRS_TSV")]
    pub pairs: PathBuf,
}

/// Arguments for index statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub index: IndexArgs,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output (one document per result, JSON lines for batches)
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        let args = RelataArgs::try_parse_from([
            "relata", "-vv", "query", "--labels", "nodes.tsv", "--triples", "kg.tsv", "-n",
            "5", "dog", "animal",
        ])
        .unwrap();

        assert_eq!(args.log_level(), LevelFilter::Debug);
        match args.command {
            Command::Query(query) => {
                assert_eq!(query.index.labels, Some(PathBuf::from("nodes.tsv")));
                assert_eq!(query.limit, Some(5));
                assert_eq!(query.entity1, "dog");
                assert_eq!(query.entity2, "animal");
                assert!(!query.index.ignore_related);
            }
            other => panic!("Expected query command, got {other:?}"),
        }
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args =
            RelataArgs::try_parse_from(["relata", "-q", "-vvv", "stats", "--ignore-related"])
                .unwrap();

        assert_eq!(args.log_level(), LevelFilter::Error);
    }

    #[test]
    fn test_format_flag() {
        let args = RelataArgs::try_parse_from(["relata", "batch", "pairs.tsv", "-f", "json"])
            .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(matches!(args.command, Command::Batch(_)));
    }
}
