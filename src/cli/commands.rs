//! Command implementations for Relata CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use log::info;
use rayon::prelude::*;

use crate::analysis::analyzer::PhraseAnalyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::RelataConfig;
use crate::error::{RelataError, Result};
use crate::graph::index::TripleIndex;
use crate::graph::label::LabelTable;
use crate::graph::retrieval::Retriever;

/// Execute a CLI command.
pub fn execute_command(args: RelataArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => RelataConfig::from_file(path)?,
        None => RelataConfig::default(),
    };

    match &args.command {
        Command::Query(query_args) => run_query(query_args, &config, &args),
        Command::Batch(batch_args) => run_batch(batch_args, &config, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &config, &args),
    }
}

/// Index inputs after merging command-line flags over the config file.
#[derive(Debug)]
struct LoadedIndex {
    labels: LabelTable,
    index: TripleIndex,
    analyzer: Arc<PhraseAnalyzer>,
    ignore_related: bool,
}

fn load_index(index_args: &IndexArgs, config: &RelataConfig) -> Result<LoadedIndex> {
    let mut config = config.clone();
    if let Some(labels) = &index_args.labels {
        config.labels_path = Some(labels.clone());
    }
    if let Some(triples) = &index_args.triples {
        config.triples_path = Some(triples.clone());
    }
    config.ignore_related |= index_args.ignore_related;

    let labels_path = required_path(config.labels_path.as_ref(), "labels")?;
    let triples_path = required_path(config.triples_path.as_ref(), "triples")?;

    let analyzer = config.analyzer()?;
    let labels = LabelTable::load(labels_path)?;
    let index = TripleIndex::load(triples_path, &labels, config.relation_filter(), &analyzer)?;

    Ok(LoadedIndex {
        labels,
        index,
        analyzer,
        ignore_related: config.ignore_related,
    })
}

fn required_path<'a>(path: Option<&'a PathBuf>, name: &str) -> Result<&'a Path> {
    path.map(PathBuf::as_path).ok_or_else(|| {
        RelataError::config(format!(
            "no {name} file given; pass --{name} or set {name}_path in the config file"
        ))
    })
}

/// Rank the triples for one phrase pair.
fn run_query(args: &QueryArgs, config: &RelataConfig, cli_args: &RelataArgs) -> Result<()> {
    let loaded = load_index(&args.index, config)?;
    let limit = args.limit.unwrap_or(config.limit);

    let start_time = Instant::now();
    let retriever = Retriever::new(&loaded.index, loaded.analyzer);
    let results = retriever.retrieve(&args.entity1, &args.entity2, limit)?;
    info!(
        "query returned {} results in {}ms",
        results.len(),
        start_time.elapsed().as_millis()
    );

    output_query(
        &QueryResult::new(&args.entity1, &args.entity2, &results),
        cli_args,
    )
}

/// Rank the triples for every pair in a TSV file, in parallel.
fn run_batch(args: &BatchArgs, config: &RelataConfig, cli_args: &RelataArgs) -> Result<()> {
    let pairs = load_pairs(&args.pairs)?;
    let loaded = load_index(&args.index, config)?;
    let limit = args.limit.unwrap_or(config.limit);

    let start_time = Instant::now();
    let retriever = Retriever::new(&loaded.index, loaded.analyzer);
    let results = pairs
        .par_iter()
        .map(|(entity1, entity2)| -> Result<QueryResult> {
            let results = retriever.retrieve(entity1, entity2, limit)?;
            Ok(QueryResult::new(entity1, entity2, &results))
        })
        .collect::<Result<Vec<_>>>()?;

    let duration = start_time.elapsed();
    info!(
        "answered {} pairs in {}ms ({:.1} pairs/s)",
        results.len(),
        duration.as_millis(),
        results.len() as f64 / duration.as_secs_f64().max(f64::EPSILON)
    );

    output_batch(&results, cli_args)
}

/// Show index build statistics.
fn show_stats(args: &StatsArgs, config: &RelataConfig, cli_args: &RelataArgs) -> Result<()> {
    let start_time = Instant::now();
    let loaded = load_index(&args.index, config)?;

    let report = IndexStatsReport {
        labels: loaded.labels.len(),
        triples: loaded.index.len(),
        distinct_stems: loaded.index.vocabulary_size(),
        ignore_related: loaded.ignore_related,
        build: loaded.index.stats().clone(),
        duration_ms: start_time.elapsed().as_millis() as u64,
    };

    output_stats(&report, cli_args)
}

/// Read `entity1<TAB>entity2` pairs. Blank lines are skipped.
pub fn load_pairs<P: AsRef<Path>>(path: P) -> Result<Vec<(String, String)>> {
    let path = path.as_ref();
    let source_name = path.display().to_string();
    let reader = BufReader::new(File::open(path)?);

    let mut pairs = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }
        pairs.push(parse_pair(line, &source_name, index + 1)?);
    }
    Ok(pairs)
}

fn parse_pair(line: &str, source_name: &str, line_number: usize) -> Result<(String, String)> {
    let mut fields = line.split('\t');
    match (fields.next(), fields.next()) {
        (Some(entity1), Some(entity2)) => Ok((entity1.to_string(), entity2.to_string())),
        _ => Err(RelataError::input_format(
            source_name,
            line_number,
            "expected 2 tab-separated fields (entity1, entity2)",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_pairs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pairs.tsv");
        fs::write(&path, "dog\tanimal\n\noven\tkitchen\textra\r\n").unwrap();

        let pairs = load_pairs(&path).unwrap();

        assert_eq!(
            pairs,
            vec![
                ("dog".to_string(), "animal".to_string()),
                ("oven".to_string(), "kitchen".to_string()),
            ]
        );
    }

    #[test]
    fn test_load_pairs_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pairs.tsv");
        fs::write(&path, "dog\tanimal\nlonely\n").unwrap();

        let err = load_pairs(&path).unwrap_err();
        assert!(matches!(err, RelataError::InputFormat { line: 2, .. }));
    }

    #[test]
    fn test_missing_inputs_is_config_error() {
        let err = load_index(&IndexArgs::default(), &RelataConfig::default()).unwrap_err();

        assert!(matches!(err, RelataError::Config(_)));
        assert!(err.to_string().contains("--labels"));
    }

    #[test]
    fn test_flags_override_config() {
        let temp_dir = TempDir::new().unwrap();
        let labels = temp_dir.path().join("nodes.tsv");
        let triples = temp_dir.path().join("kg.tsv");
        fs::write(&labels, "n1\tdog\nn2\tanimal\n").unwrap();
        fs::write(&triples, "n1\t/r/RelatedTo\tn2\nn1\t/r/IsA\tn2\n").unwrap();

        let config = RelataConfig {
            labels_path: Some(temp_dir.path().join("missing.tsv")),
            triples_path: Some(triples),
            ..RelataConfig::default()
        };
        let index_args = IndexArgs {
            labels: Some(labels),
            triples: None,
            ignore_related: true,
        };

        let loaded = load_index(&index_args, &config).unwrap();

        assert!(loaded.ignore_related);
        assert_eq!(loaded.labels.len(), 2);
        assert_eq!(loaded.index.len(), 1);
        assert_eq!(loaded.index.stats().skipped_relation, 1);
    }
}
