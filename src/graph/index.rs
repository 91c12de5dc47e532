//! Triple list and token-to-triple inverted index.
//!
//! Raw records stream through [`TripleIndexBuilder`]: endpoints are resolved
//! through the [`LabelTable`], inadmissible relations are dropped by the
//! [`RelationFilter`], and every accepted triple gets the next position in the
//! triple list. Each distinct stem of the subject label and each distinct stem
//! of the object label then records that position in its posting list, so a
//! position appears at most twice under one stem (once per side).
//!
//! The finished [`TripleIndex`] is immutable. Positions are the join key
//! between the posting lists and the triple list, and every posted position
//! is a valid index into the triple list.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use ahash::{AHashMap, AHashSet};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::PhraseAnalyzer;
use crate::error::{RelataError, Result};
use crate::graph::label::LabelTable;
use crate::graph::relation::RelationFilter;
use crate::graph::triple::{RawTriple, Triple};

/// Counters collected while building an index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Records seen in the triple stream.
    pub records_read: u64,
    /// Records appended to the triple list.
    pub accepted: u64,
    /// Records whose subject or object has no label.
    pub skipped_unresolved: u64,
    /// Records whose relation was rejected.
    pub skipped_relation: u64,
}

#[derive(Clone, Debug)]
struct IndexedTriple {
    triple: Triple,
    subject_stems: Vec<String>,
    object_stems: Vec<String>,
}

/// Immutable triple list plus inverted index from stem to triple positions.
///
/// The stems of both endpoints are kept alongside each triple, computed with
/// the same analyzer that built the posting lists.
#[derive(Clone, Debug, Default)]
pub struct TripleIndex {
    entries: Vec<IndexedTriple>,
    postings: AHashMap<String, Vec<usize>>,
    stats: BuildStats,
}

impl TripleIndex {
    /// Build an index from an in-memory record stream.
    pub fn build<I>(
        records: I,
        labels: &LabelTable,
        filter: RelationFilter,
        analyzer: &PhraseAnalyzer,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = RawTriple>,
    {
        let mut builder = TripleIndexBuilder::new(labels, filter, analyzer);
        for record in records {
            builder.add(&record)?;
        }
        Ok(builder.finish())
    }

    /// Build an index from a TSV triple file (`subject<TAB>relation<TAB>object`).
    pub fn load<P: AsRef<Path>>(
        path: P,
        labels: &LabelTable,
        filter: RelationFilter,
        analyzer: &PhraseAnalyzer,
    ) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Self::from_reader(file, &path.display().to_string(), labels, filter, analyzer)
    }

    /// Build an index from TSV records read from `reader`.
    ///
    /// A line with fewer than three fields aborts the load.
    pub fn from_reader<R: Read>(
        reader: R,
        source_name: &str,
        labels: &LabelTable,
        filter: RelationFilter,
        analyzer: &PhraseAnalyzer,
    ) -> Result<Self> {
        let mut builder = TripleIndexBuilder::new(labels, filter, analyzer);
        for (index, line) in BufReader::new(reader).lines().enumerate() {
            let record = parse_record(&line?, source_name, index + 1)?;
            builder.add(&record)?;
        }

        let index = builder.finish();
        info!(
            "indexed {} of {} triples from {} ({} unresolved, {} filtered, {} distinct stems)",
            index.stats.accepted,
            index.stats.records_read,
            source_name,
            index.stats.skipped_unresolved,
            index.stats.skipped_relation,
            index.vocabulary_size()
        );
        Ok(index)
    }

    /// Number of triples in the triple list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct stems with a posting list.
    pub fn vocabulary_size(&self) -> usize {
        self.postings.len()
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// The triple stored at `position`.
    pub fn triple(&self, position: usize) -> Option<&Triple> {
        self.entries.get(position).map(|entry| &entry.triple)
    }

    /// All triples in position order.
    pub fn triples(&self) -> impl Iterator<Item = &Triple> {
        self.entries.iter().map(|entry| &entry.triple)
    }

    /// Positions posted under `stem`; empty for unknown stems.
    pub fn postings(&self, stem: &str) -> &[usize] {
        self.postings.get(stem).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn subject_stems(&self, position: usize) -> &[String] {
        &self.entries[position].subject_stems
    }

    pub(crate) fn object_stems(&self, position: usize) -> &[String] {
        &self.entries[position].object_stems
    }
}

/// Parse one TSV triple record. Fields beyond the third are ignored.
pub fn parse_record(line: &str, source_name: &str, line_number: usize) -> Result<RawTriple> {
    let mut fields = line.trim().split('\t');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(subject), Some(relation), Some(object)) => {
            Ok(RawTriple::new(subject, relation, object))
        }
        _ => Err(RelataError::input_format(
            source_name,
            line_number,
            "expected 3 tab-separated fields (subject, relation, object)",
        )),
    }
}

/// Incremental index construction over a stream of raw records.
pub struct TripleIndexBuilder<'a> {
    labels: &'a LabelTable,
    filter: RelationFilter,
    analyzer: &'a PhraseAnalyzer,
    index: TripleIndex,
}

impl<'a> TripleIndexBuilder<'a> {
    pub fn new(labels: &'a LabelTable, filter: RelationFilter, analyzer: &'a PhraseAnalyzer) -> Self {
        TripleIndexBuilder {
            labels,
            filter,
            analyzer,
            index: TripleIndex::default(),
        }
    }

    /// Resolve, filter and index one record.
    ///
    /// Returns the position assigned to the triple, or `None` if the record
    /// was skipped.
    pub fn add(&mut self, record: &RawTriple) -> Result<Option<usize>> {
        let stats = &mut self.index.stats;
        stats.records_read += 1;

        let subject = self.labels.resolve(&record.subject_id);
        let object = self.labels.resolve(&record.object_id);
        if subject.is_empty() || object.is_empty() {
            stats.skipped_unresolved += 1;
            debug!(
                "skipping {} {} {}: unresolved endpoint",
                record.subject_id, record.relation, record.object_id
            );
            return Ok(None);
        }
        if !self.filter.accept(&record.relation) {
            stats.skipped_relation += 1;
            debug!(
                "skipping {} {} {}: relation not indexed",
                record.subject_id, record.relation, record.object_id
            );
            return Ok(None);
        }

        let subject_stems = self.analyzer.stems(subject)?;
        let object_stems = self.analyzer.stems(object)?;
        let position = self.index.entries.len();

        for stems in [&subject_stems, &object_stems] {
            let mut seen = AHashSet::with_capacity(stems.len());
            for stem in stems.iter().filter(|stem| seen.insert(stem.as_str())) {
                self.index
                    .postings
                    .entry(stem.clone())
                    .or_default()
                    .push(position);
            }
        }

        self.index.entries.push(IndexedTriple {
            triple: Triple::new(subject, record.relation.as_str(), object),
            subject_stems,
            object_stems,
        });
        self.index.stats.accepted += 1;

        Ok(Some(position))
    }

    pub fn finish(self) -> TripleIndex {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> LabelTable {
        [
            ("n1", "dog"),
            ("n2", "animal"),
            ("n3", "hot dog"),
            ("n4", "dog food"),
            ("n5", "cat"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_build_assigns_positions_and_postings() {
        let analyzer = PhraseAnalyzer::new().unwrap();
        let records = vec![
            RawTriple::new("n1", "/r/IsA", "n2"),
            RawTriple::new("n3", "/r/RelatedTo", "n4"),
        ];

        let index = TripleIndex::build(records, &labels(), RelationFilter::new(false), &analyzer)
            .unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.triple(0), Some(&Triple::new("dog", "/r/IsA", "animal")));
        assert_eq!(index.postings("anim"), &[0]);
        // "dog" appears on both sides of the second triple
        assert_eq!(index.postings("dog"), &[0, 1, 1]);
        assert_eq!(index.postings("hot"), &[1]);
        assert!(index.postings("missing").is_empty());
        assert_eq!(index.vocabulary_size(), 4);
    }

    #[test]
    fn test_build_skips_unresolved_and_filtered() {
        let analyzer = PhraseAnalyzer::new().unwrap();
        let records = vec![
            RawTriple::new("n1", "/r/Antonym", "n5"),
            RawTriple::new("n1", "/r/IsA", "unknown"),
            RawTriple::new("n1", "/r/RelatedTo", "n5"),
            RawTriple::new("n5", "/r/IsA", "n2"),
        ];

        let index = TripleIndex::build(records, &labels(), RelationFilter::new(true), &analyzer)
            .unwrap();

        assert_eq!(index.len(), 1);
        assert_eq!(index.triple(0), Some(&Triple::new("cat", "/r/IsA", "animal")));
        assert_eq!(
            index.stats(),
            &BuildStats {
                records_read: 4,
                accepted: 1,
                skipped_unresolved: 1,
                skipped_relation: 2,
            }
        );
        for stem in ["cat", "anim"] {
            assert!(index.postings(stem).iter().all(|&pos| pos < index.len()));
        }
    }

    #[test]
    fn test_from_reader() {
        let analyzer = PhraseAnalyzer::new().unwrap();
        let data = "n1\t/r/IsA\tn2\n  n5\t/r/IsA\tn2\textra  \n";

        let index = TripleIndex::from_reader(
            data.as_bytes(),
            "kg.tsv",
            &labels(),
            RelationFilter::default(),
            &analyzer,
        )
        .unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.triple(1), Some(&Triple::new("cat", "/r/IsA", "animal")));
        assert_eq!(index.postings("anim"), &[0, 1]);
    }

    #[test]
    fn test_malformed_record_is_fatal() {
        let analyzer = PhraseAnalyzer::new().unwrap();
        let data = "n1\t/r/IsA\tn2\nn1\t/r/IsA\n";

        let err = TripleIndex::from_reader(
            data.as_bytes(),
            "kg.tsv",
            &labels(),
            RelationFilter::default(),
            &analyzer,
        )
        .unwrap_err();

        assert!(matches!(err, RelataError::InputFormat { line: 2, .. }));
    }

    #[test]
    fn test_parse_record() {
        let record = parse_record("a\t/r/IsA\tb\n", "kg.tsv", 1).unwrap();
        assert_eq!(record, RawTriple::new("a", "/r/IsA", "b"));
        assert!(parse_record("", "kg.tsv", 7).is_err());
    }
}
