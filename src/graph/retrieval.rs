//! Candidate retrieval and Jaccard scoring between two entity phrases.
//!
//! For every pair of query words (one from each phrase):
//!
//! - identical stems produce a synthetic `SameAs` triple with score 1.0 and
//!   the index is not consulted for that pair;
//! - otherwise the posting lists of both stems are intersected and a
//!   position becomes a candidate only if one stem occurs in the stored
//!   subject and the other in the stored object.
//!
//! Each candidate is scored by the Jaccard similarity between the set of all
//! query stems and the set of the stored triple's stems. When neither a
//! `SameAs` nor a candidate exists the result is the single sentinel
//! `(entity1, NONE, entity2)` with score 0.0.
//!
//! Ordering is deterministic: `SameAs` results in query-pair order, then
//! candidates by ascending position, then a stable sort by descending score.

use std::collections::BTreeSet;
use std::sync::Arc;

use ahash::AHashSet;
use log::{debug, trace};

use crate::analysis::analyzer::PhraseAnalyzer;
use crate::error::Result;
use crate::graph::index::TripleIndex;
use crate::graph::relation::{NONE, SAME_AS};
use crate::graph::triple::{ScoredTriple, Triple};

/// Default cap on the number of returned results.
pub const DEFAULT_LIMIT: usize = 100;

/// Query engine over a built [`TripleIndex`].
///
/// The retriever only reads the index, so one instance can serve concurrent
/// queries by reference.
#[derive(Clone, Debug)]
pub struct Retriever<'a> {
    index: &'a TripleIndex,
    analyzer: Arc<PhraseAnalyzer>,
}

impl<'a> Retriever<'a> {
    /// `analyzer` must be the analyzer the index was built with.
    pub fn new(index: &'a TripleIndex, analyzer: Arc<PhraseAnalyzer>) -> Self {
        Retriever { index, analyzer }
    }

    /// Rank the indexed triples that connect `entity1` and `entity2`.
    ///
    /// At most `limit` results are returned, except for the "no relation"
    /// sentinel which is always returned alone.
    pub fn retrieve(&self, entity1: &str, entity2: &str, limit: usize) -> Result<Vec<ScoredTriple>> {
        let words1 = self.analyzer.stems_with_originals(entity1)?;
        let words2 = self.analyzer.stems_with_originals(entity2)?;

        let mut same_as = Vec::new();
        let mut candidates = BTreeSet::new();

        for word1 in &words1 {
            let bucket1: AHashSet<usize> =
                self.index.postings(&word1.stem).iter().copied().collect();

            for word2 in &words2 {
                if word1.stem == word2.stem {
                    same_as.push(Triple::new(
                        word1.original.as_str(),
                        SAME_AS,
                        word2.original.as_str(),
                    ));
                    continue;
                }

                for &position in self.index.postings(&word2.stem) {
                    if !bucket1.contains(&position) || candidates.contains(&position) {
                        continue;
                    }
                    if self.links(position, &word1.stem, &word2.stem) {
                        candidates.insert(position);
                    }
                }
            }
        }

        debug!(
            "query ({entity1:?}, {entity2:?}): {} same-as, {} candidates",
            same_as.len(),
            candidates.len()
        );

        if same_as.is_empty() && candidates.is_empty() {
            return Ok(vec![ScoredTriple::new(
                Triple::new(entity1, NONE, entity2),
                0.0,
                None,
            )]);
        }

        let query_stems: AHashSet<&str> = words1
            .iter()
            .chain(&words2)
            .map(|word| word.stem.as_str())
            .collect();

        let mut results: Vec<ScoredTriple> = same_as
            .into_iter()
            .map(|triple| ScoredTriple::new(triple, 1.0, None))
            .collect();

        for position in candidates {
            let Some(score) = self.score(position, &query_stems) else {
                continue;
            };
            if let Some(triple) = self.index.triple(position) {
                trace!("candidate {position} {triple} scored {score:.4}");
                results.push(ScoredTriple::new(triple.clone(), score, Some(position)));
            }
        }

        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(limit);

        Ok(results)
    }

    /// Whether the stored triple carries one stem on each side.
    fn links(&self, position: usize, stem1: &str, stem2: &str) -> bool {
        let subject = self.index.subject_stems(position);
        let object = self.index.object_stems(position);
        let has = |stems: &[String], stem: &str| stems.iter().any(|s| s == stem);

        (has(subject, stem1) && has(object, stem2)) || (has(subject, stem2) && has(object, stem1))
    }

    /// Jaccard similarity between the query stems and the triple's stems.
    fn score(&self, position: usize, query_stems: &AHashSet<&str>) -> Option<f32> {
        let stored: AHashSet<&str> = self
            .index
            .subject_stems(position)
            .iter()
            .chain(self.index.object_stems(position))
            .map(String::as_str)
            .collect();

        let union = query_stems.union(&stored).count();
        if union == 0 {
            return None;
        }
        let intersection = query_stems.intersection(&stored).count();

        Some(intersection as f32 / union as f32)
    }
}
