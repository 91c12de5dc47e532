//! Knowledge-graph side of Relata: labels, relation vocabulary, triples,
//! the inverted index and retrieval.

pub mod index;
pub mod label;
pub mod relation;
pub mod retrieval;
pub mod triple;

pub use index::{BuildStats, TripleIndex, TripleIndexBuilder};
pub use label::LabelTable;
pub use relation::{NONE, RelationFilter, SAME_AS, display_relation};
pub use retrieval::{DEFAULT_LIMIT, Retriever};
pub use triple::{RawTriple, ScoredTriple, Triple};
