//! # Relata
//!
//! Token-overlap retrieval of commonsense knowledge-graph triples that link
//! two short phrases.
//!
//! ## Features
//!
//! - Regex tokenizer, English stop words and Porter stemming
//! - Label resolution and relation filtering while loading triples
//! - Inverted index from stems to triple positions
//! - Jaccard scoring with synthetic `SameAs` and "no relation" results
//!
//! ```
//! use std::sync::Arc;
//!
//! use relata::analysis::analyzer::PhraseAnalyzer;
//! use relata::graph::{LabelTable, RawTriple, RelationFilter, Retriever, TripleIndex};
//!
//! let analyzer = Arc::new(PhraseAnalyzer::new().unwrap());
//! let labels: LabelTable = [("n1", "dog"), ("n2", "animal")].into_iter().collect();
//! let records = vec![RawTriple::new("n1", "/r/IsA", "n2")];
//! let index = TripleIndex::build(records, &labels, RelationFilter::default(), &analyzer).unwrap();
//!
//! let results = Retriever::new(&index, analyzer).retrieve("dogs", "animal", 10).unwrap();
//! assert_eq!(results[0].triple.display(), "dog a type of animal");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;

pub use config::RelataConfig;
pub use error::{RelataError, Result};
pub use graph::{LabelTable, Retriever, ScoredTriple, Triple, TripleIndex};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
