//! Analyzers: complete text processing pipelines.
//!
//! - [`pipeline::PipelineAnalyzer`] - A tokenizer followed by a chain of filters
//! - [`phrase::PhraseAnalyzer`] - The entity-phrase normalizer shared by index
//!   construction and retrieval

#[allow(clippy::module_inception)]
pub mod analyzer;
pub mod phrase;
pub mod pipeline;

pub use analyzer::Analyzer;
pub use phrase::PhraseAnalyzer;
pub use pipeline::PipelineAnalyzer;
