//! Entity-phrase analyzer.
//!
//! Normalizes free text into Porter stems: split on runs of non-word
//! characters or underscores, lowercase, drop English stop words, stem.
//! Output order follows the input and duplicates are kept.
//!
//! One instance is built up front and shared (behind an `Arc`) by the index
//! builder and the retriever, so both sides of a comparison always normalize
//! text the same way.
//!
//! # Examples
//!
//! ```
//! use relata::analysis::analyzer::PhraseAnalyzer;
//!
//! let analyzer = PhraseAnalyzer::new().unwrap();
//! assert_eq!(analyzer.stems("The running dogs").unwrap(), vec!["run", "dog"]);
//! ```

use std::collections::HashSet;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stem::StemFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// A stem paired with the lowercase word it was produced from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StemmedWord {
    pub original: String,
    pub stem: String,
}

pub struct PhraseAnalyzer {
    inner: PipelineAnalyzer,
}

impl PhraseAnalyzer {
    /// Create the analyzer with the built-in English stop words.
    pub fn new() -> Result<Self> {
        Self::with_stop_filter(StopFilter::new())
    }

    /// Create the analyzer with a custom stop word list.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Result<Self> {
        Self::with_stop_filter(StopFilter::with_stop_words(stop_words))
    }

    fn with_stop_filter(stop_filter: StopFilter) -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::word_separators()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(stop_filter))
            .add_filter(Arc::new(StemFilter::new()))
            .with_name("phrase");

        Ok(Self { inner: analyzer })
    }

    /// Stems of `text`, in order of appearance.
    pub fn stems(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.inner.analyze(text)?.map(|token| token.text).collect())
    }

    /// Stems of `text` together with the lowercase words they came from.
    pub fn stems_with_originals(&self, text: &str) -> Result<Vec<StemmedWord>> {
        Ok(self
            .inner
            .analyze(text)?
            .map(|token| StemmedWord {
                original: token.surface().to_string(),
                stem: token.text,
            })
            .collect())
    }
}

impl Analyzer for PhraseAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "phrase"
    }
}

impl Debug for PhraseAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhraseAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stems() {
        let analyzer = PhraseAnalyzer::new().unwrap();

        assert_eq!(
            analyzer.stems("Hot_Dogs are in the Kitchen!").unwrap(),
            vec!["hot", "dog", "kitchen"]
        );
    }

    #[test]
    fn test_empty_and_stop_only_input() {
        let analyzer = PhraseAnalyzer::new().unwrap();

        assert!(analyzer.stems("").unwrap().is_empty());
        assert!(analyzer.stems("   ").unwrap().is_empty());
        assert!(analyzer.stems("of the").unwrap().is_empty());
    }

    #[test]
    fn test_duplicates_preserved() {
        let analyzer = PhraseAnalyzer::new().unwrap();

        assert_eq!(
            analyzer.stems("cats and cat").unwrap(),
            vec!["cat", "cat"]
        );
    }

    #[test]
    fn test_stems_with_originals() {
        let analyzer = PhraseAnalyzer::new().unwrap();
        let words = analyzer.stems_with_originals("Running the Races").unwrap();

        assert_eq!(
            words,
            vec![
                StemmedWord {
                    original: "running".to_string(),
                    stem: "run".to_string(),
                },
                StemmedWord {
                    original: "races".to_string(),
                    stem: "race".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_custom_stop_words() {
        let stop_words = ["dog".to_string()].into_iter().collect();
        let analyzer = PhraseAnalyzer::with_stop_words(stop_words).unwrap();

        assert_eq!(analyzer.stems("the dog barks").unwrap(), vec!["the", "bark"]);
    }
}
