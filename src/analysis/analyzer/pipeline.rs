//! Tokenizer followed by an ordered chain of token filters.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use relata::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use relata::analysis::token_filter::lowercase::LowercaseFilter;
//! use relata::analysis::token_filter::stop::StopFilter;
//! use relata::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(RegexTokenizer::word_separators().unwrap()))
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["of"])))
//!     .with_name("label");
//!
//! let words: Vec<String> = analyzer
//!     .analyze("Piece_of_Cake")
//!     .unwrap()
//!     .map(|token| token.text)
//!     .collect();
//! assert_eq!(words, vec!["piece", "cake"]);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Append a filter; filters run in insertion order.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    pub fn pipeline_name(&self) -> &str {
        &self.name
    }

    /// Names of the tokenizer and each filter, in execution order.
    pub fn stages(&self) -> Vec<&'static str> {
        std::iter::once(self.tokenizer.name())
            .chain(self.filters.iter().map(|filter| filter.name()))
            .collect()
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.filters
            .iter()
            .try_fold(self.tokenizer.tokenize(text)?, |tokens, filter| {
                filter.filter(tokens)
            })
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("stages", &self.stages())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::analysis::token_filter::lowercase::LowercaseFilter;
    use crate::analysis::token_filter::stop::StopFilter;
    use crate::analysis::tokenizer::regex::RegexTokenizer;

    #[test]
    fn test_filters_run_in_order() {
        // Stop before lowercase: "The" survives because the list is lowercase.
        let analyzer = PipelineAnalyzer::new(Arc::new(RegexTokenizer::word_separators().unwrap()))
            .add_filter(Arc::new(StopFilter::from_words(vec!["the"])))
            .add_filter(Arc::new(LowercaseFilter::new()));

        let tokens: Vec<Token> = analyzer.analyze("The oven, the kitchen").unwrap().collect();
        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();

        assert_eq!(words, vec!["the", "oven", "kitchen"]);
        assert_eq!(tokens[2].position, 3);
    }

    #[test]
    fn test_stages_and_name() {
        let analyzer = PipelineAnalyzer::new(Arc::new(RegexTokenizer::word_separators().unwrap()))
            .add_filter(Arc::new(LowercaseFilter::new()));

        assert_eq!(analyzer.pipeline_name(), "pipeline_regex");
        assert_eq!(analyzer.stages(), vec!["regex", "lowercase"]);
        assert!(format!("{analyzer:?}").contains("lowercase"));
    }
}
