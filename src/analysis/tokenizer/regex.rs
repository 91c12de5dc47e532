//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{RelataError, Result};

/// Separator pattern used for entity phrases: any run of non-word characters
/// or underscores.
pub const WORD_SEPARATOR_PATTERN: &str = r"[\W_]+";

/// A tokenizer whose pattern describes separators; the text between matches
/// becomes the tokens.
///
/// Empty gaps (a separator at the very start or end of the input, or empty
/// input) never produce a token.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    separator: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a tokenizer that splits on [`WORD_SEPARATOR_PATTERN`].
    pub fn word_separators() -> Result<Self> {
        Self::with_separator(WORD_SEPARATOR_PATTERN)
    }

    /// Create a tokenizer that splits on a custom separator pattern.
    pub fn with_separator(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| RelataError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            separator: Arc::new(regex),
        })
    }

    /// The separator pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.separator.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut last_end = 0;

        let gap_ends = self
            .separator
            .find_iter(text)
            .map(|sep| (sep.start(), sep.end()))
            .chain(std::iter::once((text.len(), text.len())));

        for (gap_end, next_start) in gap_ends {
            if gap_end > last_end {
                tokens.push(Token::with_offsets(
                    &text[last_end..gap_end],
                    tokens.len(),
                    last_end,
                    gap_end,
                ));
            }
            last_end = next_start;
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
