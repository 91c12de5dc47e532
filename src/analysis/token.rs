//! Tokens flowing through the analysis pipeline.
//!
//! The tokenizer creates a [`Token`] per word; filters then rewrite its text
//! or drop it. A filter that replaces the text with a normalized form
//! (the stemmer) goes through [`Token::rewrite`], which remembers the form the
//! word had when it reached that filter.
//!
//! # Examples
//!
//! ```
//! use relata::analysis::token::Token;
//!
//! let token = Token::with_offsets("dogs", 1, 4, 8).rewrite("dog");
//! assert_eq!(token.text, "dog");
//! assert_eq!(token.surface(), "dogs");
//! assert_eq!((token.start_offset, token.end_offset), (4, 8));
//! ```

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Current (possibly normalized) text.
    pub text: String,

    /// Index of the token among the tokenizer's output (0-based).
    pub position: usize,

    /// Byte range of the word in the analyzed text.
    pub start_offset: usize,
    pub end_offset: usize,

    /// Text before the first [`Token::rewrite`]; `None` until then.
    pub surface_form: Option<String>,
}

impl Token {
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Self::with_offsets(text, position, 0, 0)
    }

    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            surface_form: None,
        }
    }

    /// Replace the text with a normalized form, keeping the surface form.
    ///
    /// Only the first rewrite records the surface form, so chained
    /// normalizers still report the word as it was first rewritten from.
    pub fn rewrite<S: Into<String>>(mut self, normalized: S) -> Self {
        let previous = std::mem::replace(&mut self.text, normalized.into());
        self.surface_form.get_or_insert(previous);
        self
    }

    /// The text before normalization, or the current text if never rewritten.
    pub fn surface(&self) -> &str {
        self.surface_form.as_deref().unwrap_or(&self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
