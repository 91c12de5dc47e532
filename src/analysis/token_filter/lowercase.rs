//! Lowercase filter.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Unicode-aware lowercasing of every token.
///
/// Lowercasing is not a rewrite: the surface form reported downstream is the
/// lowercased word.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|mut token| {
            token.text = token.text.to_lowercase();
            token
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_lowercase_filter() {
        let tokens = vec![
            Token::new("Oven", 0),
            Token::new("CAFÉ", 1),
            Token::with_offsets("The", 2, 10, 13),
        ];

        let result: Vec<Token> = LowercaseFilter::new()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].text, "oven");
        assert_eq!(result[0].surface(), "oven");
        assert_eq!(result[1].text, "café");
        assert_eq!(result[2].text, "the");
        assert_eq!((result[2].position, result[2].start_offset), (2, 10));
    }
}
