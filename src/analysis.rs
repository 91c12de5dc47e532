//! Text analysis module for Relata.
//!
//! Tokenizers split text, token filters normalize the tokens, and analyzers
//! chain both into a reusable pipeline.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
