//! Lexer module for the properties format
//!
//! This module contains the tokenization logic for the properties format,
//! including token definitions and the lexer implementation.
//!
//! Tokenization is a single greedy pass that never fails: every byte of the
//! input ends up in exactly one token, so [`detokenize`] over the full token
//! stream gives back the original source. The grammar works on the
//! `(Token, span)` pairs produced by [`lex`].

pub mod detokenizer;
pub mod lexer_impl;
pub mod tokens;

pub use detokenizer::detokenize;
pub use lexer_impl::{tokenize, tokenize_with_spans};
pub use tokens::Token;

/// Lexing function used by the parser
/// Returns tokens with their corresponding source spans
pub fn lex(source: &str) -> Vec<(Token, std::ops::Range<usize>)> {
    let tokens = tokenize_with_spans(source);
    tracing::trace!(bytes = source.len(), tokens = tokens.len(), "lexed source");
    tokens
}
