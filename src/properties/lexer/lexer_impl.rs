//! Implementation of the properties lexer
//!
//! This module provides convenience functions for tokenizing properties text.
//! The actual tokenization is handled entirely by logos.

use crate::properties::lexer::tokens::Token;
use logos::Logos;

/// Convenience function to tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_spans(source)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Convenience function to tokenize a string and collect tokens with their spans
///
/// The token definitions cover every character, so logos never reports an
/// error in practice. Should it ever do so, the unmatched slice is kept as
/// `Text` so no input is lost.
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push((result.unwrap_or(Token::Text), lexer.span()));
    }

    tokens
}
