//! Detokenizer for the properties format
//!
//! Tokens do not own their text, so turning a stream back into a string means
//! slicing the source they were lexed from.
use crate::properties::lexer::tokens::Token;
use std::ops::Range;

/// Detokenize a stream of spanned tokens into a string
///
/// Over the complete output of [`super::lex`] this reproduces `source`
/// exactly. Spans outside of `source` contribute nothing.
pub fn detokenize(source: &str, tokens: &[(Token, Range<usize>)]) -> String {
    let mut result = String::with_capacity(source.len());

    for (_, span) in tokens {
        if let Some(text) = source.get(span.clone()) {
            result.push_str(text);
        }
    }

    result
}
