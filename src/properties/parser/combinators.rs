//! Parser combinator functions for building the properties grammar.
//!
//! Every combinator consumes `(Token, span)` pairs and yields byte ranges, so
//! raw text capture is always the full covered span; only the conversion step
//! decides what gets decoded.

use chumsky::prelude::*;
use std::ops::Range;

use crate::properties::lexer::Token;
use crate::properties::parser::intermediate_ast::{ExpressionWithSpans, PairWithSpans};

/// Type alias for token with span
pub(crate) type TokenSpan = (Token, Range<usize>);

/// Type alias for parser error
pub(crate) type ParserError = Simple<TokenSpan>;

/// Helper: compute span bounds from byte ranges
pub(crate) fn compute_byte_range_bounds(ranges: &[Range<usize>]) -> Range<usize> {
    match (ranges.first(), ranges.last()) {
        (Some(first), Some(last)) => first.start..last.end,
        _ => 0..0,
    }
}

/// Helper: match a specific token type, yielding its span
pub(crate) fn token(t: Token) -> impl Parser<TokenSpan, Range<usize>, Error = ParserError> + Clone {
    filter(move |(tok, _): &TokenSpan| *tok == t).map(|(_, span)| span)
}

/// Helper: match any token satisfying `predicate`, yielding its span
fn token_where(
    predicate: fn(&Token) -> bool,
) -> impl Parser<TokenSpan, Range<usize>, Error = ParserError> + Clone {
    filter(move |(tok, _): &TokenSpan| predicate(tok)).map(|(_, span)| span)
}

/// A backslash line continuation: the backslash, the line terminator and the
/// next line's indentation, captured as one span
///
/// A backslash at end of input is a continuation into nothing.
pub(crate) fn continuation() -> impl Parser<TokenSpan, Range<usize>, Error = ParserError> + Clone
{
    token(Token::Backslash)
        .then(
            token(Token::Newline)
                .then(token(Token::Whitespace).or_not())
                .or_not(),
        )
        .map(|(backslash, rest)| {
            let end = match rest {
                Some((_, Some(indent))) => indent.end,
                Some((newline, None)) => newline.end,
                None => backslash.end,
            };
            backslash.start..end
        })
}

/// Parse a key: text and escapes up to unescaped whitespace, a separator mark
/// or the end of the line
///
/// A continuation belongs to the key only when more key text follows it;
/// otherwise it is left for the separator.
pub(crate) fn key() -> impl Parser<TokenSpan, Range<usize>, Error = ParserError> + Clone {
    continuation()
        .repeated()
        .then(token_where(Token::is_key_content))
        .map(|(continuations, content)| {
            let start = continuations.first().map_or(content.start, |span| span.start);
            start..content.end
        })
        .repeated()
        .at_least(1)
        .map(|spans| compute_byte_range_bounds(&spans))
}

/// Whitespace or a line continuation, either of which may pad a separator
fn gap() -> impl Parser<TokenSpan, Range<usize>, Error = ParserError> + Clone {
    token(Token::Whitespace).or(continuation())
}

/// Parse a separator: `gap* [:=] ws?`, or `gap+` with no mark
pub(crate) fn separator() -> impl Parser<TokenSpan, Range<usize>, Error = ParserError> + Clone {
    let marked = gap()
        .repeated()
        .then(token_where(Token::is_separator_mark))
        .then(token(Token::Whitespace).or_not())
        .map(|((leading, mark), trailing)| {
            let start = leading.first().map_or(mark.start, |span| span.start);
            let end = trailing.map_or(mark.end, |span| span.end);
            start..end
        });

    let bare = gap()
        .repeated()
        .at_least(1)
        .map(|spans| compute_byte_range_bounds(&spans));

    marked.or(bare)
}

/// Parse a value: everything up to the end of the logical line
pub(crate) fn value() -> impl Parser<TokenSpan, Range<usize>, Error = ParserError> + Clone {
    token_where(Token::is_value_content)
        .or(continuation())
        .repeated()
        .at_least(1)
        .map(|spans| compute_byte_range_bounds(&spans))
}

/// Parse a comment: a marker and the rest of the physical line
pub(crate) fn comment(
) -> impl Parser<TokenSpan, ExpressionWithSpans, Error = ParserError> + Clone {
    filter(|(t, _): &TokenSpan| t.is_comment_marker())
        .then(token_where(|t| *t != Token::Newline).repeated())
        .map(|((marker, marker_span), body)| {
            let end = body.last().map_or(marker_span.end, |span| span.end);
            let span = marker_span.start..end;
            if marker == Token::Hash {
                ExpressionWithSpans::HashComment(span)
            } else {
                ExpressionWithSpans::BangComment(span)
            }
        })
}

/// Parse a run of whitespace and line terminators
pub(crate) fn whitespace_run(
) -> impl Parser<TokenSpan, ExpressionWithSpans, Error = ParserError> + Clone {
    token_where(Token::is_whitespace)
        .repeated()
        .at_least(1)
        .map(|spans| ExpressionWithSpans::Whitespace(compute_byte_range_bounds(&spans)))
}

/// Parse a pair: a key with optional separator and value, or a separator and
/// optional value with no key in front
pub(crate) fn pair() -> impl Parser<TokenSpan, ExpressionWithSpans, Error = ParserError> + Clone {
    let tail = separator().then(value().or_not());

    let keyed = key().then(tail.clone().or_not()).map(|(key, tail)| {
        let (separator, value) = match tail {
            Some((separator, value)) => (Some(separator), value),
            None => (None, None),
        };
        PairWithSpans {
            key: Some(key),
            separator,
            value,
        }
    });

    let keyless = tail.map(|(separator, value)| PairWithSpans {
        key: None,
        separator: Some(separator),
        value,
    });

    keyed.or(keyless).map(ExpressionWithSpans::Pair)
}
