//! AST conversion functions that transform intermediate, span-based nodes
//! into the final document with raw and decoded text.

use std::ops::Range;

use super::intermediate_ast::{ExpressionWithSpans, PairWithSpans};
use crate::properties::ast::{
    Comment, Document, Fragment, Key, NewLine, Pair, ParseError, Separator, TopLevelExpression,
    Value, Whitespace,
};

/// Helper to extract text from source using a span
pub(crate) fn extract_text<'a>(source: &'a str, span: &Range<usize>) -> &'a str {
    source.get(span.clone()).unwrap_or_default()
}

/// Convert intermediate expressions to the final document
///
/// Stops at the first malformed escape, in source order.
pub(crate) fn convert_document(
    source: &str,
    expressions: Vec<ExpressionWithSpans>,
) -> Result<Document, ParseError> {
    expressions
        .into_iter()
        .map(|expression| convert_expression(source, expression))
        .collect()
}

fn convert_expression(
    source: &str,
    expression: ExpressionWithSpans,
) -> Result<TopLevelExpression, ParseError> {
    Ok(match expression {
        ExpressionWithSpans::Whitespace(span) => {
            TopLevelExpression::Whitespace(Whitespace::new(extract_text(source, &span)))
        }
        ExpressionWithSpans::HashComment(span) => {
            TopLevelExpression::HashComment(comment_after_marker(source, &span))
        }
        ExpressionWithSpans::BangComment(span) => {
            TopLevelExpression::BangComment(comment_after_marker(source, &span))
        }
        ExpressionWithSpans::NewLine(span) => {
            TopLevelExpression::NewLine(NewLine::new(extract_text(source, &span)))
        }
        ExpressionWithSpans::Pair(pair) => TopLevelExpression::Pair(convert_pair(source, pair)?),
    })
}

/// Comment markers are single ASCII bytes
fn comment_after_marker(source: &str, span: &Range<usize>) -> Comment {
    Comment::new(extract_text(source, &(span.start + 1..span.end)))
}

fn convert_pair(source: &str, pair: PairWithSpans) -> Result<Pair, ParseError> {
    let key = pair
        .key
        .map(|span| convert_fragment(source, &span).map(Key))
        .transpose()?;
    let separator = pair
        .separator
        .map(|span| Separator::new(extract_text(source, &span)));
    let value = pair
        .value
        .map(|span| convert_fragment(source, &span).map(Value))
        .transpose()?;

    Ok(Pair::new(key, separator, value))
}

fn convert_fragment(source: &str, span: &Range<usize>) -> Result<Fragment, ParseError> {
    Fragment::from_raw(extract_text(source, span))
        .map_err(|err| ParseError::malformed_escape(source, span.start, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_out_of_range() {
        assert_eq!(extract_text("abc", &(1..3)), "bc");
        assert_eq!(extract_text("abc", &(2..9)), "");
    }

    #[test]
    fn test_convert_pair_with_continuation() {
        let source = "ke\\\r\n   y:value";
        let doc = convert_document(
            source,
            vec![ExpressionWithSpans::Pair(PairWithSpans {
                key: Some(0..9),
                separator: Some(9..10),
                value: Some(10..15),
            })],
        )
        .unwrap();

        let pair = doc.iter_pairs().next().unwrap();
        assert_eq!(pair.key, Some(Key::with_raw("key", "ke\\\r\n   y")));
        assert_eq!(pair.separator, Some(Separator::new(":")));
        assert_eq!(pair.value, Some(Value::new("value")));
    }

    #[test]
    fn test_convert_comment_strips_marker() {
        let doc = convert_document(
            "! note",
            vec![ExpressionWithSpans::BangComment(0..6)],
        )
        .unwrap();
        assert_eq!(
            doc.expressions,
            vec![TopLevelExpression::BangComment(Comment::new(" note"))]
        );
    }

    #[test]
    fn test_malformed_escape_in_value_is_located() {
        let source = "k=\\u00zz";
        let err = convert_document(
            source,
            vec![ExpressionWithSpans::Pair(PairWithSpans {
                key: Some(0..1),
                separator: Some(1..2),
                value: Some(2..8),
            })],
        )
        .unwrap_err();
        assert_eq!(err.offset(), 2);
    }
}
