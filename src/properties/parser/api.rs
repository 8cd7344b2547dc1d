//! Public API for the parser.

use chumsky::prelude::*;

use crate::properties::ast::{Document, ParseError};
use crate::properties::parser::ast_conversion::convert_document;
use crate::properties::parser::combinators::{ParserError, TokenSpan};
use crate::properties::parser::document::document;

/// Parse with source text - extracts actual content from spans
///
/// `tokens_with_spans` must be the lexer output for `source`.
pub fn parse_with_source(
    tokens_with_spans: Vec<TokenSpan>,
    source: &str,
) -> Result<Document, ParseError> {
    let expressions = document()
        .parse(tokens_with_spans)
        .map_err(|errors| grammar_error(source, errors))?;
    convert_document(source, expressions)
}

fn grammar_error(source: &str, errors: Vec<ParserError>) -> ParseError {
    let Some(error) = errors.into_iter().next() else {
        return ParseError::UnexpectedToken {
            offset: 0,
            message: "parser reported no error detail".to_string(),
        };
    };

    match error.found() {
        Some((token, span)) => ParseError::UnexpectedToken {
            offset: span.start,
            message: format!("unexpected {}", token.name()),
        },
        None => ParseError::UnexpectedToken {
            offset: source.len(),
            message: "unexpected end of input".to_string(),
        },
    }
}
