//! Document-level parser responsible for parsing the entire properties file.

use chumsky::prelude::*;

use crate::properties::lexer::Token;
use crate::properties::parser::combinators::{
    comment, pair, token, whitespace_run, ParserError, TokenSpan,
};
use crate::properties::parser::intermediate_ast::ExpressionWithSpans;

/// A comment or pair followed by the newline that ends it, if any
fn terminated<P>(
    item: P,
) -> impl Parser<TokenSpan, Vec<ExpressionWithSpans>, Error = ParserError> + Clone
where
    P: Parser<TokenSpan, ExpressionWithSpans, Error = ParserError> + Clone,
{
    item.then(token(Token::Newline).or_not())
        .map(|(item, newline)| {
            let mut expressions = vec![item];
            expressions.extend(newline.map(ExpressionWithSpans::NewLine));
            expressions
        })
}

/// Parse a document
///
/// At each position the alternatives are tried in order: comment line,
/// whitespace run, pair. Whitespace runs swallow blank lines and the
/// indentation before the next comment or pair; a pair never starts with
/// whitespace.
pub(crate) fn document(
) -> impl Parser<TokenSpan, Vec<ExpressionWithSpans>, Error = ParserError> + Clone {
    choice((
        terminated(comment()),
        whitespace_run().map(|ws| vec![ws]),
        terminated(pair()),
    ))
    .repeated()
    .flatten()
    .then_ignore(end())
}
