//! Parser module for the properties format
//!
//! Parsing runs in three steps:
//!
//! 1. the [lexer](crate::properties::lexer) turns the source into spanned tokens
//! 2. the chumsky grammar in [`document`] groups tokens into span-only
//!    expressions (comments, whitespace runs, pairs and their parts)
//! 3. [`ast_conversion`] slices the source for every span and decodes keys and
//!    values, failing the whole parse on a malformed escape
//!
//! The grammar accepts any token sequence, so step 3 is the only place a
//! parse can fail in practice.
//!
//! ## Testing
//!
//! See the [testing module](crate::properties::testing) for the verified
//! samples and document assertions used by parser tests.

pub mod api;
pub(crate) mod ast_conversion;
pub(crate) mod combinators;
pub(crate) mod document;
pub(crate) mod intermediate_ast;

pub use api::parse_with_source;

use crate::properties::ast::{Document, ParseError};
use crate::properties::lexer::lex;

/// Main parser function that takes source text and returns a parsed document
/// This is the primary entry point for parsing properties files
pub fn parse_document(source: &str) -> Result<Document, ParseError> {
    tracing::debug!(bytes = source.len(), "parsing properties document");

    let tokens = lex(source);
    let result = parse_with_source(tokens, source);

    match &result {
        Ok(doc) => tracing::debug!(expressions = doc.len(), "parsed properties document"),
        Err(err) => tracing::debug!(%err, "failed to parse properties document"),
    }
    result
}
