//! Error types for parsing

use super::position::SourceLocation;
use super::span::{Position, Span};
use crate::properties::escape::MalformedEscape;
use thiserror::Error;

/// Errors that abort parsing of a whole document
///
/// No partial document accompanies an error: once an escape is ambiguous the
/// boundaries of everything after it cannot be trusted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `\u` escape in a key or value without four hex digits after it
    #[error("malformed escape {sequence:?} at {position} (byte {offset})")]
    MalformedEscape {
        /// Byte offset of the escape's backslash in the source
        offset: usize,
        /// 0-based line and byte column of the backslash
        position: Position,
        /// Where the offending sequence starts and ends
        span: Span,
        sequence: String,
    },
    /// The grammar rejected the token stream. The grammar accepts every
    /// token sequence, so this indicates a bug rather than bad input.
    #[error("unexpected input at byte {offset}: {message}")]
    UnexpectedToken { offset: usize, message: String },
}

impl ParseError {
    /// Locate a decoder error that occurred in the span starting at `span_start`
    pub(crate) fn malformed_escape(source: &str, span_start: usize, err: MalformedEscape) -> Self {
        let offset = span_start + err.offset;
        let range = offset..offset + err.sequence.len();
        let span = SourceLocation::new(source).range_to_span(&range);
        ParseError::MalformedEscape {
            offset,
            position: span.start,
            span,
            sequence: err.sequence,
        }
    }

    /// Byte offset of the error in the source
    pub fn offset(&self) -> usize {
        match self {
            ParseError::MalformedEscape { offset, .. } => *offset,
            ParseError::UnexpectedToken { offset, .. } => *offset,
        }
    }
}
