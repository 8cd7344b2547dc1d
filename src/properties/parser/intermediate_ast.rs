//! Intermediate AST structures that hold spans instead of extracted text
//! These are converted to final AST structures after parsing completes

use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PairWithSpans {
    pub(crate) key: Option<Range<usize>>,
    pub(crate) separator: Option<Range<usize>>,
    pub(crate) value: Option<Range<usize>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ExpressionWithSpans {
    Whitespace(Range<usize>),
    /// Span includes the `#` marker
    HashComment(Range<usize>),
    /// Span includes the `!` marker
    BangComment(Range<usize>),
    NewLine(Range<usize>),
    Pair(PairWithSpans),
}
