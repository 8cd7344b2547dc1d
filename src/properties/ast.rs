//! Document model for the properties format
//!
//! This module provides the lossless document tree produced by the parser and
//! consumed by the builder and the output formats, along with utilities for
//! tracking source positions.
//!
//! ## Modules
//!
//! - `span` - Position and Span types for source code locations
//! - `elements` - Document, top-level expressions and pair fragments
//! - `position` - Source location utilities for converting byte offsets
//! - `traits` - Uniform node access used by the formatters
//! - `error` - Parse errors

pub mod elements;
pub mod error;
pub mod position;
pub mod span;
pub mod traits;

// Re-export commonly used types at module root
pub use elements::{
    Comment, Document, Fragment, Key, NewLine, Pair, Separator, TopLevelExpression, Value,
    Whitespace,
};
pub use error::ParseError;
pub use position::SourceLocation;
pub use span::{Position, Span};
pub use traits::{AstNode, RawText};
