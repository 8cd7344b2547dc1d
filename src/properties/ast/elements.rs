//! Element definitions for the document tree
//!
//! The tree is deliberately flat: a [`Document`] is an ordered list of
//! [`TopLevelExpression`]s, and only a [`Pair`] has inner structure.

pub mod document;
pub mod expression;
pub mod pair;

pub use document::Document;
pub use expression::{Comment, NewLine, TopLevelExpression, Whitespace};
pub use pair::{Fragment, Key, Pair, Separator, Value};
