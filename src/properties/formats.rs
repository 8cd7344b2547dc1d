//! Output formats for parsed documents
//!
//! - [`tag`]: XML-like tags that mirror the document tree
//! - [`treeviz`]: a box-drawing outline built from [`AstNode`](crate::properties::ast::AstNode) labels
//!
//! JSON and YAML output come straight from the serde derives on the document
//! model and live in the [processor](crate::properties::processor).

pub mod tag;
pub mod treeviz;

pub use tag::serialize_ast_tag;
pub use treeviz::to_treeviz_str;

/// Spell control characters as their escapes so every node fits on one line
pub(crate) fn escape_control(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{000C}' => escaped.push_str("\\f"),
            other => escaped.push(other),
        }
    }
    escaped
}
