//! Builder functions for constructing documents without parsing
//!
//! These take decoded content and build nodes directly, bypassing the lexer
//! and grammar. They serve two purposes: spelling out expected trees in tests,
//! and editing a parsed document.
//!
//! Without an explicit raw form a fragment's raw text equals its decoded text;
//! nothing is escaped. Pass a pre-escaped raw form through [`key_with_raw`] or
//! [`value_with_raw`] when the serialized spelling matters.
//!
//! ```rust,ignore
//! use javaprops::properties::builder::*;
//!
//! let expected = doc([
//!     pair(key("key"), separator(" = "), value("value")),
//!     new_line("\n"),
//! ]);
//! ```

use crate::properties::ast::{
    Comment, Document, Key, NewLine, Pair, Separator, TopLevelExpression, Value, Whitespace,
};

/// A document from its expressions, in order
pub fn doc(expressions: impl IntoIterator<Item = TopLevelExpression>) -> Document {
    expressions.into_iter().collect()
}

pub fn whitespace(content: impl Into<String>) -> TopLevelExpression {
    TopLevelExpression::Whitespace(Whitespace::new(content))
}

/// A `#` comment; `text` is everything after the marker
pub fn hash_comment(text: impl Into<String>) -> TopLevelExpression {
    TopLevelExpression::HashComment(Comment::new(text))
}

/// A `!` comment; `text` is everything after the marker
pub fn bang_comment(text: impl Into<String>) -> TopLevelExpression {
    TopLevelExpression::BangComment(Comment::new(text))
}

pub fn new_line(content: impl Into<String>) -> TopLevelExpression {
    TopLevelExpression::NewLine(NewLine::new(content))
}

/// A pair expression. Each slot takes either the node or `None`.
pub fn pair(
    key: impl Into<Option<Key>>,
    separator: impl Into<Option<Separator>>,
    value: impl Into<Option<Value>>,
) -> TopLevelExpression {
    TopLevelExpression::Pair(Pair::new(key.into(), separator.into(), value.into()))
}

pub fn key(text: impl Into<String>) -> Key {
    Key::new(text)
}

pub fn key_with_raw(text: impl Into<String>, raw: impl Into<String>) -> Key {
    Key::with_raw(text, raw)
}

pub fn value(text: impl Into<String>) -> Value {
    Value::new(text)
}

pub fn value_with_raw(text: impl Into<String>, raw: impl Into<String>) -> Value {
    Value::with_raw(text, raw)
}

pub fn separator(raw: impl Into<String>) -> Separator {
    Separator::new(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::ast::RawText;

    #[test]
    fn test_build_document() {
        let built = doc([
            hash_comment(" settings"),
            new_line("\n"),
            pair(key("key"), separator(" = "), value("value")),
            new_line("\n"),
            whitespace("\n"),
            pair(key_with_raw("a b", "a\\ b"), separator(":"), None),
        ]);

        assert_eq!(built.len(), 6);
        assert_eq!(built.raw_text(), "# settings\nkey = value\n\na\\ b:");
    }

    #[test]
    fn test_raw_defaults_to_decoded() {
        // No escaping is applied on the caller's behalf
        let built = doc([pair(key("a=b"), separator("="), value("line\nbreak"))]);
        assert_eq!(built.raw_text(), "a=b=line\nbreak");
    }

    #[test]
    fn test_absent_slots() {
        let built = pair(None, separator(":"), value("value"));
        let pair = built.as_pair().unwrap();
        assert_eq!(pair.key, None);
        assert_eq!(pair.value_text(), Some("value"));
    }

    #[test]
    fn test_value_with_raw() {
        let value = value_with_raw("value", "val\\\n  ue");
        assert_eq!(value.text(), "value");
        assert_eq!(value.raw(), "val\\\n  ue");
    }
}
