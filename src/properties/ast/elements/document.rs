//! Document element definition

use super::super::traits::{AstNode, RawText};
use super::expression::TopLevelExpression;
use super::pair::Pair;
use serde::Serialize;
use std::fmt;

/// A document is the ordered list of everything in a properties file
///
/// Writing out the raw text of every expression in order gives back the
/// parsed source byte for byte, as long as nothing was edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Document {
    pub expressions: Vec<TopLevelExpression>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expressions(expressions: Vec<TopLevelExpression>) -> Self {
        Self { expressions }
    }

    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    pub fn iter_expressions(&self) -> impl Iterator<Item = &TopLevelExpression> {
        self.expressions.iter()
    }

    pub fn iter_pairs(&self) -> impl Iterator<Item = &Pair> {
        self.expressions.iter().filter_map(|expr| expr.as_pair())
    }

    /// A copy of this document with the expression at `index` replaced,
    /// or `None` if there is no such expression
    pub fn replace_expression(&self, index: usize, expression: TopLevelExpression) -> Option<Self> {
        if index >= self.expressions.len() {
            return None;
        }
        let mut expressions = self.expressions.clone();
        expressions[index] = expression;
        Some(Self { expressions })
    }

    /// A copy of this document with every pair passed through `edit`
    pub fn map_pairs(&self, mut edit: impl FnMut(&Pair) -> Pair) -> Self {
        self.expressions
            .iter()
            .map(|expr| match expr {
                TopLevelExpression::Pair(pair) => TopLevelExpression::Pair(edit(pair)),
                other => other.clone(),
            })
            .collect()
    }
}

impl FromIterator<TopLevelExpression> for Document {
    fn from_iter<I: IntoIterator<Item = TopLevelExpression>>(iter: I) -> Self {
        Self {
            expressions: iter.into_iter().collect(),
        }
    }
}

impl AstNode for Document {
    fn node_type(&self) -> &'static str {
        "Document"
    }

    fn display_label(&self) -> String {
        format!("{} expressions", self.expressions.len())
    }
}

impl RawText for Document {
    fn write_raw(&self, out: &mut String) {
        for expression in &self.expressions {
            expression.write_raw(out);
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw_text())
    }
}

#[cfg(test)]
mod tests {
    use super::super::expression::{NewLine, Whitespace};
    use super::super::pair::{Key, Separator, Value};
    use super::*;

    fn sample() -> Document {
        Document::with_expressions(vec![
            Pair::new(
                Some(Key::new("key")),
                Some(Separator::new(" = ")),
                Some(Value::new("value")),
            )
            .into(),
            NewLine::new("\n").into(),
            Whitespace::new("\n").into(),
            Pair::new(Some(Key::new("other")), None, None).into(),
        ])
    }

    #[test]
    fn test_raw_text_concatenates_expressions() {
        assert_eq!(sample().raw_text(), "key = value\n\nother");
        assert_eq!(sample().to_string(), "key = value\n\nother");
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.raw_text(), "");
    }

    #[test]
    fn test_iter_pairs() {
        let doc = sample();
        let keys: Vec<_> = doc.iter_pairs().filter_map(Pair::key_text).collect();
        assert_eq!(keys, vec!["key", "other"]);
    }

    #[test]
    fn test_replace_expression() {
        let doc = sample();
        let edited = doc
            .replace_expression(2, Whitespace::new("\n\n").into())
            .unwrap();
        assert_eq!(edited.raw_text(), "key = value\n\n\nother");
        assert_eq!(doc.raw_text(), "key = value\n\nother");
        assert!(doc.replace_expression(4, NewLine::new("\n").into()).is_none());
    }

    #[test]
    fn test_map_pairs() {
        let doc = sample().map_pairs(|pair| match pair.key_text() {
            Some("key") => pair.with_value(Some(Value::new("changed"))),
            _ => pair.clone(),
        });
        assert_eq!(doc.raw_text(), "key = changed\n\nother");
    }
}
