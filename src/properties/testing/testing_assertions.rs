//! Fluent assertion API for documents

use crate::properties::ast::{AstNode, Document, Pair, TopLevelExpression};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a document
pub fn assert_doc(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

// ============================================================================
// Document Assertions
// ============================================================================

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of top-level expressions
    pub fn expression_count(self, expected: usize) -> Self {
        let actual = self.doc.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} expressions, found {}: [{}]",
            expected,
            actual,
            summarize(self.doc)
        );
        self
    }

    /// Assert the number of pairs, ignoring trivia and comments
    pub fn pair_count(self, expected: usize) -> Self {
        let actual = self.doc.iter_pairs().count();
        assert_eq!(
            actual,
            expected,
            "Expected {} pairs, found {}: [{}]",
            expected,
            actual,
            summarize(self.doc)
        );
        self
    }

    /// Assert on a specific expression by index
    pub fn expression<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ExpressionAssertion<'a>),
    {
        assert!(
            index < self.doc.len(),
            "Expression index {} out of bounds (document has {} expressions)",
            index,
            self.doc.len()
        );

        assertion(ExpressionAssertion {
            expression: &self.doc.expressions[index],
            context: format!("expressions[{}]", index),
        });
        self
    }
}

fn summarize(doc: &Document) -> String {
    doc.iter_expressions()
        .map(|e| format!("{}({})", e.node_type(), e.display_label()))
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Expression Assertions
// ============================================================================

pub struct ExpressionAssertion<'a> {
    expression: &'a TopLevelExpression,
    context: String,
}

impl<'a> ExpressionAssertion<'a> {
    fn unexpected(&self, wanted: &str) -> ! {
        panic!(
            "{}: Expected {}, found {} '{}'",
            self.context,
            wanted,
            self.expression.node_type(),
            self.expression.display_label()
        )
    }

    /// Assert this expression is a Pair and return pair-specific assertions
    pub fn assert_pair(self) -> PairAssertion<'a> {
        match self.expression {
            TopLevelExpression::Pair(pair) => PairAssertion {
                pair,
                context: self.context,
            },
            _ => self.unexpected("Pair"),
        }
    }

    /// Assert this expression is a `#` comment with the given text
    pub fn assert_hash_comment(self, text: &str) {
        match self.expression {
            TopLevelExpression::HashComment(comment) => {
                assert_eq!(comment.text, text, "{}: comment text mismatch", self.context)
            }
            _ => self.unexpected("HashComment"),
        }
    }

    /// Assert this expression is a `!` comment with the given text
    pub fn assert_bang_comment(self, text: &str) {
        match self.expression {
            TopLevelExpression::BangComment(comment) => {
                assert_eq!(comment.text, text, "{}: comment text mismatch", self.context)
            }
            _ => self.unexpected("BangComment"),
        }
    }

    pub fn assert_whitespace(self, content: &str) {
        match self.expression {
            TopLevelExpression::Whitespace(ws) => {
                assert_eq!(ws.content, content, "{}: whitespace mismatch", self.context)
            }
            _ => self.unexpected("Whitespace"),
        }
    }

    pub fn assert_newline(self, content: &str) {
        match self.expression {
            TopLevelExpression::NewLine(newline) => {
                assert_eq!(newline.content, content, "{}: newline mismatch", self.context)
            }
            _ => self.unexpected("NewLine"),
        }
    }

    /// Check if this expression is a pair (non-panicking)
    pub fn is_pair(&self) -> bool {
        self.expression.is_pair()
    }
}

// ============================================================================
// Pair Assertions
// ============================================================================

pub struct PairAssertion<'a> {
    pair: &'a Pair,
    context: String,
}

impl<'a> PairAssertion<'a> {
    /// Assert the decoded key text
    pub fn key(self, expected: &str) -> Self {
        let actual = self.pair.key.as_ref().map(|key| key.text());
        assert_eq!(actual, Some(expected), "{}: key mismatch", self.context);
        self
    }

    /// Assert the raw key text
    pub fn key_raw(self, expected: &str) -> Self {
        let actual = self.pair.key.as_ref().map(|key| key.raw());
        assert_eq!(actual, Some(expected), "{}: raw key mismatch", self.context);
        self
    }

    pub fn no_key(self) -> Self {
        assert!(
            self.pair.key.is_none(),
            "{}: expected no key, found {:?}",
            self.context,
            self.pair.key
        );
        self
    }

    /// Assert the raw separator text
    pub fn separator(self, expected: &str) -> Self {
        let actual = self.pair.separator.as_ref().map(|separator| separator.raw());
        assert_eq!(actual, Some(expected), "{}: separator mismatch", self.context);
        self
    }

    pub fn no_separator(self) -> Self {
        assert!(
            self.pair.separator.is_none(),
            "{}: expected no separator, found {:?}",
            self.context,
            self.pair.separator
        );
        self
    }

    /// Assert the decoded value text
    pub fn value(self, expected: &str) -> Self {
        let actual = self.pair.value.as_ref().map(|value| value.text());
        assert_eq!(actual, Some(expected), "{}: value mismatch", self.context);
        self
    }

    /// Assert the raw value text
    pub fn value_raw(self, expected: &str) -> Self {
        let actual = self.pair.value.as_ref().map(|value| value.raw());
        assert_eq!(actual, Some(expected), "{}: raw value mismatch", self.context);
        self
    }

    pub fn no_value(self) -> Self {
        assert!(
            self.pair.value.is_none(),
            "{}: expected no value, found {:?}",
            self.context,
            self.pair.value
        );
        self
    }
}
