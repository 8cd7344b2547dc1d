//! Top-level expression definitions

use super::super::traits::{AstNode, RawText};
use super::pair::Pair;
use serde::Serialize;

/// A run of spaces, tabs, form feeds and line terminators
///
/// Blank lines and the indentation in front of a comment or pair end up here.
/// Its raw text is its content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Whitespace {
    pub content: String,
}

impl Whitespace {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// The text of a comment line, after its marker
///
/// Comment text is kept verbatim; escapes inside comments mean nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Comment {
    pub text: String,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// The line terminator that ends a comment or pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NewLine {
    pub content: String,
}

impl NewLine {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// One element of a document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type")]
pub enum TopLevelExpression {
    Whitespace(Whitespace),
    /// A comment introduced by `#`
    HashComment(Comment),
    /// A comment introduced by `!`
    BangComment(Comment),
    NewLine(NewLine),
    Pair(Pair),
}

impl TopLevelExpression {
    pub fn as_pair(&self) -> Option<&Pair> {
        match self {
            TopLevelExpression::Pair(pair) => Some(pair),
            _ => None,
        }
    }

    /// Comment text, for either kind of comment
    pub fn as_comment(&self) -> Option<&Comment> {
        match self {
            TopLevelExpression::HashComment(comment)
            | TopLevelExpression::BangComment(comment) => Some(comment),
            _ => None,
        }
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, TopLevelExpression::Pair(_))
    }

    /// Whitespace and newlines carry no content
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TopLevelExpression::Whitespace(_) | TopLevelExpression::NewLine(_)
        )
    }
}

impl From<Pair> for TopLevelExpression {
    fn from(pair: Pair) -> Self {
        TopLevelExpression::Pair(pair)
    }
}

impl From<Whitespace> for TopLevelExpression {
    fn from(whitespace: Whitespace) -> Self {
        TopLevelExpression::Whitespace(whitespace)
    }
}

impl From<NewLine> for TopLevelExpression {
    fn from(newline: NewLine) -> Self {
        TopLevelExpression::NewLine(newline)
    }
}

impl AstNode for TopLevelExpression {
    fn node_type(&self) -> &'static str {
        match self {
            TopLevelExpression::Whitespace(_) => "Whitespace",
            TopLevelExpression::HashComment(_) => "HashComment",
            TopLevelExpression::BangComment(_) => "BangComment",
            TopLevelExpression::NewLine(_) => "NewLine",
            TopLevelExpression::Pair(pair) => pair.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            TopLevelExpression::Whitespace(ws) => format!("{:?}", ws.content),
            TopLevelExpression::HashComment(comment)
            | TopLevelExpression::BangComment(comment) => comment.text.trim().to_string(),
            TopLevelExpression::NewLine(newline) => format!("{:?}", newline.content),
            TopLevelExpression::Pair(pair) => pair.display_label(),
        }
    }
}

impl RawText for TopLevelExpression {
    fn write_raw(&self, out: &mut String) {
        match self {
            TopLevelExpression::Whitespace(ws) => out.push_str(&ws.content),
            TopLevelExpression::HashComment(comment) => {
                out.push('#');
                out.push_str(&comment.text);
            }
            TopLevelExpression::BangComment(comment) => {
                out.push('!');
                out.push_str(&comment.text);
            }
            TopLevelExpression::NewLine(newline) => out.push_str(&newline.content),
            TopLevelExpression::Pair(pair) => pair.write_raw(out),
        }
    }
}
