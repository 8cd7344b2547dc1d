//! Token definitions for the properties format
//!
//! This module defines all the tokens that can be produced by the properties lexer.
//! The tokens are defined using the logos derive macro for efficient tokenization.
//!
//! Tokens carry no text of their own: the lexer pairs every token with its byte
//! span, and later stages slice the source. Escapes are recognized but never
//! interpreted here; decoding is deferred to [`crate::properties::escape`].
use logos::Logos;
use serde::Serialize;

/// All possible tokens in the properties format
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize)]
pub enum Token {
    // Horizontal whitespace. Java treats form feed like a space.
    #[regex(r"[ \t\f]+")]
    Whitespace,

    // Line terminators
    #[regex(r"\r\n|\n|\r")]
    Newline,

    // Separator marks
    #[token(":")]
    Colon,
    #[token("=")]
    Equals,

    // Comment markers (only meaningful at the start of a line)
    #[token("#")]
    Hash,
    #[token("!")]
    Bang,

    // Backslash followed by any single character except `u` or a line terminator
    #[regex(r"\\[^u\r\n]")]
    Escape,

    // `\u` with up to four hex digits; the decoder rejects fewer than four
    #[regex(r"\\u[0-9a-fA-F]{0,4}")]
    UnicodeEscape,

    // A backslash right before a line terminator or at end of input
    #[token("\\")]
    Backslash,

    // Text content (catch-all for non-special characters)
    #[regex(r"[^ \t\f\r\n:=#!\\]+")]
    Text,
}

impl Token {
    /// Check if this token is horizontal whitespace or a line terminator
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace | Token::Newline)
    }

    /// Check if this token may appear inside a key without ending it
    ///
    /// Comment markers are plain text once a line has started. A `Backslash`
    /// is excluded because it only belongs to a key as part of a continuation.
    pub fn is_key_content(&self) -> bool {
        matches!(
            self,
            Token::Text | Token::Escape | Token::UnicodeEscape | Token::Hash | Token::Bang
        )
    }

    /// Check if this token may appear inside a value without ending it
    pub fn is_value_content(&self) -> bool {
        !matches!(self, Token::Newline | Token::Backslash)
    }

    /// Check if this token is a key/value separator mark
    pub fn is_separator_mark(&self) -> bool {
        matches!(self, Token::Colon | Token::Equals)
    }

    /// Check if this token is a comment marker
    pub fn is_comment_marker(&self) -> bool {
        matches!(self, Token::Hash | Token::Bang)
    }

    /// Name used by the token output formats
    pub fn name(&self) -> &'static str {
        match self {
            Token::Whitespace => "Whitespace",
            Token::Newline => "Newline",
            Token::Colon => "Colon",
            Token::Equals => "Equals",
            Token::Hash => "Hash",
            Token::Bang => "Bang",
            Token::Escape => "Escape",
            Token::UnicodeEscape => "UnicodeEscape",
            Token::Backslash => "Backslash",
            Token::Text => "Text",
        }
    }
}
