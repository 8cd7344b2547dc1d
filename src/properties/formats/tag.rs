//! XML-like AST tag serialization
//!
//! Serializes a document to tags that directly reflect its structure.
//!
//! ## Format
//!
//! - Expression kind -> tag name, one expression per line
//! - Decoded text -> text content
//! - Raw text -> `raw` attribute, only when it differs from the decoded text
//! - Pair slots -> nested inline in the `<pair>` tag, absent slots omitted
//!
//! Control characters are written as escapes (`\n`, `\r`, `\t`, `\f`) so
//! trivia stays visible.
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <hash-comment> settings</hash-comment>
//!   <newline>\n</newline>
//!   <pair><key raw="a\ b">a b</key><separator> = </separator><value>1</value></pair>
//! </document>
//! ```

use super::escape_control;
use crate::properties::ast::{Document, Pair, TopLevelExpression};

/// Serialize a document to AST tag format
pub fn serialize_ast_tag(doc: &Document) -> String {
    let mut result = String::new();
    result.push_str("<document>\n");
    for expression in doc.iter_expressions() {
        result.push_str("  ");
        serialize_expression(expression, &mut result);
        result.push('\n');
    }
    result.push_str("</document>");
    result
}

fn serialize_expression(expression: &TopLevelExpression, output: &mut String) {
    match expression {
        TopLevelExpression::Whitespace(ws) => push_element(output, "whitespace", &ws.content, None),
        TopLevelExpression::HashComment(comment) => {
            push_element(output, "hash-comment", &comment.text, None)
        }
        TopLevelExpression::BangComment(comment) => {
            push_element(output, "bang-comment", &comment.text, None)
        }
        TopLevelExpression::NewLine(newline) => {
            push_element(output, "newline", &newline.content, None)
        }
        TopLevelExpression::Pair(pair) => serialize_pair(pair, output),
    }
}

fn serialize_pair(pair: &Pair, output: &mut String) {
    output.push_str("<pair>");
    if let Some(key) = &pair.key {
        push_element(output, "key", key.text(), Some(key.raw()));
    }
    if let Some(separator) = &pair.separator {
        push_element(output, "separator", separator.raw(), None);
    }
    if let Some(value) = &pair.value {
        push_element(output, "value", value.text(), Some(value.raw()));
    }
    output.push_str("</pair>");
}

/// `<name raw="..">text</name>`, with the attribute only when raw differs
fn push_element(output: &mut String, name: &str, text: &str, raw: Option<&str>) {
    output.push('<');
    output.push_str(name);
    if let Some(raw) = raw.filter(|raw| *raw != text) {
        output.push_str(" raw=\"");
        output.push_str(&escape_xml(&escape_control(raw)));
        output.push('"');
    }
    output.push('>');
    output.push_str(&escape_xml(&escape_control(text)));
    output.push_str("</");
    output.push_str(name);
    output.push('>');
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
