//! Treeviz formatter for documents

use super::escape_control;
use crate::properties::ast::{AstNode, Document, Pair, TopLevelExpression};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    let mut result = String::new();
    for (i, expression) in doc.expressions.iter().enumerate() {
        let is_last = i == doc.expressions.len() - 1;
        append_expression(&mut result, expression, "", is_last);
    }
    result
}

fn append_node(result: &mut String, node: &dyn AstNode, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    let display_label = truncate(&escape_control(&node.display_label()), 30);

    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node.node_type(),
        display_label
    ));
}

fn append_expression(
    result: &mut String,
    expression: &TopLevelExpression,
    prefix: &str,
    is_last: bool,
) {
    append_node(result, expression, prefix, is_last);

    if let TopLevelExpression::Pair(pair) = expression {
        let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        append_pair_slots(result, pair, &new_prefix);
    }
}

fn append_pair_slots(result: &mut String, pair: &Pair, prefix: &str) {
    let mut slots: Vec<&dyn AstNode> = Vec::with_capacity(3);
    if let Some(key) = &pair.key {
        slots.push(key);
    }
    if let Some(separator) = &pair.separator {
        slots.push(separator);
    }
    if let Some(value) = &pair.value {
        slots.push(value);
    }

    for (i, slot) in slots.iter().enumerate() {
        append_node(result, *slot, prefix, i == slots.len() - 1);
    }
}
