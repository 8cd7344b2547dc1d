//! Property-based tests for the lexer and parser
//!
//! Generated inputs mix every construct of the format: comments, each
//! separator shape, escapes, continuations and all three line terminators.

use javaprops::properties::ast::{ParseError, RawText};
use javaprops::properties::lexer::{detokenize, lex};
use javaprops::properties::parser::parse_document;
use proptest::prelude::*;

/// Generate a key or value fragment without malformed escapes
fn fragment_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            // Plain text
            "[a-zA-Z0-9._-]{1,8}",
            // Simple escapes
            prop_oneof!["\\\\t", "\\\\n", "\\\\ ", "\\\\:", "\\\\=", "\\\\#", "\\\\\\\\"],
            // Unicode escapes with four digits
            "\\\\u[0-9a-fA-F]{4}",
            // Continuations with indentation
            (line_ending_strategy(), "[ \t]{0,4}")
                .prop_map(|(eol, indent)| format!("\\{}{}", eol, indent)),
        ],
        1..5,
    )
    .prop_map(|parts| parts.concat())
}

fn separator_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["=", ":", " ", "\t", " = ", " :", "= ", " \t", "\t:\t"]
}

fn line_ending_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["\n", "\r\n", "\r"]
}

/// Generate one physical line without its terminator
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Comments
        "[#!][a-zA-Z0-9 .:=#!]{0,20}",
        // Blank or indented-only lines
        "[ \t]{0,4}",
        // Pairs
        (
            "[ \t]{0,2}",
            fragment_strategy(),
            separator_strategy(),
            prop::option::of(fragment_strategy()),
        )
            .prop_map(|(indent, key, separator, value)| {
                format!("{}{}{}{}", indent, key, separator, value.unwrap_or_default())
            }),
        // Keys alone and values alone
        fragment_strategy(),
        fragment_strategy().prop_map(|value| format!(":{}", value)),
    ]
}

/// Generate a properties document
fn document_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec((line_strategy(), line_ending_strategy()), 0..12),
        prop::option::of(line_strategy()),
    )
        .prop_map(|(lines, last)| {
            let mut doc: String = lines
                .into_iter()
                .map(|(line, eol)| format!("{}{}", line, eol))
                .collect();
            doc.push_str(&last.unwrap_or_default());
            doc
        })
}

proptest! {
    #[test]
    fn test_detokenize_reproduces_any_input(input in "[\\PC\r\n\t\x0C]*") {
        let tokens = lex(&input);
        prop_assert_eq!(detokenize(&input, &tokens), input);
    }

    #[test]
    fn test_token_spans_are_contiguous(input in "[\\PC\r\n\t\x0C]*") {
        let tokens = lex(&input);
        let mut expected_start = 0;
        for (_, span) in &tokens {
            prop_assert_eq!(span.start, expected_start);
            prop_assert!(span.end > span.start);
            expected_start = span.end;
        }
        prop_assert_eq!(expected_start, input.len());
    }

    #[test]
    fn test_parse_is_total_except_for_malformed_escapes(input in "[\\PC\r\n\t\x0C]*") {
        match parse_document(&input) {
            Ok(doc) => prop_assert_eq!(doc.raw_text(), input),
            Err(err) => prop_assert!(
                matches!(err, ParseError::MalformedEscape { .. }),
                "unexpected error: {}",
                err
            ),
        }
    }

    #[test]
    fn test_round_trip(input in document_strategy()) {
        let doc = parse_document(&input).unwrap();
        prop_assert_eq!(doc.raw_text(), input);
    }

    #[test]
    fn test_reparse_is_idempotent(input in document_strategy()) {
        let doc = parse_document(&input).unwrap();
        let reparsed = parse_document(&doc.to_string()).unwrap();
        prop_assert_eq!(reparsed, doc);
    }
}
