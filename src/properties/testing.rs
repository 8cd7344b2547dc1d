//! Testing utilities for document assertions
//!
//! # Parser Testing Guidelines
//!
//! Parser tests use two tools together:
//!
//! 1. **[PropertiesSamples](crate::properties::processor::samples::PropertiesSamples)** for verified content
//! 2. **[assert_doc](fn@assert_doc)** for checking the whole document shape
//!
//! ## Rule 1: Use PropertiesSamples for file-shaped content
//!
//! Line endings and backslashes are easy to get subtly wrong in Rust string
//! literals: `"\\\r\n"` and `r"\\r\n"` are different inputs. The samples under
//! `docs/samples/` are byte-exact files, so tests that care about whole files
//! read them instead of spelling them out.
//!
//! ```rust,ignore
//! use crate::properties::processor::samples::PropertiesSamples;
//! use crate::properties::parser::parse_document;
//!
//! let source = PropertiesSamples::get_string("030-continuations.properties")?;
//! let doc = parse_document(&source)?;
//! ```
//!
//! Short single-line inputs exercising one grammar rule are fine inline.
//!
//! ## Rule 2: Use assert_doc for verification
//!
//! Counting expressions says little. Every slot of every expression matters,
//! raw and decoded, so assertions walk the document:
//!
//! ```rust,ignore
//! use crate::properties::testing::assert_doc;
//!
//! assert_doc(&doc)
//!     .expression_count(2)
//!     .expression(0, |e| {
//!         e.assert_pair()
//!             .key("key")
//!             .key_raw("ke\\\r\n   y")
//!             .separator(" = ")
//!             .value("value");
//!     })
//!     .expression(1, |e| e.assert_newline("\r\n"));
//! ```
//!
//! Use [`assert_round_trip`] for any input that should re-serialize exactly.

mod testing_assertions;

pub use testing_assertions::{
    assert_doc, DocumentAssertion, ExpressionAssertion, PairAssertion,
};

use crate::properties::ast::{Document, RawText};
use crate::properties::parser::parse_document;

/// Parse `source`, check that it serializes back unchanged, and return it
pub fn assert_round_trip(source: &str) -> Document {
    let doc = match parse_document(source) {
        Ok(doc) => doc,
        Err(err) => panic!("failed to parse {:?}: {}", source, err),
    };
    assert_eq!(doc.raw_text(), source, "round trip changed the input");
    doc
}
