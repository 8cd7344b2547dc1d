//! # javaprops
//!
//! A lossless parser for Java `.properties` files.
//!
//! Every parsed key and value keeps both its raw source text and its decoded
//! logical value, so an unedited document serializes back to exactly the
//! input it was parsed from.
//!
//! ## Testing
//!
//! For testing guidelines, see the [testing module](properties::testing).
//! Parser tests use the verified samples under `docs/samples/` and the
//! fluent document assertions.

pub mod properties;

pub use properties::ast::{Document, ParseError, TopLevelExpression};
pub use properties::parser::parse_document;
