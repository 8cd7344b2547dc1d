//! Pair element definition
//!
//! A pair is one logical `key<separator>value` record. Keys and values are
//! [`Fragment`]s: they keep the exact source text next to the decoded string,
//! since the escaping in a file is not canonical (`a`, `\a` and a `\u`
//! escape of `a` all decode to `a`) and must survive a round trip untouched.

use super::super::traits::{AstNode, RawText};
use crate::properties::escape::{decode, is_plain, MalformedEscape};
use serde::Serialize;

/// Decoded text paired with the raw source text it came from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Fragment {
    text: String,
    raw: String,
}

impl Fragment {
    /// A fragment whose raw form is its text, with no escaping applied
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            raw: text.clone(),
            text,
        }
    }

    /// A fragment with an explicit raw form. The two are not checked
    /// against each other.
    pub fn with_raw(text: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            raw: raw.into(),
        }
    }

    /// Decode a raw form into a fragment
    pub fn from_raw(raw: impl Into<String>) -> Result<Self, MalformedEscape> {
        let raw = raw.into();
        let text = if is_plain(&raw) {
            raw.clone()
        } else {
            decode(&raw)?
        };
        Ok(Self { text, raw })
    }

    /// The decoded, logical text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The exact source text, escapes and continuations included
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

macro_rules! fragment_node {
    ($(#[$doc:meta])* $name:ident, $node_type:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub Fragment);

        impl $name {
            pub fn new(text: impl Into<String>) -> Self {
                Self(Fragment::new(text))
            }

            pub fn with_raw(text: impl Into<String>, raw: impl Into<String>) -> Self {
                Self(Fragment::with_raw(text, raw))
            }

            pub fn from_raw(raw: impl Into<String>) -> Result<Self, MalformedEscape> {
                Fragment::from_raw(raw).map(Self)
            }

            pub fn text(&self) -> &str {
                self.0.text()
            }

            pub fn raw(&self) -> &str {
                self.0.raw()
            }
        }

        impl AstNode for $name {
            fn node_type(&self) -> &'static str {
                $node_type
            }

            fn display_label(&self) -> String {
                self.text().to_string()
            }
        }

        impl RawText for $name {
            fn write_raw(&self, out: &mut String) {
                out.push_str(self.raw());
            }
        }
    };
}

fragment_node!(
    /// The key of a pair
    Key,
    "Key"
);

fragment_node!(
    /// The value of a pair
    Value,
    "Value"
);

/// Everything between key and value: whitespace, at most one `:` or `=`,
/// whitespace. Carries no logical value of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Separator {
    raw: String,
}

impl Separator {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The `:` or `=` in this separator, if it is not whitespace only
    pub fn mark(&self) -> Option<char> {
        self.raw.chars().find(|c| matches!(c, ':' | '='))
    }
}

impl AstNode for Separator {
    fn node_type(&self) -> &'static str {
        "Separator"
    }

    fn display_label(&self) -> String {
        format!("{:?}", self.raw)
    }
}

impl RawText for Separator {
    fn write_raw(&self, out: &mut String) {
        out.push_str(&self.raw);
    }
}

/// A key/value record
///
/// Every slot is optional: `key` alone has no separator or value, `key:` has
/// no value, and `:value` has no key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Pair {
    pub key: Option<Key>,
    pub separator: Option<Separator>,
    pub value: Option<Value>,
}

impl Pair {
    pub fn new(key: Option<Key>, separator: Option<Separator>, value: Option<Value>) -> Self {
        Self {
            key,
            separator,
            value,
        }
    }

    /// Decoded key, if present
    pub fn key_text(&self) -> Option<&str> {
        self.key.as_ref().map(Key::text)
    }

    /// Decoded value, if present
    pub fn value_text(&self) -> Option<&str> {
        self.value.as_ref().map(Value::text)
    }

    /// A copy of this pair with the key replaced
    pub fn with_key(&self, key: Option<Key>) -> Self {
        Self {
            key,
            ..self.clone()
        }
    }

    /// A copy of this pair with the separator replaced
    pub fn with_separator(&self, separator: Option<Separator>) -> Self {
        Self {
            separator,
            ..self.clone()
        }
    }

    /// A copy of this pair with the value replaced
    pub fn with_value(&self, value: Option<Value>) -> Self {
        Self {
            value,
            ..self.clone()
        }
    }
}

impl AstNode for Pair {
    fn node_type(&self) -> &'static str {
        "Pair"
    }

    fn display_label(&self) -> String {
        match (self.key_text(), self.value_text()) {
            (Some(key), Some(value)) => format!("{} = {}", key, value),
            (Some(key), None) => key.to_string(),
            (None, Some(value)) => format!("= {}", value),
            (None, None) => String::new(),
        }
    }
}

impl RawText for Pair {
    fn write_raw(&self, out: &mut String) {
        if let Some(key) = &self.key {
            key.write_raw(out);
        }
        if let Some(separator) = &self.separator {
            separator.write_raw(out);
        }
        if let Some(value) = &self.value {
            value.write_raw(out);
        }
    }
}
