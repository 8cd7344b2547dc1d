//! Escape decoding for keys and values
//!
//! Keys and values are stored raw; this module turns a raw span into its
//! logical string following the `java.util.Properties` rules:
//!
//! - `\t`, `\n`, `\r`, `\f` become the matching control character
//! - `\uXXXX` becomes the code point it names (exactly four hex digits)
//! - a backslash before a line terminator continues the logical line: the
//!   terminator and the next line's leading whitespace are dropped
//! - a backslash before anything else yields that character
//!
//! Comment text is never passed through here.

use std::iter::Peekable;
use std::str::CharIndices;
use thiserror::Error;

/// A `\u` escape that is not followed by four hexadecimal digits
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed unicode escape {sequence:?}: expected four hexadecimal digits")]
pub struct MalformedEscape {
    /// Byte offset of the backslash, relative to the decoded span
    pub offset: usize,
    /// The offending text, from the backslash up to the first non-hex character
    pub sequence: String,
}

/// Decode a raw key or value into its logical string
pub fn decode(raw: &str) -> Result<String, MalformedEscape> {
    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }

        // A lone trailing backslash continues into end of input
        let Some((_, escaped)) = chars.next() else {
            break;
        };

        match escaped {
            't' => decoded.push('\t'),
            'n' => decoded.push('\n'),
            'r' => decoded.push('\r'),
            'f' => decoded.push('\u{000C}'),
            'u' => decoded.push(decode_unicode(raw, offset, &mut chars)?),
            '\r' => {
                if matches!(chars.peek(), Some((_, '\n'))) {
                    chars.next();
                }
                skip_indentation(&mut chars);
            }
            '\n' => skip_indentation(&mut chars),
            other => decoded.push(other),
        }
    }

    Ok(decoded)
}

/// True if decoding `raw` cannot fail and yields `raw` unchanged
pub fn is_plain(raw: &str) -> bool {
    !raw.contains('\\')
}

fn skip_indentation(chars: &mut Peekable<CharIndices<'_>>) {
    while matches!(chars.peek(), Some((_, ' ' | '\t' | '\u{000C}'))) {
        chars.next();
    }
}

fn position(raw: &str, chars: &mut Peekable<CharIndices<'_>>) -> usize {
    chars.peek().map(|(i, _)| *i).unwrap_or(raw.len())
}

/// Read the four hex digits after `\u`; `start` is the offset of the backslash
fn read_code_unit(
    raw: &str,
    start: usize,
    chars: &mut Peekable<CharIndices<'_>>,
) -> Result<u32, MalformedEscape> {
    let mut unit = 0u32;
    for _ in 0..4 {
        match chars.peek().and_then(|(_, c)| c.to_digit(16)) {
            Some(digit) => {
                unit = unit * 16 + digit;
                chars.next();
            }
            None => {
                let end = position(raw, chars);
                return Err(MalformedEscape {
                    offset: start,
                    sequence: raw[start..end].to_string(),
                });
            }
        }
    }
    Ok(unit)
}

fn decode_unicode(
    raw: &str,
    start: usize,
    chars: &mut Peekable<CharIndices<'_>>,
) -> Result<char, MalformedEscape> {
    let unit = read_code_unit(raw, start, chars)?;

    if (0xD800..=0xDBFF).contains(&unit) {
        let next = position(raw, chars);
        if let Some(low) = low_surrogate_at(&raw[next..]) {
            // `\uXXXX` is six ASCII characters
            for _ in 0..6 {
                chars.next();
            }
            let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
            return Ok(char::from_u32(combined).unwrap_or(char::REPLACEMENT_CHARACTER));
        }
    }

    Ok(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER))
}

fn low_surrogate_at(rest: &str) -> Option<u32> {
    let digits = rest.strip_prefix("\\u")?.get(..4)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let unit = u32::from_str_radix(digits, 16).ok()?;
    (0xDC00..=0xDFFF).contains(&unit).then_some(unit)
}
