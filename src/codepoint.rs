//! Code points written as text: a literal character, `U+XXXX` or `0xXXXX`.
//!
//! ```
//! # use jpcharset::codepoint;
//! assert_eq!(codepoint::parse("U+9AD9"), Ok('髙'));
//! assert_eq!(codepoint::parse_list("髙, 0x9B5A"), Ok(vec!['髙', '魚']));
//! ```

use alloc::{string::String, vec::Vec};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CodepointError {
    #[error("empty code point")]
    Empty,
    #[error("'{0}' is more than one character")]
    NotSingle(String),
    #[error("invalid hex code point '{0}'")]
    InvalidHex(String),
    #[error("{0:#06X} is not a Unicode scalar value")]
    NotScalar(u32),
}

/// Parses a single code point.
///
/// # Errors
///
/// Fails on empty input, on more than one literal character, and on hex
/// notation that is malformed or names a surrogate or a value past
/// `U+10FFFF`.
pub fn parse(s: &str) -> Result<char, CodepointError> {
    let hex = ["U+", "u+", "0x", "0X"]
        .iter()
        .find_map(|prefix| s.strip_prefix(prefix));

    if let Some(digits) = hex {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CodepointError::InvalidHex(s.into()));
        }
        let v = u32::from_str_radix(digits, 16).map_err(|_| CodepointError::InvalidHex(s.into()))?;
        return char::from_u32(v).ok_or(CodepointError::NotScalar(v));
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Err(CodepointError::Empty),
        (Some(c), None) => Ok(c),
        _ => Err(CodepointError::NotSingle(s.into())),
    }
}

/// Parses a comma separated list. Whitespace around entries and empty
/// entries are ignored, so a literal space or comma must be written in hex.
///
/// # Errors
///
/// The first error from [`parse`].
pub fn parse_list(s: &str) -> Result<Vec<char>, CodepointError> {
    s.split(',')
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(parse)
        .collect()
}
