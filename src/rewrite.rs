//! Replacing runs of invalid input.
//!
//! Input is read one unit at a time: a well formed UTF-8 scalar, or a single
//! byte that does not start one. A scalar is valid if the predicate accepts
//! it; a malformed byte never is. Valid units are copied verbatim, and each
//! maximal run of invalid units of the same kind becomes one replacement.
//! A malformed byte directly followed by a rejected scalar (or the other way
//! round) starts a new run.
//!
//! When nothing is invalid the input comes back borrowed.

use alloc::{borrow::Cow, string::String};

use tracing::{debug, trace};

use crate::{from_utf8, Membership};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run {
    Malformed,
    Rejected,
}

#[derive(Debug, Clone, Copy)]
enum Unit {
    Scalar { c: char, width: usize },
    Malformed,
}

/// Decodes the unit at the start of a non-empty `s`.
fn decode(s: &[u8]) -> Unit {
    let Some(&lead) = s.first() else {
        return Unit::Malformed;
    };

    // ASCII fast path
    if lead.is_ascii() {
        return Unit::Scalar {
            c: char::from(lead),
            width: 1,
        };
    }

    let width = match lead {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return Unit::Malformed,
    };

    s.get(..width)
        .and_then(|x| core::str::from_utf8(x).ok())
        .and_then(|x| x.chars().next())
        .map_or(Unit::Malformed, |c| Unit::Scalar { c, width })
}

fn first_invalid<M: Membership + ?Sized>(s: &[u8], m: &M) -> Option<usize> {
    let mut i = 0;
    while i < s.len() {
        match decode(&s[i..]) {
            Unit::Scalar { c, width } if m.is(c) => i += width,
            _ => return Some(i),
        }
    }
    None
}

/// Replaces each run of scalars rejected by `m` with `replacement`.
///
/// # Examples
///
/// ```
/// # use jpcharset::rewrite::to_valid;
/// let kana = |c: char| ('\u{3040}'..='\u{30FF}').contains(&c);
/// assert_eq!(to_valid("かなabcカナ", "・", &kana), "かな・カナ");
/// ```
pub fn to_valid<'a, M: Membership + ?Sized>(s: &'a str, replacement: &str, m: &M) -> Cow<'a, str> {
    let Some((first, _)) = s.char_indices().find(|&(_, c)| !m.is(c)) else {
        return Cow::Borrowed(s);
    };
    trace!(offset = first, len = s.len(), "leaving fast path");

    let mut out = String::with_capacity(s.len() + replacement.len());
    out.push_str(&s[..first]);

    let mut runs = 0_usize;
    let mut in_run = false;
    for c in s[first..].chars() {
        if m.is(c) {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push_str(replacement);
            in_run = true;
            runs += 1;
        }
    }

    debug!(runs, "replaced invalid runs");
    Cow::Owned(out)
}

/// Like [`to_valid`], but for input that may not be UTF-8 at all.
///
/// Each run of malformed bytes is replaced as well.
///
/// # Examples
///
/// ```
/// # use jpcharset::rewrite::to_valid_bytes;
/// let any = |_: char| true;
/// assert_eq!(to_valid_bytes(b"abc\xFF\xFE1234", " ", &any), "abc 1234");
/// ```
pub fn to_valid_bytes<'a, M: Membership + ?Sized>(
    s: &'a [u8],
    replacement: &str,
    m: &M,
) -> Cow<'a, str> {
    let Some(first) = first_invalid(s, m) else {
        // SAFETY: every unit of `s` decoded as a valid scalar.
        return Cow::Borrowed(from_utf8!(s));
    };
    trace!(offset = first, len = s.len(), "leaving fast path");

    let mut out = String::with_capacity(s.len() + replacement.len());
    // SAFETY: the prefix decoded as valid scalars.
    out.push_str(from_utf8!(&s[..first]));

    let mut runs = 0_usize;
    let mut run = None;
    let mut i = first;
    while i < s.len() {
        let (kind, width) = match decode(&s[i..]) {
            Unit::Scalar { c, width } if m.is(c) => {
                // SAFETY: `decode` only reports scalars for well formed UTF-8.
                out.push_str(from_utf8!(&s[i..i + width]));
                run = None;
                i += width;
                continue;
            }
            Unit::Scalar { width, .. } => (Run::Rejected, width),
            Unit::Malformed => (Run::Malformed, 1),
        };

        if run != Some(kind) {
            out.push_str(replacement);
            run = Some(kind);
            runs += 1;
        }
        i += width;
    }

    debug!(runs, "replaced invalid runs");
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use rstest::rstest;

    use super::*;

    fn lower(c: char) -> bool {
        c.is_ascii_lowercase()
    }

    #[rstest]
    #[case::empty(b"", "")]
    #[case::all_valid(b"abc", "abc")]
    #[case::single_rejected(b"aBc", "a_c")]
    #[case::collapsed(b"aBCDc", "a_c")]
    #[case::leading(b"ABc", "_c")]
    #[case::trailing(b"abC", "ab_")]
    #[case::only_invalid(b"ABC", "_")]
    #[case::malformed(b"a\xFFb", "a_b")]
    #[case::malformed_run(b"a\xFF\xFE\x80b", "a_b")]
    #[case::truncated(b"a\xE3\x81", "a_")]
    #[case::overlong(b"a\xC0\xAFb", "a_b")]
    #[case::surrogate(b"a\xED\xA0\x80b", "a_b")]
    #[case::kind_change(b"a\xFFBc", "a__c")]
    #[case::kind_change_back(b"aB\xFFc", "a__c")]
    #[case::rejected_multibyte(b"a\xE3\x81\x82b", "a_b")]
    fn test_to_valid_bytes(#[case] input: &[u8], #[case] expected: &str) {
        assert_eq!(to_valid_bytes(input, "_", &lower), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::lower("abc")]
    fn test_borrowed(#[case] input: &str) {
        assert!(matches!(to_valid(input, "_", &lower), Cow::Borrowed(_)));
        assert!(matches!(
            to_valid_bytes(input.as_bytes(), "_", &lower),
            Cow::Borrowed(_)
        ));
    }

    #[rstest]
    #[case::empty_replacement("aBCd", "", "ad")]
    #[case::long_replacement("aBCd", "<invalid>", "a<invalid>d")]
    #[case::separate_runs("aBcDe", "_", "a_c_e")]
    #[case::multibyte_rejected("aあいb", "□", "a□b")]
    fn test_to_valid(#[case] input: &str, #[case] replacement: &str, #[case] expected: &str) {
        assert_eq!(to_valid(input, replacement, &lower), expected);
        assert_eq!(to_valid_bytes(input.as_bytes(), replacement, &lower), expected);
    }

    #[rstest]
    #[case::ascii(b"a", 'a', 1)]
    #[case::two(b"\xC3\xA9", 'é', 2)]
    #[case::three(b"\xE4\xBA\x9C", '亜', 3)]
    #[case::four(b"\xF0\xA0\xAE\x9F", '𠮟', 4)]
    fn test_decode(#[case] input: &[u8], #[case] c: char, #[case] width: usize) {
        assert!(matches!(decode(input), Unit::Scalar { c: x, width: w } if x == c && w == width));
    }
}
