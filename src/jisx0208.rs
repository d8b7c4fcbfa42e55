//! The JIS X 0208 repertoire, as decoded through Shift_JIS, plus printable
//! ASCII.
//!
//! The NEC and IBM extensions of Windows-31J are not part of it, which is
//! what catches variants such as 髙 or 﨑.

use alloc::borrow::Cow;

use crate::{discriminator, rewrite, tables, Membership};

#[must_use]
pub fn is(c: char) -> bool {
    tables::JISX0208.contains(c)
}

/// Level 1 kanji (第一水準), rows 16 to 47.
#[must_use]
pub fn is_level1(c: char) -> bool {
    tables::JISX0208_LEVEL1.contains(c)
}

/// Level 2 kanji (第二水準), rows 48 to 84.
#[must_use]
pub fn is_level2(c: char) -> bool {
    tables::JISX0208_LEVEL2.contains(c)
}

/// Replaces each run of characters outside JIS X 0208 with `replacement`.
pub fn to_valid<'a>(s: &'a str, replacement: &str) -> Cow<'a, str> {
    rewrite::to_valid(s, replacement, &JisX0208)
}

/// Like [`to_valid`], also replacing runs of malformed UTF-8.
pub fn to_valid_bytes<'a>(s: &'a [u8], replacement: &str) -> Cow<'a, str> {
    rewrite::to_valid_bytes(s, replacement, &JisX0208)
}

/// [`is`] as a [`Membership`] value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JisX0208;

impl Membership for JisX0208 {
    fn is(&self, c: char) -> bool {
        is(c)
    }
}

pub type Discriminator = discriminator::Discriminator<JisX0208>;

pub fn new_discriminator<A, D>(allow: A, disallow: D) -> Discriminator
where
    A: IntoIterator<Item = char>,
    D: IntoIterator<Item = char>,
{
    Discriminator::new(JisX0208, allow, disallow)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::ascii("aA/\\~ ")]
    #[case::fullwidth("ａＡ０")]
    #[case::kana("アガンッなぎけいれんよ")]
    #[case::level1("高崎間塚鴎桑元吉祇緒桜曖")]
    #[case::level2("嵜濱渺裴禰曉蒋")]
    #[case::symbols("□■☆★○●◎△▲▽▼◇◆￢")]
    fn test_is(#[case] input: &str) {
        for c in input.chars() {
            assert!(is(c), "{c:?} ({:04X})", u32::from(c));
        }
    }

    #[rstest]
    #[case::ibm_extension("髙﨑閒德鷗彅栁炻璉")]
    #[case::control("\t\n\u{7F}")]
    #[case::yen("¥")]
    #[case::roman_numerals("ⅰⅱⅲⅠⅡⅢ")]
    #[case::enclosed("①②③㈱")]
    #[case::simplified("说你过丽")]
    #[case::astral("𠮷😀🙅")]
    fn test_is_not(#[case] input: &str) {
        for c in input.chars() {
            assert!(!is(c), "{c:?} ({:04X})", u32::from(c));
        }
    }

    #[rstest]
    #[case::level1('亜', true, false)]
    #[case::last_level1('腕', true, false)]
    #[case::first_level2('弌', false, true)]
    #[case::last_level2('熙', false, true)]
    #[case::kana('あ', false, false)]
    fn test_levels(#[case] c: char, #[case] level1: bool, #[case] level2: bool) {
        assert_eq!((is_level1(c), is_level2(c)), (level1, level2));
    }

    #[rstest]
    #[case::unchanged("人魚は、南の方の海に", "□", "人魚は、南の方の海に")]
    #[case::collapsed("髙﨑閒", "□", "□")]
    #[case::separated("髙橋と﨑", "□", "□橋と□")]
    #[case::removed("髙橋", "", "橋")]
    fn test_to_valid(#[case] input: &str, #[case] replacement: &str, #[case] expected: &str) {
        assert_eq!(to_valid(input, replacement), expected);
    }

    #[rstest]
    #[case::malformed(b"abc\xFF1234", " ", "abc 1234")]
    #[case::rejected_scalar("a\u{FFFF}b".as_bytes(), "□", "a□b")]
    fn test_to_valid_bytes(#[case] input: &[u8], #[case] replacement: &str, #[case] expected: &str) {
        assert_eq!(to_valid_bytes(input, replacement), expected);
    }

    #[test]
    fn test_to_valid_bytes_mixed() {
        let input = [
            "人魚は、".as_bytes(),
            &b"\xFF"[..],
            "南の方の海にばかり髙棲んでいるのではありません。".as_bytes(),
        ]
        .concat();
        assert_eq!(
            to_valid_bytes(&input, "□"),
            "人魚は、□南の方の海にばかり□棲んでいるのではありません。"
        );
    }

    #[test]
    fn test_discriminator() {
        let input = b"\xE4\xBA\xBA\xE9\xAD\x9A\xE3\x81\xAF\xFF\xE9\xAB\x99";
        let d = new_discriminator(['髙'], ['魚']);
        assert_eq!(d.to_valid_bytes(input, "□"), "人□は□髙");
        assert_eq!(d.base(), &JisX0208);
    }
}
