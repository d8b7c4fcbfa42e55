//! The regular-use kanji (常用漢字表, 2010 revision).
//!
//! Each of the 2136 entries has a standard form. Some also list old forms
//! in parentheses, and four list a tolerable form in brackets. All of them
//! count as regular use.

use alloc::borrow::Cow;

use crate::{discriminator, rewrite, tables, Membership, RangeTable};

static REGULAR_USE: [&RangeTable; 3] = [
    &tables::REGULAR_USE_STANDARD,
    &tables::REGULAR_USE_OLD_FORM,
    &tables::REGULAR_USE_TOLERABLE,
];

/// Returns `true` for any form listed in the table.
#[must_use]
pub fn is_regular_use(c: char) -> bool {
    REGULAR_USE.is(c)
}

#[must_use]
pub fn is_standard(c: char) -> bool {
    tables::REGULAR_USE_STANDARD.contains(c)
}

#[must_use]
pub fn is_old_form(c: char) -> bool {
    tables::REGULAR_USE_OLD_FORM.contains(c)
}

#[must_use]
pub fn is_tolerable(c: char) -> bool {
    tables::REGULAR_USE_TOLERABLE.contains(c)
}

/// Returns `true` for Han characters that are not regular use.
#[must_use]
pub fn is_not_regular_use(c: char) -> bool {
    super::is_han(c) && !is_regular_use(c)
}

/// Replaces each run of kanji outside the table with `replacement`.
///
/// ```
/// # use jpcharset::kanji::regular_use::to_valid;
/// assert_eq!(to_valid("薔薇の花", "〓"), "〓の花");
/// ```
pub fn to_valid<'a>(s: &'a str, replacement: &str) -> Cow<'a, str> {
    rewrite::to_valid(s, replacement, &RegularUse)
}

pub fn to_valid_bytes<'a>(s: &'a [u8], replacement: &str) -> Cow<'a, str> {
    rewrite::to_valid_bytes(s, replacement, &RegularUse)
}

/// Valid unless [`is_not_regular_use`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegularUse;

impl Membership for RegularUse {
    fn is(&self, c: char) -> bool {
        !is_not_regular_use(c)
    }
}

pub type Discriminator = discriminator::Discriminator<RegularUse>;

pub fn new_discriminator<A, D>(allow: A, disallow: D) -> Discriminator
where
    A: IntoIterator<Item = char>,
    D: IntoIterator<Item = char>,
{
    Discriminator::new(RegularUse, allow, disallow)
}

impl Discriminator {
    /// The negation of [`Discriminator::is`], overrides included.
    #[must_use]
    pub fn is_not_regular_use(&self, c: char) -> bool {
        !self.is(c)
    }
}
