//! Kanji usable in personal names: the regular-use kanji plus the ones
//! designated for names (人名用漢字, 戸籍法施行規則 別表第二), including
//! the variant forms listed there.

use alloc::borrow::Cow;

use super::regular_use::is_regular_use;
use crate::{discriminator, rewrite, tables, Membership};

#[must_use]
pub fn is_for_personal_names(c: char) -> bool {
    is_regular_use(c) || tables::DESIGNATED_FOR_PERSONAL_NAMES.contains(c)
}

/// Returns `true` for Han characters that cannot be used in a name.
#[must_use]
pub fn is_not_for_personal_names(c: char) -> bool {
    super::is_han(c) && !is_for_personal_names(c)
}

/// Replaces each run of kanji that cannot be used in a name with
/// `replacement`.
pub fn to_valid<'a>(s: &'a str, replacement: &str) -> Cow<'a, str> {
    rewrite::to_valid(s, replacement, &PersonalName)
}

pub fn to_valid_bytes<'a>(s: &'a [u8], replacement: &str) -> Cow<'a, str> {
    rewrite::to_valid_bytes(s, replacement, &PersonalName)
}

/// Valid unless [`is_not_for_personal_names`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonalName;

impl Membership for PersonalName {
    fn is(&self, c: char) -> bool {
        !is_not_for_personal_names(c)
    }
}

pub type Discriminator = discriminator::Discriminator<PersonalName>;

pub fn new_discriminator<A, D>(allow: A, disallow: D) -> Discriminator
where
    A: IntoIterator<Item = char>,
    D: IntoIterator<Item = char>,
{
    Discriminator::new(PersonalName, allow, disallow)
}

impl Discriminator {
    /// The negation of [`Discriminator::is`], overrides included.
    #[must_use]
    pub fn is_not_for_personal_names(&self, c: char) -> bool {
        !self.is(c)
    }
}
