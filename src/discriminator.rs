use alloc::{borrow::Cow, collections::BTreeSet};

use tracing::debug;

use crate::{rewrite, Membership};

/// A base predicate with per-character overrides.
///
/// Overrides are consulted first: an allowed character is always valid,
/// then a disallowed character is always invalid, and everything else is
/// left to the base predicate. A character that is both allowed and
/// disallowed is allowed.
///
/// # Examples
///
/// ```
/// # use jpcharset::jisx0208;
/// let d = jisx0208::Discriminator::builder(jisx0208::JisX0208)
///     .allow(['髙'])
///     .disallow(['魚'])
///     .build();
/// assert_eq!(d.to_valid("人魚は髙棲", "□"), "人□は髙棲");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discriminator<M> {
    base: M,
    allow: BTreeSet<char>,
    disallow: BTreeSet<char>,
}

impl<M: Membership> Discriminator<M> {
    pub fn new<A, D>(base: M, allow: A, disallow: D) -> Self
    where
        A: IntoIterator<Item = char>,
        D: IntoIterator<Item = char>,
    {
        Self::builder(base).allow(allow).disallow(disallow).build()
    }

    pub fn builder(base: M) -> DiscriminatorBuilder<M> {
        DiscriminatorBuilder {
            inner: Self {
                base,
                allow: BTreeSet::new(),
                disallow: BTreeSet::new(),
            },
        }
    }

    #[must_use]
    pub fn is(&self, c: char) -> bool {
        if self.allow.contains(&c) {
            return true;
        }
        if self.disallow.contains(&c) {
            return false;
        }
        self.base.is(c)
    }

    /// See [`rewrite::to_valid`].
    pub fn to_valid<'a>(&self, s: &'a str, replacement: &str) -> Cow<'a, str> {
        rewrite::to_valid(s, replacement, self)
    }

    /// See [`rewrite::to_valid_bytes`].
    pub fn to_valid_bytes<'a>(&self, s: &'a [u8], replacement: &str) -> Cow<'a, str> {
        rewrite::to_valid_bytes(s, replacement, self)
    }

    pub const fn base(&self) -> &M {
        &self.base
    }

    pub const fn allowed(&self) -> &BTreeSet<char> {
        &self.allow
    }

    pub const fn disallowed(&self) -> &BTreeSet<char> {
        &self.disallow
    }
}

impl<M: Membership> Membership for Discriminator<M> {
    fn is(&self, c: char) -> bool {
        Self::is(self, c)
    }
}

/// Accumulates overrides for a [`Discriminator`].
#[derive(Debug, Clone)]
#[must_use]
pub struct DiscriminatorBuilder<M> {
    inner: Discriminator<M>,
}

impl<M: Membership> DiscriminatorBuilder<M> {
    pub fn allow<I: IntoIterator<Item = char>>(mut self, chars: I) -> Self {
        self.inner.allow.extend(chars);
        self
    }

    pub fn disallow<I: IntoIterator<Item = char>>(mut self, chars: I) -> Self {
        self.inner.disallow.extend(chars);
        self
    }

    pub fn build(self) -> Discriminator<M> {
        debug!(
            allow = self.inner.allow.len(),
            disallow = self.inner.disallow.len(),
            "built discriminator"
        );
        self.inner
    }
}
