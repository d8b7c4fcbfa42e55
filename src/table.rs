//! Sorted, disjoint sets of closed code point intervals.
//!
//! This file is also compiled into the build script, so it must not reach
//! into the rest of the crate.

use core::cmp::Ordering;

extern crate alloc;
use alloc::{borrow::Cow, vec::Vec};

/// The largest value stored in the narrow tier of a [`RangeTable`].
pub const MAX_NARROW: u32 = 0xFFFF;

/// A closed interval `lo..=hi` whose bounds fit in 16 bits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Range16 {
    pub lo: u16,
    pub hi: u16,
}

impl Range16 {
    #[must_use]
    pub const fn new(lo: u16, hi: u16) -> Self {
        Self { lo, hi }
    }

    fn locate(self, v: u16) -> Ordering {
        if v < self.lo {
            Ordering::Greater
        } else if v > self.hi {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }
}

/// A closed interval `lo..=hi` with at least one bound above [`MAX_NARROW`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Range32 {
    pub lo: u32,
    pub hi: u32,
}

impl Range32 {
    #[must_use]
    pub const fn new(lo: u32, hi: u32) -> Self {
        Self { lo, hi }
    }

    fn locate(self, v: u32) -> Ordering {
        if v < self.lo {
            Ordering::Greater
        } else if v > self.hi {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }
}

/// An immutable set of code points stored as maximally coalesced intervals.
///
/// Intervals whose upper bound fits in 16 bits live in the narrow tier, the
/// rest in the wide tier. Both tiers are sorted ascending and never overlap,
/// which is what makes [`RangeTable::contains`] a binary search.
///
/// # Examples
///
/// ```
/// # use jpcharset::RangeTable;
/// let table = RangeTable::build("cab𠮟".chars());
/// assert_eq!(table.r16().len(), 1);
/// assert_eq!(table.r32().len(), 1);
/// assert!(table.contains('b'));
/// assert!(!table.contains('d'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeTable {
    r16: Cow<'static, [Range16]>,
    r32: Cow<'static, [Range32]>,
}

impl RangeTable {
    /// The table with no members.
    pub const EMPTY: Self = Self::from_static(&[], &[]);

    /// Wraps pre-sorted, pre-coalesced static tiers without checking them.
    ///
    /// Use [`RangeTable::try_from_ranges`] for data that has not been
    /// produced by [`RangeTable::build`].
    #[must_use]
    pub const fn from_static(r16: &'static [Range16], r32: &'static [Range32]) -> Self {
        Self {
            r16: Cow::Borrowed(r16),
            r32: Cow::Borrowed(r32),
        }
    }

    pub(crate) fn from_parts(r16: Vec<Range16>, r32: Vec<Range32>) -> Self {
        Self {
            r16: Cow::Owned(r16),
            r32: Cow::Owned(r32),
        }
    }

    /// Builds the canonical table for an arbitrary collection of code points.
    ///
    /// Input order and duplicates do not matter. An empty input yields
    /// [`RangeTable::EMPTY`].
    #[must_use]
    pub fn build<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut cps = chars.into_iter().map(u32::from).collect::<Vec<_>>();
        cps.sort_unstable();
        cps.dedup();

        let mut cps = cps.into_iter();
        let Some(mut lo) = cps.next() else {
            return Self::EMPTY;
        };
        let mut hi = lo;

        let mut r16 = Vec::new();
        let mut r32 = Vec::new();
        for cp in cps {
            if cp == hi + 1 {
                hi = cp;
                continue;
            }
            route(&mut r16, &mut r32, lo, hi);
            (lo, hi) = (cp, cp);
        }
        route(&mut r16, &mut r32, lo, hi);

        Self::from_parts(r16, r32)
    }

    /// Returns `true` if `c` lies in one of the intervals.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        let v = u32::from(c);

        if let Some(last) = self.r16.last() {
            if v <= u32::from(last.hi) {
                return u16::try_from(v)
                    .is_ok_and(|v| self.r16.binary_search_by(|r| r.locate(v)).is_ok());
            }
        }

        match self.r32.first() {
            Some(first) if v >= first.lo => self.r32.binary_search_by(|r| r.locate(v)).is_ok(),
            _ => false,
        }
    }

    /// The narrow tier.
    #[must_use]
    pub fn r16(&self) -> &[Range16] {
        &self.r16
    }

    /// The wide tier.
    #[must_use]
    pub fn r32(&self) -> &[Range32] {
        &self.r32
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.r16.is_empty() && self.r32.is_empty()
    }

    /// Number of members (not intervals), as [`RangeTable::iter`] yields
    /// them.
    ///
    /// Surrogates and values past `U+10FFFF` are not counted, nor are
    /// inverted intervals handed to [`RangeTable::from_static`].
    #[must_use]
    pub fn len(&self) -> usize {
        let narrow = self
            .r16
            .iter()
            .map(|r| scalars(r.lo.into(), r.hi.into()))
            .sum::<usize>();
        let wide = self.r32.iter().map(|r| scalars(r.lo, r.hi)).sum::<usize>();
        narrow + wide
    }

    /// Iterates over the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        let narrow = self
            .r16
            .iter()
            .flat_map(|r| u32::from(r.lo)..=u32::from(r.hi));
        let wide = self.r32.iter().flat_map(|r| r.lo..=r.hi);
        narrow.chain(wide).filter_map(char::from_u32)
    }
}

impl Default for RangeTable {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromIterator<char> for RangeTable {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::build(iter)
    }
}

/// Scalar values in `lo..=hi`.
fn scalars(lo: u32, hi: u32) -> usize {
    let hi = hi.min(u32::from(char::MAX));
    let Some(span) = hi.checked_sub(lo) else {
        return 0;
    };
    let surrogates = hi
        .min(0xDFFF)
        .checked_sub(lo.max(0xD800))
        .map_or(0, |n| n + 1);
    (span + 1 - surrogates) as usize
}

fn route(r16: &mut Vec<Range16>, r32: &mut Vec<Range32>, lo: u32, hi: u32) {
    match (u16::try_from(lo), u16::try_from(hi)) {
        (Ok(lo), Ok(hi)) => r16.push(Range16::new(lo, hi)),
        _ => r32.push(Range32::new(lo, hi)),
    }
}
