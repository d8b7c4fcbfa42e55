use core::ops::RangeInclusive;

use alloc::vec::Vec;

use thiserror::Error;

use crate::table::{Range16, Range32, RangeTable, MAX_NARROW};

/// Why a pair of tiers does not form a canonical [`RangeTable`].
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TableError {
    #[error("range {lo:#06X}..={hi:#06X} is inverted")]
    Inverted { lo: u32, hi: u32 },
    #[error("range starting at {lo:#06X} overlaps or precedes the range before it")]
    Unordered { lo: u32 },
    #[error("range starting at {lo:#06X} touches the range before it and should be merged")]
    Unmerged { lo: u32 },
    #[error("range {lo:#06X}..={hi:#06X} belongs in the narrow tier")]
    WrongTier { lo: u32, hi: u32 },
    #[error("range {lo:#06X}..={hi:#06X} is not made of Unicode scalar values")]
    NotScalar { lo: u32, hi: u32 },
}

const SURROGATES: RangeInclusive<u32> = 0xD800..=0xDFFF;

impl RangeTable {
    /// Builds a table from explicit tiers, rejecting anything
    /// [`RangeTable::build`] would not have produced.
    ///
    /// # Errors
    ///
    /// See [`RangeTable::validate`].
    pub fn try_from_ranges(r16: Vec<Range16>, r32: Vec<Range32>) -> Result<Self, TableError> {
        let table = Self::from_parts(r16, r32);
        table.validate()?;
        Ok(table)
    }

    /// Checks that every interval is well formed and holds scalar values,
    /// that the intervals ascend without overlapping or touching across both
    /// tiers, and that no wide interval would fit in the narrow tier.
    ///
    /// An interval may span the surrogate gap, but may not lie inside it or
    /// reach past `U+10FFFF`.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in storage order.
    pub fn validate(&self) -> Result<(), TableError> {
        if let Some(r) = self.r32().iter().find(|r| r.hi <= MAX_NARROW) {
            return Err(TableError::WrongTier { lo: r.lo, hi: r.hi });
        }

        let narrow = self
            .r16()
            .iter()
            .map(|r| (u32::from(r.lo), u32::from(r.hi)));
        let wide = self.r32().iter().map(|r| (r.lo, r.hi));

        let mut prev: Option<u32> = None;
        for (lo, hi) in narrow.chain(wide) {
            if lo > hi {
                return Err(TableError::Inverted { lo, hi });
            }
            if hi > u32::from(char::MAX) || (SURROGATES.contains(&lo) && SURROGATES.contains(&hi)) {
                return Err(TableError::NotScalar { lo, hi });
            }
            match prev {
                Some(end) if lo <= end => return Err(TableError::Unordered { lo }),
                Some(end) if lo == end + 1 => return Err(TableError::Unmerged { lo }),
                _ => {}
            }
            prev = Some(hi);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::empty(vec![], vec![], Ok(()))]
    #[case::narrow_only(vec![Range16::new(0x20, 0x7E), Range16::new(0x3000, 0x3003)], vec![], Ok(()))]
    #[case::straddling(vec![Range16::new(0x41, 0x41)], vec![Range32::new(0xFFF0, 0x1_0010)], Ok(()))]
    #[case::inverted(vec![Range16::new(0x42, 0x41)], vec![], Err(TableError::Inverted { lo: 0x42, hi: 0x41 }))]
    #[case::overlap(vec![Range16::new(0x41, 0x45), Range16::new(0x44, 0x50)], vec![], Err(TableError::Unordered { lo: 0x44 }))]
    #[case::descending(vec![Range16::new(0x61, 0x62), Range16::new(0x41, 0x42)], vec![], Err(TableError::Unordered { lo: 0x41 }))]
    #[case::touching(vec![Range16::new(0x41, 0x45), Range16::new(0x46, 0x50)], vec![], Err(TableError::Unmerged { lo: 0x46 }))]
    #[case::touching_across_tiers(vec![Range16::new(0xFF00, 0xFFFF)], vec![Range32::new(0x1_0000, 0x1_0010)], Err(TableError::Unmerged { lo: 0x1_0000 }))]
    #[case::wrong_tier(vec![], vec![Range32::new(0x41, 0x42)], Err(TableError::WrongTier { lo: 0x41, hi: 0x42 }))]
    #[case::spans_surrogates(vec![Range16::new(0xD000, 0xE000)], vec![], Ok(()))]
    #[case::surrogates(vec![Range16::new(0xD800, 0xDBFF)], vec![], Err(TableError::NotScalar { lo: 0xD800, hi: 0xDBFF }))]
    #[case::past_max(vec![], vec![Range32::new(0x11_0000, 0x11_0005)], Err(TableError::NotScalar { lo: 0x11_0000, hi: 0x11_0005 }))]
    #[case::straddling_max(vec![], vec![Range32::new(0x10_FFF0, 0x11_0000)], Err(TableError::NotScalar { lo: 0x10_FFF0, hi: 0x11_0000 }))]
    fn test_try_from_ranges(
        #[case] r16: Vec<Range16>,
        #[case] r32: Vec<Range32>,
        #[case] expected: Result<(), TableError>,
    ) {
        assert_eq!(RangeTable::try_from_ranges(r16, r32).map(|_| ()), expected);
    }

    #[test]
    fn test_built_tables_validate() {
        let table = RangeTable::build("𠮟叱塡填剝剥頰頬abcxyz".chars());
        assert_eq!(table.validate(), Ok(()));
        assert_eq!(RangeTable::EMPTY.validate(), Ok(()));
    }
}
