use crate::RangeTable;

/// A predicate over Unicode scalar values.
///
/// Everything that rewrites text is generic over this trait, so a table, a
/// union of tables, a [`Discriminator`](crate::Discriminator) and a plain
/// closure are interchangeable.
///
/// # Examples
///
/// ```
/// # use jpcharset::{rewrite, Membership};
/// let digits = |c: char| c.is_ascii_digit();
/// assert!(digits.is('7'));
/// assert_eq!(rewrite::to_valid("12ab34", "-", &digits), "12-34");
/// ```
pub trait Membership {
    fn is(&self, c: char) -> bool;
}

impl<F: Fn(char) -> bool> Membership for F {
    fn is(&self, c: char) -> bool {
        self(c)
    }
}

impl Membership for RangeTable {
    fn is(&self, c: char) -> bool {
        self.contains(c)
    }
}

/// Union: `c` is a member if any of the tables contains it.
impl<const N: usize> Membership for [&RangeTable; N] {
    fn is(&self, c: char) -> bool {
        self.iter().any(|table| table.contains(c))
    }
}
