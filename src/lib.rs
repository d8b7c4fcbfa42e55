//! Membership tests for Japanese character sets, and a rewriter that replaces
//! runs of characters outside a set.
//!
//! Three sets are built in:
//!
//! - [`jisx0208`]: printable ASCII plus the JIS X 0208 repertoire.
//! - [`kanji::regular_use`]: the regular-use kanji (常用漢字).
//! - [`kanji::personal_name`]: the kanji usable in personal names (人名用漢字).
//!
//! Each is a [`RangeTable`] generated at build time. Overrides for single
//! characters go through a [`Discriminator`], and any [`Membership`]
//! predicate can drive the [`rewrite`] functions.
//!
//! ```
//! use jpcharset::jisx0208;
//!
//! assert!(jisx0208::is('人'));
//! assert!(!jisx0208::is('髙'));
//! assert_eq!(jisx0208::to_valid("髙﨑閒", "□"), "□");
//! ```

#![no_std]
#![cfg_attr(feature = "forbid-unsafe", forbid(unsafe_code))]
#![warn(clippy::undocumented_unsafe_blocks, clippy::pedantic, clippy::nursery)]

extern crate alloc;

/// The generated tables.
#[allow(clippy::unreadable_literal)]
pub mod tables {
    include!(concat!(env!("OUT_DIR"), "/data.rs"));
}

macro_rules! from_utf8 {
    ($bytes:expr) => {{
        #[cfg(feature = "forbid-unsafe")]
        {
            core::str::from_utf8($bytes).unwrap()
        }
        #[cfg(not(feature = "forbid-unsafe"))]
        #[allow(unused_unsafe, reason = "may be encased in an existing unsafe block")]
        {
            // SAFETY: Caller must verify the bytes are valid UTF-8.
            unsafe { core::str::from_utf8_unchecked($bytes) }
        }
    }};
}
pub(crate) use from_utf8;

mod check;
pub use check::TableError;

pub mod codepoint;

mod discriminator;
pub use discriminator::{Discriminator, DiscriminatorBuilder};

pub mod jisx0208;
pub mod kanji;

mod membership;
pub use membership::Membership;

pub mod rewrite;

mod table;
pub use table::{Range16, Range32, RangeTable, MAX_NARROW};
