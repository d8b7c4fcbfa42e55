//! Kanji lists published by the Japanese government.
//!
//! Both lists only judge Han characters. Everything else (kana, Latin
//! letters, digits, emoji) is valid for [`RegularUse`] and [`PersonalName`],
//! so rewriting only touches kanji that are off the list.

use crate::tables;

pub mod personal_name;
pub mod regular_use;

pub use personal_name::{is_for_personal_names, is_not_for_personal_names, PersonalName};
pub use regular_use::{is_not_regular_use, is_regular_use, RegularUse};

/// Script=Han, including the compatibility ideographs and the iteration
/// mark 々.
#[must_use]
pub fn is_han(c: char) -> bool {
    tables::HAN.contains(c)
}
