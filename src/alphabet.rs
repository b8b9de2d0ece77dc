//! Alphabet digit <-> value lookups ([C1]).
//!
//! The forward direction (`value_of`) is a hot path for both encode and
//! decode, so the reverse map is built once behind a [`lazy_static`] and
//! never mutated afterwards, matching this crate's existing use of
//! `lazy_static` for one-time-computed constants.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::constants::ALPHABET;

lazy_static! {
    static ref DIGIT_VALUES: HashMap<char, u8> = ALPHABET
        .chars()
        .enumerate()
        .map(|(i, c)| (c, i as u8))
        .collect();
}

/// The alphabet symbol at `value`, upper-case.
///
/// # Panics
///
/// Panics if `value >= 20`; all call sites derive `value` from a modulus or
/// division against the alphabet's own base, so this never fires in practice.
pub(crate) fn digit_at(value: usize) -> char {
    ALPHABET
        .chars()
        .nth(value)
        .expect("digit value out of range for the plus+code alphabet")
}

/// The positional value of `c`, case-insensitively. `None` if `c` is not a
/// plus+code alphabet character.
pub(crate) fn value_of(c: char) -> Option<u8> {
    DIGIT_VALUES.get(&c.to_ascii_uppercase()).copied()
}
