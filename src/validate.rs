//! `is_valid`, `is_short`, `is_full` ([C3]).
//!
//! These never fail — they answer a yes/no question about the string's
//! grammar — so every other entry point that accepts a code string must run
//! the relevant check itself and turn a `false` into [`crate::Error::InvalidCode`].

use crate::alphabet::value_of;
use crate::constants::{ENCODING_BASE, LAT_MAX, LNG_MAX, PAD, SEPARATOR, SEPARATOR_POSITION};

/// True if `s` is grammatically a plus+code: one separator at an even index
/// no greater than 8, at most one contiguous pad run immediately before the
/// separator, and every remaining character a valid alphabet digit.
#[must_use]
pub fn is_valid(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();

    let sep_count = chars.iter().filter(|&&c| c == SEPARATOR).count();
    if sep_count != 1 {
        return false;
    }

    let Some(sep_index) = chars.iter().position(|&c| c == SEPARATOR) else {
        return false;
    };
    if sep_index % 2 != 0 || sep_index > SEPARATOR_POSITION {
        return false;
    }

    if chars.iter().any(|&c| c == PAD) {
        let pad_start = chars.iter().position(|&c| c == PAD).unwrap();
        let pad_end = chars.iter().rposition(|&c| c == PAD).unwrap();
        let pad_len = pad_end - pad_start + 1;

        // A pad run starting at index 0 is rejected, with one deliberate
        // exception: a code whose entire prefix is padding (e.g.
        // "00000000+") is what `encode` would itself produce for a
        // degenerate zero-length request, so it is accepted rather than
        // special-cased away.
        let entirely_padding = pad_start == 0 && pad_end + 1 == sep_index;
        if pad_start == 0 && !entirely_padding {
            return false;
        }
        if pad_start % 2 != 0 {
            return false;
        }
        if pad_len % 2 != 0 {
            return false;
        }
        // the pad run must be contiguous
        if chars[pad_start..=pad_end].iter().any(|&c| c != PAD) {
            return false;
        }
        // it must sit immediately before the separator, which must then be
        // the final character
        if pad_end + 1 != sep_index || sep_index != chars.len() - 1 {
            return false;
        }
    }

    // exactly one digit after the separator is not allowed
    let digits_after = chars.len() - sep_index - 1;
    if digits_after == 1 {
        return false;
    }

    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| i != sep_index && c != PAD)
        .all(|(_, &c)| value_of(c).is_some())
}

/// True if `s` is valid and abbreviated: it has a separator, but fewer than
/// 8 alphabet characters precede it.
#[must_use]
pub fn is_short(s: &str) -> bool {
    if !is_valid(s) {
        return false;
    }
    let sep_index = s.chars().position(|c| c == SEPARATOR).unwrap();
    sep_index < SEPARATOR_POSITION
}

/// True if `s` is valid, not short, and its leading pair digits decode to a
/// latitude `< 90` and (if present) a longitude `< 180`.
#[must_use]
pub fn is_full(s: &str) -> bool {
    if !is_valid(s) || is_short(s) {
        return false;
    }

    let chars: Vec<char> = s.chars().collect();

    let first_value = match chars.first().copied().and_then(value_of) {
        Some(v) => v,
        None => return false,
    };
    if f64::from(first_value) >= LAT_MAX * 2.0 / ENCODING_BASE as f64 {
        return false;
    }

    if let Some(second) = chars.get(1).copied() {
        if let Some(second_value) = value_of(second) {
            if f64::from(second_value) >= LNG_MAX * 2.0 / ENCODING_BASE as f64 {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_separator_is_valid() {
        assert!(is_valid("CFX30000+"));
    }

    #[test]
    fn single_trailing_digit_is_invalid() {
        assert!(!is_valid("8FWC2345+G"));
    }

    #[test]
    fn bare_separator_after_full_padding_is_valid() {
        // Degenerate but consistent with what `encode` emits for very short
        // requested lengths; preserved rather than special-cased away.
        assert!(is_valid("00000000+"));
    }

    #[test]
    fn two_trailing_digits_are_valid() {
        assert!(is_valid("8FWC2345+G6"));
    }

    #[test]
    fn rejects_more_than_one_separator() {
        assert!(!is_valid("8F+WC23+45"));
    }

    #[test]
    fn rejects_odd_separator_index() {
        assert!(!is_valid("8FW+C2345"));
    }

    #[test]
    fn rejects_pad_starting_at_index_zero() {
        assert!(!is_valid("00000000+00"));
    }

    #[test]
    fn rejects_pad_not_immediately_before_separator() {
        assert!(!is_valid("8F0000G0+"));
    }

    #[test]
    fn full_and_short_are_mutually_exclusive() {
        assert!(is_short("CJ+2VX"));
        assert!(!is_full("CJ+2VX"));
        assert!(is_full("9C3W9QCJ+2VX"));
        assert!(!is_short("9C3W9QCJ+2VX"));
    }

    #[test]
    fn rejects_first_pair_values_at_or_past_the_bounds() {
        // 'R' has alphabet value 16, so the first pair digit alone would
        // decode to a latitude >= 90: valid grammar, but not a full code.
        assert!(is_valid("RC000000+"));
        assert!(!is_full("RC000000+"));
    }
}
