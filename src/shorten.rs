//! Shortening: trimming a full code's leading digits relative to a nearby
//! reference point ([C8]).

use crate::constants::{MIN_TRIMMABLE_CODE_LEN, PAD, PAIR_RESOLUTIONS, SEPARATOR};
use crate::utility::CoordMath;
use crate::{decode, is_full, Error};

/// Shortens `code` relative to `(ref_lat, ref_lng)`, trimming 2, 4, 6, or 8
/// leading characters when the reference is close enough that the trimmed
/// code can later be recovered unambiguously.
///
/// Returns `code` unchanged (still upper-cased, still validated) if the
/// reference isn't close enough to shorten safely.
///
/// # Errors
///
/// - [`Error::InvalidCode`] if `code` is not a full code.
/// - [`Error::UnsupportedOperation`] if `code` contains padding.
/// - [`Error::CodeTooShort`] if `code` has fewer than 6 digits.
///
/// # Examples
///
/// ```
/// use pluscode::shorten;
///
/// let short = shorten("9C3W9QCJ+2VX", 51.3701125, -1.217765625).unwrap();
/// assert_eq!(short, "CJ+2VX");
/// ```
pub fn shorten(code: &str, ref_lat: f64, ref_lng: f64) -> Result<String, Error> {
    if !is_full(code) {
        return Err(Error::InvalidCode(code.to_string()));
    }
    if code.contains(PAD) {
        return Err(Error::UnsupportedOperation(code.to_string()));
    }

    // Unreachable for any code that actually came out of `encode`: a full
    // code always has 8 real digits before the separator once padding is
    // ruled out above. Checked anyway because `is_full` only validates
    // grammar, not provenance.
    let digit_count = code.chars().filter(|&c| c != SEPARATOR && c != PAD).count();
    if digit_count < MIN_TRIMMABLE_CODE_LEN {
        return Err(Error::CodeTooShort(code.to_string()));
    }

    let area = decode(code)?;
    let range = (area.lat_center() - ref_lat.clip_lat())
        .abs()
        .max((area.lng_center() - ref_lng.normalize_lng()).abs());

    // i stops at 3, not 4: i=4 would remove 2*(4+1)=10 characters, which
    // strips the separator itself out of a pair-only full code and leaves a
    // string with no '+' at all.
    for i in (1..=3).rev() {
        if range < PAIR_RESOLUTIONS[i] * 0.3 {
            let remove = 2 * (i + 1);
            return Ok(code.chars().skip(remove).collect());
        }
    }

    Ok(code.to_string())
}
