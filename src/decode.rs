//! Decoder front-end: strips separator/padding, routes to the pair and grid
//! stages, and stitches the result into one [`CodeArea`] ([C7]).

use crate::code_area::CodeArea;
use crate::constants::{PAD, PAIR_CODE_LENGTH, SEPARATOR};
use crate::{grid, is_full, pair, Error};

/// Decodes a full plus+code into the [`CodeArea`] it denotes.
///
/// # Errors
///
/// Returns [`Error::InvalidCode`] if `code` is not a full code (short codes
/// must be expanded with [`crate::recover_nearest`] first).
///
/// # Examples
///
/// ```
/// use pluscode::decode;
///
/// let area = decode("7FG49Q00+").unwrap();
/// assert!((area.lat_lo - 20.35).abs() < 1e-9);
/// ```
pub fn decode(code: &str) -> Result<CodeArea, Error> {
    if !is_full(code) {
        return Err(Error::InvalidCode(code.to_string()));
    }

    let digits: String = code
        .chars()
        .filter(|&c| c != SEPARATOR && c != PAD)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let pair_len = digits.chars().count().min(PAIR_CODE_LENGTH);
    let pair_digits: String = digits.chars().take(pair_len).collect();
    let pair_area = pair::decode(&pair_digits);

    if digits.chars().count() <= PAIR_CODE_LENGTH {
        return Ok(pair_area);
    }

    let grid_digits: String = digits.chars().skip(PAIR_CODE_LENGTH).collect();
    let grid_area = grid::decode(&grid_digits);

    Ok(CodeArea::new(
        pair_area.lat_lo + grid_area.lat_lo,
        pair_area.lng_lo + grid_area.lng_lo,
        pair_area.lat_lo + grid_area.lat_hi,
        pair_area.lng_lo + grid_area.lng_hi,
        pair_area.code_length + grid_area.code_length,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_scenario_one() {
        let area = decode("7FG49Q00+").unwrap();
        assert!((area.lat_lo - 20.35).abs() < 1e-9);
        assert!((area.lng_lo - 2.75).abs() < 1e-9);
        assert!((area.lat_hi - 20.4).abs() < 1e-9);
        assert!((area.lng_hi - 2.8).abs() < 1e-9);
        assert_eq!(area.code_length, 6);
    }

    #[test]
    fn seed_scenario_two_code_length() {
        let area = decode("8FVC2222+235").unwrap();
        assert_eq!(area.code_length, 11);
    }

    #[test]
    fn rejects_short_codes() {
        assert!(matches!(decode("CJ+2VX"), Err(Error::InvalidCode(_))));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(decode("not a code"), Err(Error::InvalidCode(_))));
    }

    #[test]
    fn round_trips_through_encode() {
        let code = crate::encode(51.3701125, -1.217765625, 12).unwrap();
        let area = decode(&code).unwrap();
        let back = crate::encode(area.lat_center(), area.lng_center(), area.code_length).unwrap();
        assert_eq!(code, back);
    }
}
