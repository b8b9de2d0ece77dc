//! Code assembly: pair digits, padding/separator placement, and grid digits
//! joined into the final string ([C6], wrapping [C4]/[C5]).

use crate::constants::{PAD, PAIR_CODE_LENGTH, SEPARATOR, SEPARATOR_POSITION};
use crate::utility::{lat_precision, CoordMath};
use crate::{grid, pair, Error};

/// Encodes `(lat, lng)` into a plus+code of `code_length` alphabet digits.
///
/// `code_length` defaults to 10 in the reference tool this crate ports;
/// callers that want the default should pass `10` explicitly, since this
/// core has no hidden state to remember a "last used" precision.
///
/// Latitude is clipped into `[-90, 90]` and longitude wrapped into
/// `[-180, 180)` before encoding, so `encode` never fails on an
/// out-of-range coordinate — only on an illegal `code_length`.
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] if `code_length < 2`, or if
/// `code_length < 10` and is odd.
///
/// # Examples
///
/// ```
/// use pluscode::encode;
///
/// assert_eq!(encode(20.375, 2.775, 6).unwrap(), "7FG49Q00+");
/// ```
pub fn encode(lat: f64, lng: f64, code_length: usize) -> Result<String, Error> {
    if code_length < 2 || (code_length < PAIR_CODE_LENGTH && code_length % 2 == 1) {
        return Err(Error::InvalidLength(code_length));
    }

    let lat = lat.clip_lat();
    let lat = if (lat - crate::constants::LAT_MAX).abs() < f64::EPSILON {
        lat - lat_precision(code_length)
    } else {
        lat
    };
    let lng = lng.normalize_lng();

    let pair_len = code_length.min(PAIR_CODE_LENGTH);
    let pair_digits = pair::encode(lat, lng, pair_len);

    let grid_digits = if code_length > PAIR_CODE_LENGTH {
        grid::encode(lat, lng, code_length - PAIR_CODE_LENGTH)
    } else {
        String::new()
    };

    Ok(assemble(&pair_digits, &grid_digits))
}

/// Inserts padding/separator around `pair_digits` and appends `grid_digits`.
fn assemble(pair_digits: &str, grid_digits: &str) -> String {
    let n = pair_digits.chars().count();
    let mut out = String::with_capacity(SEPARATOR_POSITION + 1 + grid_digits.len());

    match n.cmp(&SEPARATOR_POSITION) {
        std::cmp::Ordering::Less => {
            out.push_str(pair_digits);
            out.extend(std::iter::repeat(PAD).take(SEPARATOR_POSITION - n));
            out.push(SEPARATOR);
        }
        std::cmp::Ordering::Equal => {
            out.push_str(pair_digits);
            out.push(SEPARATOR);
        }
        std::cmp::Ordering::Greater => {
            out.push_str(&pair_digits[..SEPARATOR_POSITION]);
            out.push(SEPARATOR);
            out.push_str(&pair_digits[SEPARATOR_POSITION..]);
        }
    }

    out.push_str(grid_digits);
    out
}
