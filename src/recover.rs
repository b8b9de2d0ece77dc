//! Recovery: reconstructing the nearest full code from a short code and a
//! reference point ([C9]).

use crate::constants::SEPARATOR_POSITION;
use crate::utility::CoordMath;
use crate::{decode, encode, is_full, is_short, pair, Error};

/// Reconstructs the full code nearest to `(ref_lat, ref_lng)` that `short`
/// could have been shortened from.
///
/// If `short` is already a full code it is returned unchanged (upper-cased).
///
/// # Errors
///
/// Returns [`Error::InvalidCode`] if `short` is neither a valid short code
/// nor a valid full code.
///
/// # Examples
///
/// ```
/// use pluscode::recover_nearest;
///
/// let full = recover_nearest("CJ+2VX", 51.3701125, -1.217765625).unwrap();
/// assert_eq!(full, "9C3W9QCJ+2VX");
/// ```
pub fn recover_nearest(short: &str, ref_lat: f64, ref_lng: f64) -> Result<String, Error> {
    if !is_short(short) {
        return if is_full(short) {
            Ok(short.to_ascii_uppercase())
        } else {
            Err(Error::InvalidCode(short.to_string()))
        };
    }

    let ref_lat = ref_lat.clip_lat();
    let ref_lng = ref_lng.normalize_lng();

    let sep_index = short.chars().position(|c| c == '+').expect("is_short guarantees a separator");
    let padding_length = SEPARATOR_POSITION - sep_index;

    let resolution = 20f64.powi(2 - (padding_length / 2) as i32);
    let half = resolution / 2.0;

    let rounded_lat = (ref_lat / resolution).floor() * resolution;
    let rounded_lng = (ref_lng / resolution).floor() * resolution;

    let prefix = pair::encode(rounded_lat, rounded_lng, padding_length);
    let candidate: String = prefix.chars().chain(short.to_ascii_uppercase().chars()).collect();

    let decoded = decode(&candidate)?;

    let mut lat = decoded.lat_center();
    let mut lng = decoded.lng_center();

    if lat - ref_lat > half {
        lat -= resolution;
    } else if lat - ref_lat < -half {
        lat += resolution;
    }

    if lng - ref_lng > half {
        lng -= resolution;
    } else if lng - ref_lng < -half {
        lng += resolution;
    }

    encode(lat, lng, decoded.code_length)
}
