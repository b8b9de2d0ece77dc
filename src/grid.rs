//! Grid stage: alphabet digits 11 and beyond, refining the `0.000125°`
//! cell left by the pair stage into a 4x5 subdivision ([C5]).

use crate::alphabet::{digit_at, value_of};
use crate::code_area::CodeArea;
use crate::constants::{GRID_COLS, GRID_ROWS, GRID_SIZE_DEGREES, LAT_MAX, LNG_MAX};

/// Encodes `m` grid digits refining the pair-stage cell containing `(lat, lng)`.
pub(crate) fn encode(lat: f64, lng: f64, m: usize) -> String {
    let mut lat_rem = (lat + LAT_MAX) % GRID_SIZE_DEGREES;
    let mut lng_rem = (lng + LNG_MAX) % GRID_SIZE_DEGREES;

    let mut lat_place_value = GRID_SIZE_DEGREES;
    let mut lng_place_value = GRID_SIZE_DEGREES;

    let mut out = String::with_capacity(m);
    for _ in 0..m {
        let row = (lat_rem / (lat_place_value / GRID_ROWS as f64)).floor();
        let col = (lng_rem / (lng_place_value / GRID_COLS as f64)).floor();

        lat_place_value /= GRID_ROWS as f64;
        lng_place_value /= GRID_COLS as f64;

        lat_rem -= row * lat_place_value;
        lng_rem -= col * lng_place_value;

        out.push(digit_at(row as usize * GRID_COLS + col as usize));
    }
    out
}

/// Decodes a grid-stage suffix into a [`CodeArea`] in *local* coordinates —
/// `lat_lo`/`lng_lo` are offsets from the pair cell's own low corner, not
/// global degrees. The caller translates by the pair area's low corner.
pub(crate) fn decode(digits: &str) -> CodeArea {
    let mut lat_lo = 0.0;
    let mut lng_lo = 0.0;

    let mut lat_place_value = GRID_SIZE_DEGREES;
    let mut lng_place_value = GRID_SIZE_DEGREES;

    for c in digits.chars() {
        let value = usize::from(value_of(c).expect("non-alphabet character in grid digits"));
        let row = value / GRID_COLS;
        let col = value % GRID_COLS;

        lat_place_value /= GRID_ROWS as f64;
        lng_place_value /= GRID_COLS as f64;

        lat_lo += row as f64 * lat_place_value;
        lng_lo += col as f64 * lng_place_value;
    }

    let lat_hi = lat_lo + lat_place_value;
    let lng_hi = lng_lo + lng_place_value;

    CodeArea::new(lat_lo, lng_lo, lat_hi, lng_hi, digits.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_grid_digit_subdivides_into_twenty_cells() {
        let encoded = encode(47.0000625, 8.0000625, 1);
        assert_eq!(encoded.chars().count(), 1);
        let area = decode(&encoded);
        assert!((area.lat_hi - area.lat_lo - GRID_SIZE_DEGREES / GRID_ROWS as f64).abs() < 1e-12);
        assert!((area.lng_hi - area.lng_lo - GRID_SIZE_DEGREES / GRID_COLS as f64).abs() < 1e-12);
    }

    #[test]
    fn three_grid_digits_match_seed_scenario_suffix() {
        // From encode(47.0000625, 8.0000625, 11) => "8FVC2222+235", the
        // grid suffix is "235".
        let encoded = encode(47.0000625, 8.0000625, 3);
        assert_eq!(encoded, "235");
    }
}
