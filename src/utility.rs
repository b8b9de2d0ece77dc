//! Small helpers shared across the codec, in the same spirit as the
//! extension-trait-on-`f64` idiom (`GeoMath`) this codebase already uses for
//! its other coordinate math.

use crate::constants::{LAT_MAX, LNG_MAX};

/// Coordinate normalization used before any encode/decode math runs ([C2]).
pub(crate) trait CoordMath {
    /// Clips latitude into `[-90, 90]`.
    fn clip_lat(&self) -> f64;
    /// Wraps longitude into `[-180, 180)`, never returning exactly 180.
    fn normalize_lng(&self) -> f64;
}

impl CoordMath for f64 {
    fn clip_lat(&self) -> f64 {
        self.max(-LAT_MAX).min(LAT_MAX)
    }

    fn normalize_lng(&self) -> f64 {
        let mut lng = *self;
        if lng >= LNG_MAX {
            lng -= 2.0 * LNG_MAX * ((lng - LNG_MAX) / (2.0 * LNG_MAX) + 1.0).floor();
        }
        if lng < -LNG_MAX {
            lng += 2.0 * LNG_MAX * ((-LNG_MAX - lng) / (2.0 * LNG_MAX) + 1.0).floor();
        }
        lng
    }
}

/// Precision in degrees of latitude at a given code length, used only to
/// bias `lat == 90` down before encoding so it decodes back into a cell that
/// still contains the pole.
pub(crate) fn lat_precision(code_length: usize) -> f64 {
    use crate::constants::GRID_ROWS;

    if code_length <= crate::constants::PAIR_CODE_LENGTH {
        20f64.powi(-(code_length as i32 / 2 - 2))
    } else {
        20f64.powi(-3) / (GRID_ROWS as f64).powi((code_length - 10) as i32)
    }
}
