//! `PlusCode`: an owned, pre-validated full-code value, mirroring how
//! `LatLon`/`UtmUps`/`Mgrs` wrap bare coordinate math in a named type instead
//! of forcing callers to thread free functions everywhere (§10.8).

use std::fmt::Display;
use std::str::FromStr;

use crate::{decode, is_full, shorten, CodeArea, Error};

/// A full plus+code that has already been validated.
///
/// Construct one with [`PlusCode::parse`] or via its [`FromStr`] impl; both
/// reject anything that isn't [`is_full`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlusCode(String);

impl PlusCode {
    /// Validates and upper-cases `code`, returning an owned [`PlusCode`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCode`] if `code` is not a full code.
    ///
    /// # Examples
    ///
    /// ```
    /// use pluscode::PlusCode;
    ///
    /// let code = PlusCode::parse("7FG49Q00+").unwrap();
    /// assert_eq!(code.as_str(), "7FG49Q00+");
    /// ```
    pub fn parse(code: &str) -> Result<Self, Error> {
        if !is_full(code) {
            return Err(Error::InvalidCode(code.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// The upper-cased code string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes this code into the [`CodeArea`] it denotes.
    ///
    /// # Errors
    ///
    /// Never fails in practice — a `PlusCode` is always full by
    /// construction — but returns `Result` to match [`crate::decode`].
    pub fn decode(&self) -> Result<CodeArea, Error> {
        decode(&self.0)
    }

    /// Shortens this code relative to `(ref_lat, ref_lng)`.
    ///
    /// # Errors
    ///
    /// See [`crate::shorten`].
    pub fn shorten(&self, ref_lat: f64, ref_lng: f64) -> Result<String, Error> {
        shorten(&self.0, ref_lat, ref_lng)
    }
}

impl FromStr for PlusCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for PlusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
