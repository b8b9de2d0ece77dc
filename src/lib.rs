#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]

//! Codec for Open Location Codes ("plus+codes"): the deterministic mapping
//! between geographic coordinates and their short alphanumeric identifiers,
//! plus the shortening/recovery operations that abbreviate a code relative
//! to a nearby reference point and reconstruct it again.
//!
//! The crate is pure and stateless — no I/O, no hidden state, every
//! function safe to call from any number of threads at once.

use thiserror::Error;

mod alphabet;
mod code_area;
mod constants;
mod decode;
mod encode;
mod grid;
mod pair;
mod plus_code;
mod recover;
mod shorten;
mod utility;
mod validate;

pub use code_area::CodeArea;
pub use decode::decode;
pub use encode::encode;
pub use plus_code::PlusCode;
pub use recover::recover_nearest;
pub use shorten::shorten;
pub use validate::{is_full, is_short, is_valid};

/// Errors the codec surfaces to callers. Validators themselves never fail —
/// see [`is_valid`] — only the operations built on top of them do.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input string fails [`is_valid`]/[`is_full`]/[`is_short`] as
    /// required by the operation that rejected it.
    #[error("'{0}' is not a valid plus+code for this operation")]
    InvalidCode(String),
    /// A requested `encode` length is not a legal code length.
    #[error("{0} is not a valid code length (must be >= 2, and even if below 10)")]
    InvalidLength(usize),
    /// `shorten` was called on a code with fewer than 6 digits.
    #[error("'{0}' is too short to shorten further")]
    CodeTooShort(String),
    /// `shorten` was called on a code that contains padding.
    #[error("'{0}' contains padding and cannot be shortened")]
    UnsupportedOperation(String),
}
