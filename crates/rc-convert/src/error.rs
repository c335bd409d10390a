//! Conversion errors.

use rc_core::RcError;
use rc_units::TableError;
use thiserror::Error;

/// Result type for conversion and sync operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that escape a conversion.
///
/// Only `UnknownUnit` escapes the sync path, and selectors are filled from
/// the table, so it signals a programming error. `NonFinite` comes from
/// direct `convert` calls whose result overflows; the sync path blanks the
/// follower instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error(transparent)]
    UnknownUnit(#[from] TableError),

    #[error(transparent)]
    NonFinite(#[from] RcError),
}

/// Driver text that does not parse to a finite number.
///
/// Recoverable: the sync boundary turns it into a blank follower.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{text}' is not a number")]
pub struct ParseError {
    pub text: String,
}
