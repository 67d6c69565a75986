//! Typed errors shared by every calculator in the crate.
//!
//! Two failure classes exist and they are deliberately kept apart:
//! recoverable "no result" states (malformed tire size, fewer than three
//! golf rounds) are `Option`-shaped at the call site and never appear here,
//! while domain errors (unknown unit, bad formula syntax, unmapped resistor
//! multiplier) surface as [`CalcError`] variants with a readable message.

use thiserror::Error;

/// Result alias used across the crate.
pub type CalcResult<T> = Result<T, CalcError>;

/// Domain error for the calculation toolkit.
///
/// Every calculation is a pure function of its inputs, so a given bad input
/// always fails the same way; there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A unit token is not part of the requested category's unit set.
    #[error("unknown {category} unit: {unit}")]
    InvalidUnit {
        /// Category whose unit set was searched.
        category: &'static str,
        /// The offending token as the caller supplied it.
        unit: String,
    },

    /// Input was NaN/infinite, or the conversion overflowed.
    #[error("value is not a finite number")]
    NonFinite,

    /// A value cannot be represented by the requested encoding.
    #[error("{0}")]
    OutOfRange(String),

    /// A formula or size string violates the grammar.
    #[error("invalid syntax: {0}")]
    InvalidSyntax(String),

    /// An element symbol is missing from the atomic-weight table.
    #[error("unknown element: {0}")]
    UnknownElement(String),

    /// A time zone name is not in the IANA database.
    #[error("unknown time zone: {0}")]
    InvalidZone(String),

    /// A structurally valid input with an impossible value (zero volume,
    /// zero gravity, out-of-range Roman numeral).
    #[error("{0}")]
    InvalidInput(String),
}
