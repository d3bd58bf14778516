//! Error types for the converter.

use crate::domain::{CurrencyCode, MAX_VALUE_RANGE};

/// Domain-level errors (invalid values for domain types).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Currency code cannot be empty")]
    EmptyCurrencyCode,

    #[error("Both slots cannot hold the same currency: {0}")]
    DuplicateDenomination(CurrencyCode),
}

/// Reasons an amount typed into a slot is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Must be a numeric value")]
    NotNumeric,

    #[error("Must be any number less than {max}", max = MAX_VALUE_RANGE)]
    ExceedsMaxRange,
}

/// A rate table could not be obtained.
///
/// Kept free of transport types so the status can be cloned and stored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Transport(String),

    #[error("Rate endpoint returned status {0}")]
    Status(u16),

    #[error("Malformed rate table: {0}")]
    Decode(String),
}

/// Returned by the conversion engine when there is no table to convert with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("Exchange rates are not available")]
    RatesUnavailable,
}

/// Errors surfaced by converter mutations. None of them change state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConverterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0} is already selected in the other slot")]
    SameDenomination(CurrencyCode),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(CurrencyCode),

    #[error("Exchange rates are not available")]
    RatesUnavailable,
}

impl From<ConversionError> for ConverterError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::RatesUnavailable => ConverterError::RatesUnavailable,
        }
    }
}
