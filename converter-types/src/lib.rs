//! # Converter Types
//!
//! Domain types and port traits for the two-slot currency converter.
//! This crate has ZERO external IO dependencies - only data structures,
//! invariants, and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Currency codes, slots, the ordered slot pair, rate tables
//! - `ports/` - The `RateSource` trait that rate adapters implement
//! - `dto/` - Wire shape of the latest-rates endpoint
//! - `error/` - Validation, fetch and converter errors

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    CurrencyCode, CurrencySlot, DEFAULT_BASE_CURRENCY, DEFAULT_TARGET_CURRENCY, MAX_VALUE_RANGE,
    RateTable, SlotIndex, SlotPair,
};
pub use dto::LatestRatesResponse;
pub use error::{ConversionError, ConverterError, DomainError, FetchError, ValidationError};
pub use ports::RateSource;
