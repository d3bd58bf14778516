//! Domain models for the converter.

pub mod currency;
pub mod rates;
pub mod slot;

pub use currency::CurrencyCode;
pub use rates::RateTable;
pub use slot::{
    CurrencySlot, DEFAULT_BASE_CURRENCY, DEFAULT_TARGET_CURRENCY, MAX_VALUE_RANGE, SlotIndex,
    SlotPair,
};
