//! Port traits (interfaces for adapters).
//!
//! The converter depends on these traits, not on concrete rate providers.

mod rate_source;

pub use rate_source::RateSource;
