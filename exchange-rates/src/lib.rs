//! Hardcoded Exchange Rates
//!
//! A [`RateSource`] that never touches the network. It serves a fixed,
//! USD-based table for development, offline runs and tests, and can be
//! pointed at any caller-supplied table or told to fail.
//!
//! # Adding a New Currency
//! Add a line to the `BUILTIN_RATES` table:
//! ```ignore
//! const BUILTIN_RATES: &[(&str, f64)] = &[
//!     // ... existing currencies ...
//!     ("CHF", 0.88),
//! ];
//! ```
//!
//! # Example
//! ```
//! use converter_types::CurrencyCode;
//! use exchange_rates::StaticRateSource;
//!
//! let source = StaticRateSource::builtin();
//! let inr = CurrencyCode::new("INR").unwrap();
//! assert_eq!(source.table().rate(&inr), Some(83.0));
//! ```

use converter_types::{CurrencyCode, FetchError, RateSource, RateTable};

// ─────────────────────────────────────────────────────────────────────────────
// Built-in Rates
// ─────────────────────────────────────────────────────────────────────────────

/// Base currency of the built-in table.
pub const BUILTIN_BASE: &str = "USD";

/// Units of each currency per one US dollar.
const BUILTIN_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("INR", 83.0),
    ("JPY", 151.6),
];

/// Builds the built-in USD-based table.
pub fn builtin_table() -> RateTable {
    BUILTIN_RATES
        .iter()
        .filter_map(|&(code, rate)| CurrencyCode::new(code).ok().map(|code| (code, rate)))
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Static Source
// ─────────────────────────────────────────────────────────────────────────────

/// A rate source answering every fetch from memory.
#[derive(Debug, Clone)]
pub struct StaticRateSource {
    outcome: Result<RateTable, FetchError>,
}

impl StaticRateSource {
    /// Serves the built-in USD-based table.
    pub fn builtin() -> Self {
        Self::with_table(builtin_table())
    }

    /// Serves the given table.
    pub fn with_table(table: RateTable) -> Self {
        Self { outcome: Ok(table) }
    }

    /// Serves `(code, rate)` pairs, skipping blank codes.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self::with_table(
            pairs
                .into_iter()
                .filter_map(|(code, rate)| CurrencyCode::new(code).ok().map(|code| (code, rate)))
                .collect(),
        )
    }

    /// Fails every fetch with `err`.
    pub fn failing(err: FetchError) -> Self {
        Self { outcome: Err(err) }
    }

    /// The table this source serves, or an empty table if it always fails.
    pub fn table(&self) -> RateTable {
        self.outcome.clone().unwrap_or_default()
    }
}

impl Default for StaticRateSource {
    fn default() -> Self {
        Self::builtin()
    }
}

#[async_trait::async_trait]
impl RateSource for StaticRateSource {
    async fn fetch(&self) -> Result<RateTable, FetchError> {
        match &self.outcome {
            Ok(table) => {
                tracing::debug!(currencies = table.len(), "Serving hardcoded rate table");
                Ok(table.clone())
            }
            Err(err) => {
                tracing::debug!(error = %err, "Hardcoded rate source configured to fail");
                Err(err.clone())
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    #[test]
    fn test_builtin_table_is_usd_based() {
        let table = builtin_table();
        assert_eq!(table.rate(&code(BUILTIN_BASE)), Some(1.0));
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_builtin_table_has_default_pair() {
        let table = builtin_table();
        assert!(table.contains(&code("USD")));
        assert!(table.contains(&code("INR")));
    }

    #[test]
    fn test_from_pairs_skips_blank_codes() {
        let source = StaticRateSource::from_pairs([("USD", 1.0), ("", 2.0)]);
        assert_eq!(source.table().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_returns_table() {
        let source = StaticRateSource::from_pairs([("USD", 1.0), ("INR", 83.0)]);
        let table = source.fetch().await.unwrap();
        assert_eq!(table.rate(&code("INR")), Some(83.0));
    }

    #[tokio::test]
    async fn test_failing_source() {
        let source = StaticRateSource::failing(FetchError::Status(503));
        assert_eq!(source.fetch().await, Err(FetchError::Status(503)));
        assert!(source.table().is_empty());
    }
}
