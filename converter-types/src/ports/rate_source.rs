//! Exchange rate source port.
//!
//! Implementations can be HTTP clients, hardcoded tables, mocks, etc.

use crate::domain::RateTable;
use crate::error::FetchError;

/// Port trait for anything that can produce a complete rate table.
///
/// A fetch is all-or-nothing: either a table that is immediately usable or
/// an error. Callers are expected to have at most one fetch outstanding.
#[async_trait::async_trait]
pub trait RateSource: Send + Sync {
    /// Fetches the latest table of rates relative to the source's base currency.
    async fn fetch(&self) -> Result<RateTable, FetchError>;
}
