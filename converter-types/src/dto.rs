//! Data Transfer Objects for the latest-rates endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::{CurrencyCode, RateTable};

/// Body of a latest-rates response.
///
/// Only `rates` is required. Every other top-level field is ignored except
/// `base_code`, which is kept for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestRatesResponse {
    /// Currency all rates are relative to, when the endpoint reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_code: Option<CurrencyCode>,
    pub rates: RateTable,
}

impl From<LatestRatesResponse> for RateTable {
    fn from(resp: LatestRatesResponse) -> Self {
        resp.rates
    }
}
