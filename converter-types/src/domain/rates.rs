//! Exchange rate tables.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::CurrencyCode;

/// Rates of every known currency relative to one base currency.
///
/// A table is built whole from a single successful fetch and never updated
/// afterwards; a newer fetch replaces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: BTreeMap<CurrencyCode, f64>,
}

impl RateTable {
    pub fn new(rates: BTreeMap<CurrencyCode, f64>) -> Self {
        Self { rates }
    }

    /// Rate of `code` against the base currency, if the table knows it.
    pub fn rate(&self, code: &CurrencyCode) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.rates.contains_key(code)
    }

    /// All codes in the table, sorted.
    pub fn codes(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.rates.keys()
    }

    /// Codes a slot may switch to: everything except `excluded`, which is
    /// the code held by the opposite slot.
    pub fn codes_excluding<'a>(
        &'a self,
        excluded: &'a CurrencyCode,
    ) -> impl Iterator<Item = &'a CurrencyCode> {
        self.rates.keys().filter(move |code| *code != excluded)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl FromIterator<(CurrencyCode, f64)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (CurrencyCode, f64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
