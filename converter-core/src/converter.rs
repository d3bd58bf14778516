//! Converter State
//!
//! Owns the two slots and the rate status. Every mutation funnels through
//! [`engine::convert`]; there is no other way to change a slot.

use converter_types::{
    ConversionError, ConverterError, CurrencyCode, CurrencySlot, DomainError, FetchError,
    RateSource, RateTable, SlotIndex, SlotPair,
};

use crate::{engine, validator};

/// Where the converter's rate table came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RateStatus {
    /// No fetch has resolved yet.
    #[default]
    NotLoaded,
    /// The most recent fetch succeeded.
    Loaded(RateTable),
    /// The most recent fetch failed. A table from an earlier success, if
    /// any, is kept and still used for conversions.
    Failed {
        error: FetchError,
        last_known: Option<RateTable>,
    },
}

impl RateStatus {
    /// The table conversions run against, if there is one.
    pub fn table(&self) -> Option<&RateTable> {
        match self {
            RateStatus::NotLoaded => None,
            RateStatus::Loaded(table) => Some(table),
            RateStatus::Failed { last_known, .. } => last_known.as_ref(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, RateStatus::Loaded(_))
    }

    fn into_table(self) -> Option<RateTable> {
        match self {
            RateStatus::NotLoaded => None,
            RateStatus::Loaded(table) => Some(table),
            RateStatus::Failed { last_known, .. } => last_known,
        }
    }
}

/// What happened to the derived slot after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recompute {
    /// The non-edited slot was recomputed.
    Converted,
    /// No table exists yet; the edit was kept but nothing was derived.
    RatesUnavailable,
}

/// The two-slot converter.
#[derive(Debug, Clone)]
pub struct Converter {
    initial: SlotPair,
    pair: SlotPair,
    status: RateStatus,
}

impl Converter {
    /// Creates a converter that starts from, and resets to, `initial`.
    pub fn new(initial: SlotPair) -> Result<Self, DomainError> {
        if initial.has_duplicate_denomination() {
            return Err(DomainError::DuplicateDenomination(
                initial.first().denomination.clone(),
            ));
        }
        Ok(Self {
            pair: initial.clone(),
            initial,
            status: RateStatus::NotLoaded,
        })
    }

    /// Creates a converter holding one unit of `base` mirrored into `target`.
    pub fn with_currencies(base: CurrencyCode, target: CurrencyCode) -> Result<Self, DomainError> {
        Self::new(SlotPair::initial(base, target)?)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Read Access
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn pair(&self) -> &SlotPair {
        &self.pair
    }

    pub fn slot(&self, index: SlotIndex) -> &CurrencySlot {
        &self.pair[index]
    }

    pub fn status(&self) -> &RateStatus {
        &self.status
    }

    /// True only while the most recent fetch succeeded.
    pub fn is_loaded(&self) -> bool {
        self.status.is_loaded()
    }

    pub fn rates(&self) -> Option<&RateTable> {
        self.status.table()
    }

    /// Codes the slot at `index` may switch to: every known code except the
    /// one held by the other slot. Empty until a table exists.
    pub fn denomination_choices(&self, index: SlotIndex) -> Vec<&CurrencyCode> {
        let excluded = &self.pair[index.other()].denomination;
        self.rates()
            .map(|table| table.codes_excluding(excluded).collect())
            .unwrap_or_default()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Sets the amount typed into `index` and recomputes the other slot.
    ///
    /// Rejected input leaves the converter untouched.
    pub fn edit_amount(&mut self, index: SlotIndex, raw: &str) -> Result<Recompute, ConverterError> {
        if let Err(err) = validator::validate(raw) {
            tracing::warn!(slot = ?index, input = raw, error = %err, "Rejected amount");
            return Err(err.into());
        }

        self.pair[index].value = engine::parse_amount(raw);
        Ok(self.recompute(index))
    }

    /// Switches the currency of `index`, then re-derives the second slot
    /// from the first slot's amount.
    ///
    /// The first slot is always the source of the recompute, even when the
    /// second slot's currency changed; the second slot's previous amount is
    /// discarded in that case.
    pub fn edit_denomination(
        &mut self,
        index: SlotIndex,
        code: CurrencyCode,
    ) -> Result<Recompute, ConverterError> {
        if self.pair[index.other()].denomination == code {
            tracing::warn!(slot = ?index, %code, "Currency already held by the other slot");
            return Err(ConverterError::SameDenomination(code));
        }

        let table = self.rates().ok_or(ConverterError::RatesUnavailable)?;
        if !table.contains(&code) {
            tracing::warn!(slot = ?index, %code, "Currency not in rate table");
            return Err(ConverterError::UnknownCurrency(code));
        }

        self.pair[index].denomination = code;
        Ok(self.recompute(SlotIndex::First))
    }

    /// Exchanges the two slots. Values move with their currency and nothing
    /// is recomputed.
    pub fn swap(&mut self) {
        self.pair = self.pair.swapped();
        tracing::debug!(pair = %self.pair, "Swapped slots");
    }

    /// Restores the initial pair and derives the second slot from it.
    pub fn reset(&mut self) -> Recompute {
        self.pair = self.initial.clone();
        self.recompute(SlotIndex::First)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Rate Loading
    // ─────────────────────────────────────────────────────────────────────────────

    /// Fetches from `source` and applies the result.
    ///
    /// Holding `&mut self` across the fetch means one converter never has two
    /// fetches in flight.
    pub async fn refresh<S>(&mut self, source: &S) -> Result<Recompute, FetchError>
    where
        S: RateSource + ?Sized,
    {
        let result = source.fetch().await;
        self.apply_fetch(result)
    }

    /// Applies a resolved fetch.
    ///
    /// A new table replaces the old one wholesale and triggers a recompute
    /// from the first slot. A failure keeps the previous table for
    /// conversions, reports not-loaded, and re-derives nothing. Results are
    /// applied in call order; the last one wins.
    pub fn apply_fetch(
        &mut self,
        result: Result<RateTable, FetchError>,
    ) -> Result<Recompute, FetchError> {
        match result {
            Ok(table) => {
                tracing::info!(currencies = table.len(), "Rate table loaded");
                self.status = RateStatus::Loaded(table);
                Ok(self.recompute(SlotIndex::First))
            }
            Err(error) => {
                let last_known = std::mem::take(&mut self.status).into_table();
                tracing::warn!(
                    %error,
                    keeps_previous = last_known.is_some(),
                    "Rate table fetch failed"
                );
                self.status = RateStatus::Failed {
                    error: error.clone(),
                    last_known,
                };
                Err(error)
            }
        }
    }

    fn recompute(&mut self, edited: SlotIndex) -> Recompute {
        match engine::convert(&self.pair, edited, self.status.table()) {
            Ok(next) => {
                self.pair = next;
                tracing::debug!(source = ?edited, pair = %self.pair, "Recomputed pair");
                Recompute::Converted
            }
            Err(ConversionError::RatesUnavailable) => {
                tracing::debug!(source = ?edited, "Rates unavailable, nothing derived");
                Recompute::RatesUnavailable
            }
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self {
            initial: SlotPair::default(),
            pair: SlotPair::default(),
            status: RateStatus::NotLoaded,
        }
    }
}
