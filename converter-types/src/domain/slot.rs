//! Currency slots and the ordered pair the converter keeps consistent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

use super::CurrencyCode;
use crate::error::DomainError;

/// Largest amount a user may type into a slot.
pub const MAX_VALUE_RANGE: u32 = 10_000;

/// Currency of the first slot in a fresh converter.
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

/// Currency of the second slot in a fresh converter.
pub const DEFAULT_TARGET_CURRENCY: &str = "INR";

/// One currency/amount pair.
///
/// `value` is `None` until the slot has been given an amount, either by the
/// user or by a conversion pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencySlot {
    pub denomination: CurrencyCode,
    pub value: Option<f64>,
}

impl CurrencySlot {
    pub fn new(denomination: CurrencyCode, value: Option<f64>) -> Self {
        Self {
            denomination,
            value,
        }
    }
}

impl fmt::Display for CurrencySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "{} {}", value, self.denomination),
            None => write!(f, "- {}", self.denomination),
        }
    }
}

/// Position of a slot inside a [`SlotPair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotIndex {
    First,
    Second,
}

impl SlotIndex {
    /// The slot that is recomputed when this one is edited.
    pub fn other(self) -> Self {
        match self {
            SlotIndex::First => SlotIndex::Second,
            SlotIndex::Second => SlotIndex::First,
        }
    }

    pub fn position(self) -> usize {
        match self {
            SlotIndex::First => 0,
            SlotIndex::Second => 1,
        }
    }
}

impl TryFrom<usize> for SlotIndex {
    type Error = usize;

    fn try_from(position: usize) -> Result<Self, Self::Error> {
        match position {
            0 => Ok(SlotIndex::First),
            1 => Ok(SlotIndex::Second),
            other => Err(other),
        }
    }
}

/// The ordered `[first, second]` pair.
///
/// Order is meaningful: swapping reverses the pair instead of relabelling
/// which slot is "first".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotPair([CurrencySlot; 2]);

impl SlotPair {
    pub fn new(first: CurrencySlot, second: CurrencySlot) -> Self {
        Self([first, second])
    }

    /// The starting pair of a converter: one unit of `base`, with `target`
    /// waiting for its first conversion.
    pub fn initial(base: CurrencyCode, target: CurrencyCode) -> Result<Self, DomainError> {
        if base == target {
            return Err(DomainError::DuplicateDenomination(base));
        }
        Ok(Self::new(
            CurrencySlot::new(base, Some(1.0)),
            CurrencySlot::new(target, None),
        ))
    }

    pub fn first(&self) -> &CurrencySlot {
        &self.0[0]
    }

    pub fn second(&self) -> &CurrencySlot {
        &self.0[1]
    }

    /// Returns the pair with both slots exchanged, values and codes moving
    /// with their slot.
    pub fn swapped(&self) -> Self {
        let [first, second] = self.0.clone();
        Self([second, first])
    }

    /// True if both slots carry the same currency code.
    pub fn has_duplicate_denomination(&self) -> bool {
        self.0[0].denomination == self.0[1].denomination
    }

    pub fn iter(&self) -> impl Iterator<Item = &CurrencySlot> {
        self.0.iter()
    }
}

impl Default for SlotPair {
    fn default() -> Self {
        Self::new(
            CurrencySlot::new(CurrencyCode(DEFAULT_BASE_CURRENCY.to_owned()), Some(1.0)),
            CurrencySlot::new(CurrencyCode(DEFAULT_TARGET_CURRENCY.to_owned()), None),
        )
    }
}

impl Index<SlotIndex> for SlotPair {
    type Output = CurrencySlot;

    fn index(&self, index: SlotIndex) -> &Self::Output {
        &self.0[index.position()]
    }
}

impl IndexMut<SlotIndex> for SlotPair {
    fn index_mut(&mut self, index: SlotIndex) -> &mut Self::Output {
        &mut self.0[index.position()]
    }
}

impl fmt::Display for SlotPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    fn pair() -> SlotPair {
        SlotPair::new(
            CurrencySlot::new(code("USD"), Some(1.0)),
            CurrencySlot::new(code("INR"), Some(83.0)),
        )
    }

    #[test]
    fn test_swap_moves_values_with_codes() {
        let swapped = pair().swapped();
        assert_eq!(swapped.first().denomination, "INR");
        assert_eq!(swapped.first().value, Some(83.0));
        assert_eq!(swapped.second().denomination, "USD");
        assert_eq!(swapped.second().value, Some(1.0));
    }

    #[test]
    fn test_double_swap_is_identity() {
        let original = pair();
        assert_eq!(original.swapped().swapped(), original);
    }

    #[test]
    fn test_index_by_slot() {
        let mut pair = pair();
        pair[SlotIndex::Second].value = None;
        assert_eq!(pair[SlotIndex::Second].value, None);
        assert_eq!(pair[SlotIndex::First].value, Some(1.0));
    }

    #[test]
    fn test_slot_index_other() {
        assert_eq!(SlotIndex::First.other(), SlotIndex::Second);
        assert_eq!(SlotIndex::Second.other(), SlotIndex::First);
        assert_eq!(SlotIndex::try_from(1), Ok(SlotIndex::Second));
        assert_eq!(SlotIndex::try_from(2), Err(2));
    }

    #[test]
    fn test_default_pair() {
        let pair = SlotPair::default();
        assert_eq!(pair.first().denomination, "USD");
        assert_eq!(pair.first().value, Some(1.0));
        assert_eq!(pair.second().denomination, "INR");
        assert_eq!(pair.second().value, None);
    }

    #[test]
    fn test_initial_rejects_same_currency() {
        let result = SlotPair::initial(code("EUR"), code("EUR"));
        assert!(matches!(result, Err(DomainError::DuplicateDenomination(_))));
        assert_eq!(
            SlotPair::initial(code("EUR"), code("GBP")).unwrap().first().value,
            Some(1.0)
        );
    }

    #[test]
    fn test_duplicate_denomination() {
        let pair = SlotPair::new(
            CurrencySlot::new(code("USD"), None),
            CurrencySlot::new(code("USD"), None),
        );
        assert!(pair.has_duplicate_denomination());
    }

    #[test]
    fn test_pair_display() {
        let mut pair = pair();
        pair[SlotIndex::Second].value = None;
        assert_eq!(pair.to_string(), "1 USD <-> - INR");
    }
}
