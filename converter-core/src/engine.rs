//! Conversion Engine
//!
//! Derives the non-edited slot of a pair from the edited one. Pure: takes a
//! pair and returns the next pair, never touching rate status or the host.

use converter_types::{ConversionError, RateTable, SlotIndex, SlotPair};

/// Fractional digits kept in a derived amount.
pub const DECIMAL_PLACES: i32 = 3;

/// Recomputes the slot opposite `edited`.
///
/// The edited amount is normalized into the base currency through its own
/// rate, then scaled by the other slot's rate and rounded to
/// [`DECIMAL_PLACES`]. Anything that does not produce a finite number (an
/// unset amount, a missing rate, a zero rate) yields `0`. Denominations and
/// slot order are never changed, and the edited slot is returned as given.
///
/// Returns [`ConversionError::RatesUnavailable`] when there is no table.
pub fn convert(
    pair: &SlotPair,
    edited: SlotIndex,
    rates: Option<&RateTable>,
) -> Result<SlotPair, ConversionError> {
    let rates = rates.ok_or(ConversionError::RatesUnavailable)?;

    let source = &pair[edited];
    let target = &pair[edited.other()];

    let amount = source.value.unwrap_or(f64::NAN);
    let source_rate = rates.rate(&source.denomination).unwrap_or(f64::NAN);
    let target_rate = rates.rate(&target.denomination).unwrap_or(f64::NAN);

    let base = amount / source_rate;
    let converted = round_to(target_rate * base, DECIMAL_PLACES);

    let mut next = pair.clone();
    next[edited.other()].value = Some(if converted.is_finite() {
        converted
    } else {
        0.0
    });
    Ok(next)
}

/// Rounds half away from zero at `decimals` fractional digits.
///
/// The shift goes through the decimal exponent instead of multiplying by a
/// power of ten, so values such as `1.0005` round on their written digits.
/// Non-finite input is returned unchanged.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let shifted = format!("{value}e{decimals}")
        .parse::<f64>()
        .unwrap_or(f64::NAN);
    format!("{}e{}", shifted.round(), -decimals)
        .parse::<f64>()
        .unwrap_or(f64::NAN)
}

/// Reads accepted input text as an amount. Text with no digits (`""`, `"."`)
/// is an unset amount.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use converter_types::{CurrencyCode, CurrencySlot};

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    fn rates(pairs: &[(&str, f64)]) -> RateTable {
        pairs.iter().map(|&(c, r)| (code(c), r)).collect()
    }

    fn pair(first: (&str, Option<f64>), second: (&str, Option<f64>)) -> SlotPair {
        SlotPair::new(
            CurrencySlot::new(code(first.0), first.1),
            CurrencySlot::new(code(second.0), second.1),
        )
    }

    #[test]
    fn test_converts_first_into_second() {
        let table = rates(&[("USD", 1.0), ("INR", 83.0)]);
        let next = convert(
            &pair(("USD", Some(2.0)), ("INR", None)),
            SlotIndex::First,
            Some(&table),
        )
        .unwrap();
        assert_eq!(next.second().value, Some(166.0));
        assert_eq!(next.first().value, Some(2.0));
    }

    #[test]
    fn test_converts_second_into_first() {
        let table = rates(&[("USD", 1.0), ("INR", 80.0)]);
        let next = convert(
            &pair(("USD", Some(1.0)), ("INR", Some(40.0))),
            SlotIndex::Second,
            Some(&table),
        )
        .unwrap();
        assert_eq!(next.first().value, Some(0.5));
        assert_eq!(next.second().value, Some(40.0));
    }

    #[test]
    fn test_cross_rate_goes_through_base() {
        let table = rates(&[("USD", 1.0), ("INR", 80.0), ("EUR", 0.9)]);
        let next = convert(
            &pair(("EUR", Some(50.0)), ("INR", None)),
            SlotIndex::First,
            Some(&table),
        )
        .unwrap();
        assert_eq!(next.second().value, Some(round_to(80.0 * (50.0 / 0.9), 3)));
        assert_eq!(next.second().value, Some(4444.444));
    }

    #[test]
    fn test_order_and_denominations_preserved() {
        let table = rates(&[("USD", 1.0), ("INR", 83.0)]);
        let before = pair(("INR", Some(83.0)), ("USD", None));
        let next = convert(&before, SlotIndex::First, Some(&table)).unwrap();
        assert_eq!(next.first().denomination, "INR");
        assert_eq!(next.second().denomination, "USD");
        assert_eq!(next.second().value, Some(1.0));
    }

    #[test]
    fn test_missing_other_rate_yields_zero() {
        let table = rates(&[("USD", 1.0)]);
        let next = convert(
            &pair(("USD", Some(5.0)), ("XYZ", Some(12.0))),
            SlotIndex::First,
            Some(&table),
        )
        .unwrap();
        assert_eq!(next.second().value, Some(0.0));
    }

    #[test]
    fn test_missing_edited_rate_yields_zero() {
        let table = rates(&[("INR", 83.0)]);
        let next = convert(
            &pair(("XYZ", Some(5.0)), ("INR", None)),
            SlotIndex::First,
            Some(&table),
        )
        .unwrap();
        assert_eq!(next.second().value, Some(0.0));
    }

    #[test]
    fn test_zero_edited_rate_yields_zero() {
        let table = rates(&[("USD", 0.0), ("INR", 83.0)]);
        let next = convert(
            &pair(("USD", Some(5.0)), ("INR", None)),
            SlotIndex::First,
            Some(&table),
        )
        .unwrap();
        assert_eq!(next.second().value, Some(0.0));
    }

    #[test]
    fn test_unset_amount_yields_zero() {
        let table = rates(&[("USD", 1.0), ("INR", 83.0)]);
        let next = convert(
            &pair(("USD", None), ("INR", Some(10.0))),
            SlotIndex::First,
            Some(&table),
        )
        .unwrap();
        assert_eq!(next.second().value, Some(0.0));
        assert_eq!(next.first().value, None);
    }

    #[test]
    fn test_no_table_is_rates_unavailable() {
        let before = pair(("USD", Some(1.0)), ("INR", None));
        assert_eq!(
            convert(&before, SlotIndex::First, None),
            Err(ConversionError::RatesUnavailable)
        );
    }

    #[test]
    fn test_round_to_three_places() {
        assert_eq!(round_to(1.23456, 3), 1.235);
        assert_eq!(round_to(1.0005, 3), 1.001);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(83.0, 3), 83.0);
        assert!(round_to(f64::NAN, 3).is_nan());
        assert_eq!(round_to(f64::INFINITY, 3), f64::INFINITY);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5"), Some(12.5));
        assert_eq!(parse_amount("12."), Some(12.0));
        assert_eq!(parse_amount(".5"), Some(0.5));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("."), None);
    }
}
