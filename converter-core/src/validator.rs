//! Validation of amounts typed into a slot.
//!
//! Two rules run in sequence: the text must look like an unsigned decimal,
//! and its integer part must not exceed [`MAX_VALUE_RANGE`]. Validation is a
//! gate only; accepted text is not normalized here.

use converter_types::{MAX_VALUE_RANGE, ValidationError};

/// Runs every rule against `raw`. The empty string is accepted and means
/// "amount cleared".
pub fn validate(raw: &str) -> Result<(), ValidationError> {
    check_numeric(raw)?;
    check_range(raw)
}

/// Accepts `digits`, `digits.digits`, `digits.` and `.digits`, plus the
/// empty string. Anything else, including signs and exponents, is rejected.
pub fn check_numeric(raw: &str) -> Result<(), ValidationError> {
    let (integer, fraction) = raw.split_once('.').unwrap_or((raw, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    if all_digits(integer) && all_digits(fraction) {
        Ok(())
    } else {
        Err(ValidationError::NotNumeric)
    }
}

/// Rejects text whose leading integer part is above [`MAX_VALUE_RANGE`].
///
/// The fractional part is truncated, not rounded, so `"10000.9"` passes.
/// Text without leading digits has no integer value and passes this rule.
pub fn check_range(raw: &str) -> Result<(), ValidationError> {
    let digits = raw.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Ok(());
    }

    match raw[..digits].parse::<f64>() {
        Ok(integer) if integer > f64::from(MAX_VALUE_RANGE) => {
            Err(ValidationError::ExceedsMaxRange)
        }
        _ => Ok(()),
    }
}
