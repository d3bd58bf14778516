//! Currency codes used as rate-table keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A currency code such as `USD` or `INR`.
///
/// Codes are opaque keys into a [`RateTable`](crate::RateTable). They are
/// never empty, but no casing rules are applied: the rate endpoint decides
/// which spellings exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(pub(crate) String);

impl CurrencyCode {
    /// Creates a code, rejecting empty or blank input.
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(DomainError::EmptyCurrencyCode);
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl PartialEq<str> for CurrencyCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CurrencyCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_parse() {
        let code: CurrencyCode = "USD".parse().unwrap();
        assert_eq!(code, "USD");
        assert_eq!(code.to_string(), "USD");
    }

    #[test]
    fn test_empty_code_rejected() {
        assert!(matches!(
            CurrencyCode::new(""),
            Err(DomainError::EmptyCurrencyCode)
        ));
        assert!(matches!(
            "   ".parse::<CurrencyCode>(),
            Err(DomainError::EmptyCurrencyCode)
        ));
    }

    #[test]
    fn test_code_is_case_sensitive() {
        let upper = CurrencyCode::new("EUR").unwrap();
        let lower = CurrencyCode::new("eur").unwrap();
        assert_ne!(upper, lower);
    }

    #[test]
    fn test_code_serde_rejects_empty() {
        let ok: CurrencyCode = serde_json::from_str("\"GBP\"").unwrap();
        assert_eq!(ok, "GBP");
        assert!(serde_json::from_str::<CurrencyCode>("\"\"").is_err());
    }
}
