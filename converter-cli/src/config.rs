//! Configuration assembled from arguments and environment.

use converter_core::Converter;
use converter_types::{CurrencyCode, RateSource};
use exchange_rates::StaticRateSource;
use rates_client::HttpRateSource;

/// Application configuration.
pub struct Config {
    pub rates_url: String,
    pub base: CurrencyCode,
    pub target: CurrencyCode,
    pub offline: bool,
}

impl Config {
    /// Validates raw settings. Both currency codes must be non-empty and
    /// different from each other.
    pub fn new(rates_url: &str, base: &str, target: &str, offline: bool) -> anyhow::Result<Self> {
        let base = parse_code(base)?;
        let target = parse_code(target)?;
        if base == target {
            anyhow::bail!("Base and target currency must differ (both are {})", base);
        }

        let rates_url = rates_url.trim().to_string();
        if !offline && rates_url.is_empty() {
            anyhow::bail!("FX_RATES_URL cannot be empty unless --offline is set");
        }

        Ok(Self {
            rates_url,
            base,
            target,
            offline,
        })
    }

    /// The rate source selected by `--offline`.
    pub fn rate_source(&self) -> Box<dyn RateSource> {
        if self.offline {
            Box::new(StaticRateSource::builtin())
        } else {
            Box::new(HttpRateSource::new(&self.rates_url))
        }
    }

    /// A converter starting from the configured pair.
    pub fn converter(&self) -> anyhow::Result<Converter> {
        Ok(Converter::with_currencies(
            self.base.clone(),
            self.target.clone(),
        )?)
    }
}

/// Parses a currency code as typed on the command line. Codes are matched
/// against rate tables verbatim, so input is upper-cased first.
pub fn parse_code(s: &str) -> anyhow::Result<CurrencyCode> {
    CurrencyCode::new(s.trim().to_uppercase())
        .map_err(|_| anyhow::anyhow!("Invalid currency code: {:?}", s))
}
