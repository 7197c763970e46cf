use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Which third-party feed serves a currency's rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RateSource {
    Coinbase,
    CoinDesk,
    CoinGecko,
    Bitstamp,
    Yadio,
    YadioConvert,
    Exir,
    Wazirx,
    Bnr,
}

/// Registry entry for one fiat currency.
#[derive(Debug, Clone, Deserialize)]
pub struct FiatUnit {
    /// Ticker as the provider endpoint expects it.
    pub endpoint_key: String,
    pub symbol: String,
    pub locale: String,
    pub source: RateSource,
}

/// A resolved BTC price in one fiat currency.
#[derive(Debug, Clone)]
pub struct Rate {
    pub ticker: String,
    /// Positive, finite.
    pub value: f64,
    pub fetched_at: DateTime<Utc>,
}
