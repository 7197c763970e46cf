use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::Utc;

use super::errors::RateError;
use super::providers;
use super::types::{FiatUnit, Rate};

/// Currencies this build knows how to price, keyed by ticker.
static FIAT_UNITS: LazyLock<HashMap<String, FiatUnit>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("fiat_units.json"))
        .expect("embedded fiat unit registry is valid JSON")
});

/// Registry entry for `ticker`, if this build supports it.
pub fn fiat_unit(ticker: &str) -> Option<&'static FiatUnit> {
    FIAT_UNITS.get(ticker)
}

/// All supported tickers, sorted.
pub fn supported_tickers() -> Vec<&'static str> {
    let mut tickers: Vec<&'static str> = FIAT_UNITS.keys().map(String::as_str).collect();
    tickers.sort_unstable();
    tickers
}

/// Resolve the current BTC price in `ticker` from that currency's
/// configured provider.
pub async fn get_fiat_rate(ticker: &str) -> Result<Rate, RateError> {
    let unit =
        fiat_unit(ticker).ok_or_else(|| RateError::UnsupportedCurrency(ticker.to_string()))?;

    let value = providers::fetch_rate(unit.source, &unit.endpoint_key).await?;
    Ok(Rate {
        ticker: unit.endpoint_key.clone(),
        value,
        fetched_at: Utc::now(),
    })
}
