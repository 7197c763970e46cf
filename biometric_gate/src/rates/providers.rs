//! One adapter per third-party feed. Each fetches its endpoint, digs the
//! rate out of the provider-specific response shape and validates it.

use std::time::Duration;

use serde_json::Value;
use url::Url;

use super::errors::RateError;
use super::types::RateSource;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);
const BNR_FEED: &str = "https://www.bnr.ro/nbrfxrates.xml";

pub(crate) async fn fetch_rate(source: RateSource, ticker: &str) -> Result<f64, RateError> {
    match source {
        RateSource::Coinbase => {
            let url = format!(
                "https://api.coinbase.com/v2/prices/BTC-{}/buy",
                ticker.to_uppercase()
            );
            let json = fetch_json(ticker, &url).await?;
            extract_coinbase(ticker, &json)
        }
        RateSource::CoinDesk => {
            let url = format!("https://api.coindesk.com/v1/bpi/currentprice/{ticker}.json");
            let json = fetch_json(ticker, &url).await?;
            extract_coindesk(ticker, &json)
        }
        RateSource::CoinGecko => {
            let url = format!(
                "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin&vs_currencies={}",
                ticker.to_lowercase()
            );
            let json = fetch_json(ticker, &url).await?;
            extract_coingecko(ticker, &json)
        }
        RateSource::Bitstamp => {
            let url = format!(
                "https://www.bitstamp.net/api/v2/ticker/btc{}",
                ticker.to_lowercase()
            );
            let json = fetch_json(ticker, &url).await?;
            extract_bitstamp(ticker, &json)
        }
        RateSource::Yadio => {
            let url = format!("https://api.yadio.io/json/{ticker}");
            let json = fetch_json(ticker, &url).await?;
            extract_yadio(ticker, &json)
        }
        RateSource::YadioConvert => {
            let url = format!("https://api.yadio.io/convert/1/BTC/{ticker}");
            let json = fetch_json(ticker, &url).await?;
            extract_yadio_convert(ticker, &json)
        }
        RateSource::Exir => {
            let json = fetch_json(ticker, "https://api.exir.io/v1/ticker?symbol=btc-irt").await?;
            extract_exir(ticker, &json)
        }
        RateSource::Wazirx => {
            let json = fetch_json(ticker, "https://api.wazirx.com/api/v2/tickers/btcinr").await?;
            extract_wazirx(ticker, &json)
        }
        RateSource::Bnr => fetch_bnr(ticker).await,
    }
}

/// BTC→RON has no direct feed: scrape the central bank's USD→RON rate and
/// multiply by the CoinGecko BTC→USD rate.
async fn fetch_bnr(ticker: &str) -> Result<f64, RateError> {
    let xml = fetch_text(ticker, BNR_FEED).await?;
    let usd_to_ron = extract_bnr_usd_rate(&xml)
        .ok_or_else(|| RateError::malformed(ticker, "no valid USD rate in feed"))?;

    let btc_to_usd = Box::pin(fetch_rate(RateSource::CoinGecko, "USD")).await?;
    validate(ticker, btc_to_usd * usd_to_ron)
}

async fn fetch_json(ticker: &str, url: &str) -> Result<Value, RateError> {
    let response = fetch(ticker, url).await?;
    response
        .json::<Value>()
        .await
        .map_err(|err| RateError::malformed(ticker, err))
}

async fn fetch_text(ticker: &str, url: &str) -> Result<String, RateError> {
    let response = fetch(ticker, url).await?;
    response
        .text()
        .await
        .map_err(|err| RateError::malformed(ticker, err))
}

async fn fetch(ticker: &str, url: &str) -> Result<reqwest::Response, RateError> {
    let url = Url::parse(url).map_err(|err| RateError::network(ticker, err))?;

    tracing::debug!("Fetching rate for {ticker} from {url}");

    let client = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(|err| RateError::network(ticker, err))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|err| RateError::network(ticker, err))?;

    if !response.status().is_success() {
        return Err(RateError::network(
            ticker,
            format!("HTTP status {}", response.status()),
        ));
    }
    Ok(response)
}

fn extract_coinbase(ticker: &str, json: &Value) -> Result<f64, RateError> {
    let rate = json.pointer("/data/amount").and_then(value_to_f64);
    validate_extracted(ticker, rate)
}

fn extract_coindesk(ticker: &str, json: &Value) -> Result<f64, RateError> {
    let rate = json
        .pointer(&format!("/bpi/{ticker}/rate_float"))
        .and_then(value_to_f64);
    validate_extracted(ticker, rate)
}

fn extract_coingecko(ticker: &str, json: &Value) -> Result<f64, RateError> {
    let bitcoin = json.get("bitcoin");
    let rate = bitcoin
        .and_then(|b| b.get(ticker).or_else(|| b.get(ticker.to_lowercase())))
        .and_then(value_to_f64);
    validate_extracted(ticker, rate)
}

fn extract_bitstamp(ticker: &str, json: &Value) -> Result<f64, RateError> {
    // Bitstamp answers unknown pairs with a JSON array instead of a ticker
    if json.is_array() {
        return Err(RateError::UnsupportedCurrency(ticker.to_string()));
    }
    let rate = json.get("last").and_then(value_to_f64);
    validate_extracted(ticker, rate)
}

fn extract_yadio(ticker: &str, json: &Value) -> Result<f64, RateError> {
    let rate = json
        .get(ticker)
        .and_then(|entry| entry.get("price"))
        .and_then(value_to_f64);
    validate_extracted(ticker, rate)
}

fn extract_yadio_convert(ticker: &str, json: &Value) -> Result<f64, RateError> {
    let rate = json.get("rate").and_then(value_to_f64);
    validate_extracted(ticker, rate)
}

fn extract_exir(ticker: &str, json: &Value) -> Result<f64, RateError> {
    let rate = json.get("last").and_then(value_to_f64);
    validate_extracted(ticker, rate)
}

fn extract_wazirx(ticker: &str, json: &Value) -> Result<f64, RateError> {
    let rate = json.pointer("/ticker/buy").and_then(value_to_f64);
    validate_extracted(ticker, rate)
}

/// Pull the USD reference rate out of the BNR XML feed.
fn extract_bnr_usd_rate(xml: &str) -> Option<f64> {
    let marker = "<Rate currency=\"USD\">";
    let start = xml.find(marker)? + marker.len();
    let rest = &xml[start..];
    let end = rest.find("</Rate>")?;
    rest[..end]
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|rate| rate.is_finite() && *rate > 0.0)
}

/// Providers serve numbers as numbers or as decimal strings, per feed mood.
fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn validate_extracted(ticker: &str, rate: Option<f64>) -> Result<f64, RateError> {
    match rate {
        Some(rate) => validate(ticker, rate),
        None => Err(RateError::malformed(ticker, "data is wrong")),
    }
}

fn validate(ticker: &str, rate: f64) -> Result<f64, RateError> {
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(RateError::malformed(ticker, "rate is not a positive number"))
    }
}
