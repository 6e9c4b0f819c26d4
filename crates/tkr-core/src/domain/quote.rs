//! Upstream quote response models.
//!
//! The remote API keys every field by a verbose human-readable name and
//! transmits all numbers as text. The structs below mirror those schemas
//! verbatim; conversion to `f64` happens on demand via [`float_or_zero`].

use serde::Deserialize;

/// Classification outcome for a requested symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Equity,
    Crypto,
}

/// Equity response envelope: `{"Global Quote": {...}}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EquityQuote {
    #[serde(rename = "Global Quote", default)]
    pub global_quote: GlobalQuote,
}

/// Fields of the upstream "Global Quote" object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlobalQuote {
    #[serde(rename = "01. symbol", default)]
    pub symbol: String,
    #[serde(rename = "02. open", default)]
    pub open: String,
    #[serde(rename = "03. high", default)]
    pub high: String,
    #[serde(rename = "04. low", default)]
    pub low: String,
    #[serde(rename = "05. price", default)]
    pub price: String,
    #[serde(rename = "06. volume", default)]
    pub volume: String,
    #[serde(rename = "07. latest trading day", default)]
    pub latest_trading_day: String,
    #[serde(rename = "08. previous close", default)]
    pub previous_close: String,
    #[serde(rename = "09. change", default)]
    pub change: String,
    #[serde(rename = "10. change percent", default)]
    pub change_percent: String,
}

/// Crypto response envelope: `{"Realtime Currency Exchange Rate": {...}}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CryptoQuote {
    #[serde(rename = "Realtime Currency Exchange Rate", default)]
    pub exchange_rate: ExchangeRate,
}

/// Fields of the upstream "Realtime Currency Exchange Rate" object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExchangeRate {
    #[serde(rename = "1. From_Currency Code", default)]
    pub from_currency_code: String,
    #[serde(rename = "2. From_Currency Name", default)]
    pub from_currency_name: String,
    #[serde(rename = "3. To_Currency Code", default)]
    pub to_currency_code: String,
    #[serde(rename = "4. To_Currency Name", default)]
    pub to_currency_name: String,
    #[serde(rename = "5. Exchange Rate", default)]
    pub rate: String,
    #[serde(rename = "6. Last Refreshed", default)]
    pub last_refreshed: String,
    #[serde(rename = "7. Time Zone", default)]
    pub time_zone: String,
    #[serde(rename = "8. Bid Price", default)]
    pub bid_price: String,
    #[serde(rename = "9. Ask Price", default)]
    pub ask_price: String,
}

/// Decoded response body, shaped by the classification decided upstream.
#[derive(Debug, Clone)]
pub enum QuoteResponse {
    Equity(EquityQuote),
    Crypto(CryptoQuote),
}

impl QuoteResponse {
    /// Decode `body` as the schema matching `kind`. Decoding failure is
    /// fatal to the invocation; missing fields are not and default empty.
    pub fn decode(kind: AssetKind, body: &str) -> Result<Self, serde_json::Error> {
        match kind {
            AssetKind::Equity => serde_json::from_str(body).map(Self::Equity),
            AssetKind::Crypto => serde_json::from_str(body).map(Self::Crypto),
        }
    }
}

/// Lenient text-to-float conversion: malformed input becomes `0.0`.
///
/// This is a display-oriented policy; a malformed field is indistinguishable
/// from a legitimately zero value.
pub fn float_or_zero(text: &str) -> f64 {
    text.parse().unwrap_or(0.0)
}
