//! Domain types for the quote pipeline.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Uppercased ticker symbol |
//! | [`AssetKind`] | Classification outcome (equity or crypto) |
//! | [`EquityQuote`] | Upstream "Global Quote" response |
//! | [`CryptoQuote`] | Upstream "Realtime Currency Exchange Rate" response |
//! | [`QuoteResponse`] | Tagged union over the two response shapes |
//!
//! Upstream transmits every numeric field as text; [`float_or_zero`]
//! converts on demand and degrades to `0.0` instead of failing.

mod quote;
mod symbol;

pub use quote::{
    float_or_zero, AssetKind, CryptoQuote, EquityQuote, ExchangeRate, GlobalQuote, QuoteResponse,
};
pub use symbol::Symbol;
