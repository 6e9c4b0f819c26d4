//! Launcher-workflow output fragment.
//!
//! Formatted mode emits one fixed-schema XML item consumed by a desktop
//! quick-launcher integration:
//!
//! ```text
//! <items><item uuid="tkr" arg="AAPL"><title>AAPL: 150.00 | Change -1.50 📉</title><subtitle>High: 151.00 | Low: 149.00</subtitle><icon>icon.png</icon></item></items>
//! ```
//!
//! Values are inserted verbatim; the schema is fixed and the fields are
//! display strings, so no XML escaping is performed.

use crate::domain::{float_or_zero, ExchangeRate, GlobalQuote, QuoteResponse};

const ITEM_UUID: &str = "tkr";
const ITEM_ICON: &str = "icon.png";

const EMOJI_UP: &str = "📈";
const EMOJI_DOWN: &str = "📉";

/// Render the launcher fragment for a decoded quote.
pub fn fragment(response: &QuoteResponse) -> String {
    match response {
        QuoteResponse::Equity(quote) => equity_fragment(&quote.global_quote),
        QuoteResponse::Crypto(quote) => crypto_fragment(&quote.exchange_rate),
    }
}

fn equity_fragment(quote: &GlobalQuote) -> String {
    let price = float_or_zero(&quote.price);
    let change = float_or_zero(&quote.change);
    let high = float_or_zero(&quote.high);
    let low = float_or_zero(&quote.low);

    // Zero change still counts as up.
    let emoji = if change < 0.0 { EMOJI_DOWN } else { EMOJI_UP };

    let title = format!("{}: {price:.2} | Change {change:.2} {emoji}", quote.symbol);
    let subtitle = format!("High: {high:.2} | Low: {low:.2}");

    format!(
        "<items><item uuid=\"{ITEM_UUID}\" arg=\"{}\"><title>{title}</title><subtitle>{subtitle}</subtitle><icon>{ITEM_ICON}</icon></item></items>",
        quote.symbol
    )
}

fn crypto_fragment(rate: &ExchangeRate) -> String {
    // Crypto items carry the currency name, not the ticker, as the
    // launcher action argument.
    let name = &rate.from_currency_name;
    let price = float_or_zero(&rate.rate);
    let title = format!("{name}: {price:.2}");

    format!(
        "<items><item uuid=\"{ITEM_UUID}\" arg=\"{name}\"><title>{title}</title><icon>{ITEM_ICON}</icon></item></items>"
    )
}
