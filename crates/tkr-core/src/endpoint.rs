//! Request URL construction from operator-supplied templates.
//!
//! Templates carry the literal placeholders `{api_key}` and `{symbol}`;
//! every occurrence of each is replaced, in either order, with no
//! percent-encoding of the substituted values. The template is trusted.

use crate::config::Config;
use crate::domain::{AssetKind, Symbol};

const API_KEY_VAR: &str = "{api_key}";
const SYMBOL_VAR: &str = "{symbol}";

/// Select the template matching `kind` and substitute both placeholders.
pub fn resolve_url(config: &Config, symbol: &Symbol, kind: AssetKind) -> String {
    let template = match kind {
        AssetKind::Equity => &config.stock_url,
        AssetKind::Crypto => &config.crypto_url,
    };

    template
        .replace(API_KEY_VAR, &config.api_key)
        .replace(SYMBOL_VAR, symbol.as_str())
}
