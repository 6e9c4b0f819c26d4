//! Per-user configuration for the quote pipeline.
//!
//! The config file is TOML at `$HOME/.tkr.toml` (overridable through the
//! `TKR_CONFIG` environment variable) with four fields:
//!
//! ```toml
//! api_key = "YOUR-KEY"
//! crypto = ["BTC", "ETH"]
//! stock_url = "https://www.alphavantage.co/query?function=GLOBAL_QUOTE&symbol={symbol}&apikey={api_key}"
//! crypto_url = "https://www.alphavantage.co/query?function=CURRENCY_EXCHANGE_RATE&from_currency={symbol}&to_currency=USD&apikey={api_key}"
//! ```
//!
//! A missing file or malformed TOML is fatal; a missing field is not and
//! simply yields an empty value downstream.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{AssetKind, Symbol};

/// File name looked up in the user's home directory.
const CONFIG_FILE_NAME: &str = ".tkr.toml";

/// Environment variable that overrides the config path entirely.
const CONFIG_PATH_ENV: &str = "TKR_CONFIG";

/// Loaded once at startup; immutable for the process lifetime.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// API key substituted for `{api_key}` in the URL templates.
    #[serde(default)]
    pub api_key: String,
    /// Symbols treated as cryptocurrencies, matched case-insensitively.
    #[serde(default)]
    pub crypto: Vec<String>,
    /// URL template for equity quotes.
    #[serde(default)]
    pub stock_url: String,
    /// URL template for crypto exchange rates.
    #[serde(default)]
    pub crypto_url: String,
}

/// Failure while locating, reading, or decoding the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("home directory could not be determined; set {CONFIG_PATH_ENV} or HOME")]
    HomeNotFound,
}

impl Config {
    /// Read the config from its well-known location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(resolve_config_path()?)
    }

    /// Read and decode the config from an explicit path.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config =
            toml::from_str(&text).map_err(|source| ConfigError::Parse { path: path.clone(), source })?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Decide whether `symbol` is a cryptocurrency: case-insensitive exact
    /// match against the configured crypto list, equity otherwise.
    pub fn classify(&self, symbol: &Symbol) -> AssetKind {
        let is_crypto = self
            .crypto
            .iter()
            .any(|entry| entry.to_uppercase() == symbol.as_str());
        if is_crypto {
            AssetKind::Crypto
        } else {
            AssetKind::Equity
        }
    }
}

/// `TKR_CONFIG` wins when set and non-empty, then `$HOME/.tkr.toml`.
pub fn resolve_config_path() -> Result<PathBuf, ConfigError> {
    if let Some(path) = env::var_os(CONFIG_PATH_ENV) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    if let Some(home) = env::var_os("HOME") {
        if !home.is_empty() {
            return Ok(PathBuf::from(home).join(CONFIG_FILE_NAME));
        }
    }

    Err(ConfigError::HomeNotFound)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
        file.write_all(contents.as_bytes())
            .expect("config contents should be written");
        file
    }

    #[test]
    fn loads_all_fields() {
        let file = write_config(
            r#"
            api_key = "K"
            crypto = ["BTC", "eth"]
            stock_url = "https://x/{symbol}?key={api_key}"
            crypto_url = "https://y/{symbol}?key={api_key}"
            "#,
        );

        let config = Config::load_from(file.path()).expect("config should load");
        assert_eq!(config.api_key, "K");
        assert_eq!(config.crypto, vec!["BTC", "eth"]);
        assert_eq!(config.stock_url, "https://x/{symbol}?key={api_key}");
        assert_eq!(config.crypto_url, "https://y/{symbol}?key={api_key}");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let file = write_config(r#"api_key = "K""#);

        let config = Config::load_from(file.path()).expect("config should load");
        assert!(config.crypto.is_empty());
        assert!(config.stock_url.is_empty());
        assert!(config.crypto_url.is_empty());
    }

    #[test]
    fn missing_file_is_fatal() {
        let error = Config::load_from("/nonexistent/.tkr.toml").expect_err("must fail");
        assert!(matches!(error, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_fatal() {
        let file = write_config("api_key = [not toml");

        let error = Config::load_from(file.path()).expect_err("must fail");
        assert!(matches!(error, ConfigError::Parse { .. }));
    }

    #[test]
    fn classifies_crypto_case_insensitively() {
        let config = Config {
            crypto: vec![String::from("btc"), String::from("Eth")],
            ..Config::default()
        };

        assert_eq!(config.classify(&Symbol::new("BTC")), AssetKind::Crypto);
        assert_eq!(config.classify(&Symbol::new("eth")), AssetKind::Crypto);
        assert_eq!(config.classify(&Symbol::new("AAPL")), AssetKind::Equity);
    }

    #[test]
    fn classification_requires_exact_match() {
        let config = Config {
            crypto: vec![String::from("BTC")],
            ..Config::default()
        };

        assert_eq!(config.classify(&Symbol::new("BTCUSD")), AssetKind::Equity);
        assert_eq!(config.classify(&Symbol::new("BT")), AssetKind::Equity);
    }
}
