//! # tkr Core
//!
//! Quote-fetching pipeline for the `tkr` command-line tool.
//!
//! The pipeline is a single linear pass, executed once per invocation:
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ Config       │──▶│ Classify     │──▶│ Resolve URL  │──▶│ HTTP GET     │
//! │ (~/.tkr.toml)│   │ (crypto list)│   │ (templates)  │   │ (blocking)   │
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//!                                                                 │
//!                                                                 ▼
//!                                                     raw body or launcher
//!                                                     fragment (JSON decode)
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Per-user configuration file (API key, crypto list, URL templates) |
//! | [`domain`] | Symbol newtype and upstream quote response models |
//! | [`endpoint`] | URL template placeholder substitution |
//! | [`http_client`] | Blocking HTTP transport seam |
//! | [`launcher`] | Fixed launcher-workflow XML fragment rendering |
//!
//! ## Error Handling
//!
//! Every fallible operation returns a `Result` with a structured error;
//! the sole lenient path is numeric conversion of upstream text fields,
//! which degrades to `0.0` via [`domain::float_or_zero`].

pub mod config;
pub mod domain;
pub mod endpoint;
pub mod http_client;
pub mod launcher;

pub use config::{Config, ConfigError};
pub use domain::{
    float_or_zero, AssetKind, CryptoQuote, EquityQuote, ExchangeRate, GlobalQuote, QuoteResponse,
    Symbol,
};
pub use endpoint::resolve_url;
pub use http_client::{HttpClient, HttpError, HttpResponse, NoopHttpClient, ReqwestHttpClient};
