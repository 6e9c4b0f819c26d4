// Test library for quote pipeline tests
pub use tkr_core::{
    http_client::{HttpClient, NoopHttpClient},
    launcher,
    AssetKind, Config, QuoteResponse, Symbol,
};
