use thiserror::Error;

/// CLI-level error categories. Every variant terminates the invocation
/// with exit status 1 after being printed to stderr.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] tkr_core::ConfigError),

    #[error(transparent)]
    Transport(#[from] tkr_core::HttpError),

    #[error("failed to decode quote response: {0}")]
    Decode(#[from] serde_json::Error),
}
