//! Blocking HTTP transport seam.
//!
//! The pipeline performs exactly one GET per invocation and reads the whole
//! body into memory. The status code is recorded but not acted upon: the
//! upstream API reports errors inside 200-status JSON bodies, and raw mode
//! is an exact passthrough of whatever came back.

use std::fmt::{Display, Formatter};

use log::debug;

/// Response envelope returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok_json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }
}

/// Transport-level HTTP error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HttpError {}

/// Transport contract for the single quote fetch.
pub trait HttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse, HttpError>;
}

/// Default no-op transport for deterministic offline tests.
#[derive(Debug, Default)]
pub struct NoopHttpClient;

impl HttpClient for NoopHttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        let _ = url;
        Ok(HttpResponse::ok_json("{}"))
    }
}

/// Production transport using a blocking reqwest client.
#[derive(Debug)]
pub struct ReqwestHttpClient {
    client: reqwest::blocking::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent(concat!("tkr/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_else(|_| reqwest::blocking::Client::new()),
        }
    }

    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        let response = self.client.get(url).send().map_err(|error| {
            if error.is_timeout() {
                HttpError::new(format!("request timeout: {error}"))
            } else if error.is_connect() {
                HttpError::new(format!("connection failed: {error}"))
            } else {
                HttpError::new(format!("request failed: {error}"))
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|error| HttpError::new(format!("failed to read response body: {error}")))?;
        debug!("upstream returned status {status} ({} bytes)", body.len());

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_client_returns_empty_json() {
        let response = NoopHttpClient
            .get("https://example.test/quote")
            .expect("noop transport should succeed");

        assert_eq!(response.status, 200);
        assert_eq!(response.body, "{}");
    }

    #[test]
    fn error_preserves_message() {
        let error = HttpError::new("connection failed: refused");
        assert_eq!(error.message(), "connection failed: refused");
        assert_eq!(error.to_string(), "connection failed: refused");
    }
}
