//! Core HTTP client for the NSE JSON API.
//!
//! The [`NseClient`] struct is the main entry point for fetching chain data.
//! It wraps [`reqwest::Client`] with a cookie store and browser-mimic
//! headers, and provides typed `get` helpers.
//!
//! Endpoint methods are added to `NseClient` via `impl` blocks in the
//! [`crate::api`] module.
//!
//! NSE's `/api/*` endpoints only answer requests that carry the session
//! cookies handed out by the website itself, so the client issues one plain
//! `GET` against the base URL before its first API request and lets the
//! cookie jar do the rest.

use std::sync::Arc;

use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;

use crate::constants::{DEFAULT_USER_AGENT, NSE_BASE_URL};
use crate::error::{NseError, Result};

/// HTTP client for the NSE JSON API.
///
/// Wraps [`reqwest::Client`] with a cookie store (NSE session cookies) and
/// the default headers the endpoints expect. Session priming happens once
/// per client; clones share the primed state and the cookie jar.
///
/// # Example
///
/// ```no_run
/// use nse_chain_rs::client::NseClient;
///
/// # #[tokio::main]
/// # async fn main() -> nse_chain_rs::error::Result<()> {
/// let client = NseClient::new();
/// let document = client.option_chain("NMDC").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NseClient {
    http: reqwest::Client,
    /// Base URL for requests (defaults to [`NSE_BASE_URL`]).
    base_url: String,
    /// Set once the session-priming request has completed.
    primed: Arc<OnceCell<()>>,
}

impl Default for NseClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NseClient {
    /// Create a new `NseClient` targeting the public NSE website.
    pub fn new() -> Self {
        Self::with_base_url(NSE_BASE_URL)
    }

    /// Create a new `NseClient` pointing at a custom base URL.
    ///
    /// Useful for testing against a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .default_headers(Self::default_headers())
            .build()
            .expect("failed to build reqwest client");

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            primed: Arc::new(OnceCell::new()),
        }
    }

    /// Returns a reference to the underlying `reqwest::Client`.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -----------------------------------------------------------------------
    // Generic HTTP helpers
    // -----------------------------------------------------------------------

    /// Perform a GET request and deserialize the JSON response.
    ///
    /// Primes the session cookies first if this client hasn't yet.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        self.get_with_params(path, &[]).await
    }

    /// Perform a GET request with query parameters and deserialize the JSON
    /// response.
    ///
    /// Primes the session cookies first if this client hasn't yet.
    pub async fn get_with_params<R: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<R> {
        self.prime_session().await?;

        let mut url = url::Url::parse(&self.url(path))?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        tracing::debug!(%url, "GET");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    /// Issue the one-time session-priming request (a plain `GET` on the base
    /// URL) so the cookie jar holds valid NSE session cookies.
    ///
    /// Runs at most once per client (clones included); later calls are
    /// no-ops.
    pub async fn prime_session(&self) -> Result<()> {
        self.primed
            .get_or_try_init(|| async {
                tracing::debug!(url = %self.base_url, "priming session cookies");
                let resp = self.http.get(&self.base_url).send().await?;
                let status = resp.status();
                if status.is_success() {
                    Ok(())
                } else {
                    let body = resp.text().await.unwrap_or_default();
                    Err(NseError::HttpStatus { status, body })
                }
            })
            .await?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Build the full URL from a path segment.
    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Default headers applied to every request. NSE refuses requests that
    /// don't look like they came from a browser.
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_static(DEFAULT_USER_AGENT),
        );
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        headers
    }

    /// Read a response, returning either the deserialized body or an
    /// `NseError`.
    ///
    /// Uses `bytes()` + `serde_json::from_slice()` to avoid the overhead of
    /// UTF-8 validation that `text()` + `from_str()` would incur.
    async fn handle_response<R: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<R> {
        let status = resp.status();
        let bytes = resp.bytes().await.unwrap_or_default();

        if status.is_success() {
            serde_json::from_slice(&bytes).map_err(NseError::Json)
        } else {
            Err(NseError::HttpStatus {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            })
        }
    }
}
