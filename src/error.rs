//! Error types for the `nse-chain-rs` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, NseError>`.
//!
//! [`NseError`] covers:
//! - **Malformed documents** — payloads missing the `records.data` structure
//! - **HTTP status errors** — unexpected status codes with response body
//! - **HTTP transport errors** — network, TLS, timeout failures
//! - **JSON errors** — response bodies that are not JSON at all
//! - **URL errors** — malformed URL construction
//! - **Invalid arguments** — client-side validation errors
//!
//! Absence of individual fields *inside* a well-formed chain document is
//! never an error: those default to zero during row projection (the feed is
//! noisy and routinely omits one side of a strike).

/// All possible errors produced by the `nse-chain-rs` client.
#[derive(Debug, thiserror::Error)]
pub enum NseError {
    /// The payload parsed as JSON but is missing the expected
    /// `records.data` chain structure.
    ///
    /// This fails the whole refresh cycle — there is nothing to extract
    /// rows from.
    #[error("malformed option-chain document: {reason}")]
    MalformedDocument {
        /// What the deserializer rejected.
        reason: String,
    },

    /// The server returned an unexpected HTTP status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// The response body text.
        body: String,
    },

    /// A network or transport-level error from `reqwest`.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not JSON (NSE serves an HTML block page when it
    /// refuses a session).
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error building or parsing a URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The caller provided an invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NseError>;
