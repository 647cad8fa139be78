//! Constants for the NSE option-chain API.
//!
//! Contains the base URL, endpoint paths, and default client parameters.
//! These are used internally by [`NseClient`](crate::client::NseClient) and
//! the fetch cache, but are also exported for advanced usage.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Base URL & endpoints
// ---------------------------------------------------------------------------

/// Base URL for the NSE website and its JSON API.
///
/// A plain `GET` on this URL is also what primes the session cookies the
/// `/api/*` endpoints require.
pub const NSE_BASE_URL: &str = "https://www.nseindia.com";

/// Path of the equity option-chain endpoint (takes a `symbol` query param).
pub const OPTION_CHAIN_EQUITIES_PATH: &str = "/api/option-chain-equities";

// ---------------------------------------------------------------------------
// Client defaults
// ---------------------------------------------------------------------------

/// `User-Agent` sent with every request. NSE rejects cookieless/UA-less
/// clients with an HTML block page.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// How long a fetched option-chain document stays fresh in
/// [`ChainCache`](crate::cache::ChainCache) before a re-fetch.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);
