//! Client and cache tests against a local mock server.
//!
//! Covers the session-priming flow, the endpoint/query shape, the error
//! taxonomy for bad upstream payloads, and the fetch cache's TTL behavior.

use std::time::Duration;

use httpmock::prelude::*;
use nse_chain_rs::cache::{CacheConfig, CachedFetcher};
use nse_chain_rs::client::NseClient;
use nse_chain_rs::error::NseError;
use serde_json::json;

/// Minimal well-formed chain payload for one symbol.
fn chain_body() -> serde_json::Value {
    json!({
        "records": {
            "expiryDates": ["28-Aug-2026"],
            "timestamp": "07-Aug-2026 15:30:00",
            "underlyingValue": 68.45,
            "data": [
                {
                    "strikePrice": 65.0,
                    "expiryDate": "28-Aug-2026",
                    "CE": { "openInterest": 120, "changeinOpenInterest": 4, "impliedVolatility": 30.1, "lastPrice": 4.2 },
                    "PE": { "openInterest": 90, "changeinOpenInterest": -2, "impliedVolatility": 28.7, "lastPrice": 1.1 }
                }
            ]
        }
    })
}

/// Mock the NSE homepage so session priming succeeds and sets a cookie.
async fn mock_homepage(server: &MockServer) -> httpmock::Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .header("set-cookie", "nsit=mock-session; Path=/")
                .body("<html></html>");
        })
        .await
}

// ===================================================================
// Fetch & priming
// ===================================================================

#[tokio::test]
async fn fetches_and_parses_chain() {
    let server = MockServer::start_async().await;
    let homepage = mock_homepage(&server).await;
    let api = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/option-chain-equities")
                .query_param("symbol", "NMDC");
            then.status(200).json_body(chain_body());
        })
        .await;

    let client = NseClient::with_base_url(server.base_url());
    let document = client.option_chain("NMDC").await.expect("fetch failed");

    assert_eq!(document.expiry_dates(), ["28-Aug-2026"]);
    assert_eq!(document.records.data.len(), 1);
    assert_eq!(document.records.underlying_value, Some(68.45));
    homepage.assert_async().await;
    api.assert_async().await;
}

#[tokio::test]
async fn session_is_primed_once_per_client() {
    let server = MockServer::start_async().await;
    let homepage = mock_homepage(&server).await;
    let api = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/option-chain-equities");
            then.status(200).json_body(chain_body());
        })
        .await;

    let client = NseClient::with_base_url(server.base_url());
    client.option_chain("NMDC").await.expect("first fetch");
    client.option_chain("NMDC").await.expect("second fetch");

    homepage.assert_hits_async(1).await;
    api.assert_hits_async(2).await;
}

#[tokio::test]
async fn empty_symbol_is_rejected_client_side() {
    // Never touches the network — no mocks needed.
    let client = NseClient::with_base_url("http://127.0.0.1:9");
    let err = client.option_chain("  ").await.unwrap_err();
    assert!(matches!(err, NseError::InvalidArgument(_)), "got: {err:?}");
}

// ===================================================================
// Upstream failure taxonomy
// ===================================================================

#[tokio::test]
async fn malformed_payload_fails_the_refresh() {
    let server = MockServer::start_async().await;
    let _homepage = mock_homepage(&server).await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/option-chain-equities");
            then.status(200).json_body(json!({ "records": { "expiryDates": [] } }));
        })
        .await;

    let client = NseClient::with_base_url(server.base_url());
    let err = client.option_chain("NMDC").await.unwrap_err();
    assert!(matches!(err, NseError::MalformedDocument { .. }), "got: {err:?}");
}

#[tokio::test]
async fn error_status_surfaces_with_body() {
    let server = MockServer::start_async().await;
    let _homepage = mock_homepage(&server).await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/option-chain-equities");
            then.status(403).body("Access Denied");
        })
        .await;

    let client = NseClient::with_base_url(server.base_url());
    let err = client.option_chain("NMDC").await.unwrap_err();
    match err {
        NseError::HttpStatus { status, body } => {
            assert_eq!(status.as_u16(), 403);
            assert_eq!(body, "Access Denied");
        }
        other => panic!("expected HttpStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_a_json_error() {
    // NSE's bot-block page: 200 with HTML.
    let server = MockServer::start_async().await;
    let _homepage = mock_homepage(&server).await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/option-chain-equities");
            then.status(200).body("<html>blocked</html>");
        })
        .await;

    let client = NseClient::with_base_url(server.base_url());
    let err = client.option_chain("NMDC").await.unwrap_err();
    assert!(matches!(err, NseError::Json(_)), "got: {err:?}");
}

#[tokio::test]
async fn failed_priming_fails_the_fetch() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(503).body("maintenance");
        })
        .await;

    let client = NseClient::with_base_url(server.base_url());
    let err = client.option_chain("NMDC").await.unwrap_err();
    assert!(matches!(err, NseError::HttpStatus { .. }), "got: {err:?}");
}

// ===================================================================
// Fetch cache
// ===================================================================

#[tokio::test]
async fn cached_fetcher_serves_within_ttl() {
    let server = MockServer::start_async().await;
    let _homepage = mock_homepage(&server).await;
    let api = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/option-chain-equities");
            then.status(200).json_body(chain_body());
        })
        .await;

    let mut fetcher = CachedFetcher::new(NseClient::with_base_url(server.base_url()));

    let first = fetcher.option_chain("NMDC").await.expect("first fetch");
    assert!(!first.from_cache);

    let second = fetcher.option_chain("NMDC").await.expect("second fetch");
    assert!(second.from_cache);
    assert_eq!(second.fetched_at, first.fetched_at);

    api.assert_hits_async(1).await;
}

#[tokio::test]
async fn refresh_bypasses_the_cache() {
    let server = MockServer::start_async().await;
    let _homepage = mock_homepage(&server).await;
    let api = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/option-chain-equities");
            then.status(200).json_body(chain_body());
        })
        .await;

    let mut fetcher = CachedFetcher::new(NseClient::with_base_url(server.base_url()));
    fetcher.option_chain("NMDC").await.expect("first fetch");
    let refreshed = fetcher.refresh("NMDC").await.expect("refresh");

    assert!(!refreshed.from_cache);
    api.assert_hits_async(2).await;
}

#[tokio::test]
async fn expired_entries_are_refetched() {
    let server = MockServer::start_async().await;
    let _homepage = mock_homepage(&server).await;
    let api = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/option-chain-equities");
            then.status(200).json_body(chain_body());
        })
        .await;

    // Zero TTL: every entry is stale the moment it is stored.
    let config = CacheConfig {
        ttl: Duration::ZERO,
        enabled: true,
    };
    let mut fetcher =
        CachedFetcher::with_config(NseClient::with_base_url(server.base_url()), config);

    let first = fetcher.option_chain("NMDC").await.expect("first fetch");
    let second = fetcher.option_chain("NMDC").await.expect("second fetch");

    assert!(!first.from_cache);
    assert!(!second.from_cache);
    api.assert_hits_async(2).await;
}

#[tokio::test]
async fn disabled_cache_always_fetches() {
    let server = MockServer::start_async().await;
    let _homepage = mock_homepage(&server).await;
    let api = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/option-chain-equities");
            then.status(200).json_body(chain_body());
        })
        .await;

    let config = CacheConfig {
        ttl: Duration::from_secs(300),
        enabled: false,
    };
    let mut fetcher =
        CachedFetcher::with_config(NseClient::with_base_url(server.base_url()), config);

    fetcher.option_chain("NMDC").await.expect("first fetch");
    let second = fetcher.option_chain("NMDC").await.expect("second fetch");

    assert!(!second.from_cache);
    api.assert_hits_async(2).await;
}
