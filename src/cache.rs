//! Time-bounded in-memory cache for fetched option-chain documents.
//!
//! [`CachedFetcher`] keeps the last document per symbol and serves it until
//! the TTL lapses, so filter changes don't re-hit the endpoint. The
//! extract/aggregate pipeline never sees the cache — it stays a pure
//! function of whatever document it is handed.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::client::NseClient;
use crate::constants::DEFAULT_CACHE_TTL;
use crate::error::Result;
use crate::types::option_chain::OptionChainDocument;

/// Cache configuration.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long a fetched document stays fresh.
    pub ttl: Duration,
    /// Whether to use the cache at all.
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_CACHE_TTL,
            enabled: true,
        }
    }
}

/// One cached document plus when it was fetched.
#[derive(Debug, Clone)]
struct CacheSlot {
    document: OptionChainDocument,
    fetched_at: DateTime<Utc>,
    stored: Instant,
}

/// In-memory document cache keyed by symbol.
#[derive(Debug)]
pub struct ChainCache {
    config: CacheConfig,
    slots: HashMap<String, CacheSlot>,
}

impl ChainCache {
    /// Create an empty cache with the given configuration.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            slots: HashMap::new(),
        }
    }

    /// Look up a still-fresh document for a symbol.
    ///
    /// Expired or missing entries (and a disabled cache) return `None`.
    pub fn get(&self, symbol: &str) -> Option<(&OptionChainDocument, DateTime<Utc>)> {
        if !self.config.enabled {
            return None;
        }
        self.slots
            .get(symbol)
            .filter(|slot| slot.stored.elapsed() < self.config.ttl)
            .map(|slot| (&slot.document, slot.fetched_at))
    }

    /// Store a freshly fetched document for a symbol.
    pub fn insert(&mut self, symbol: &str, document: OptionChainDocument, fetched_at: DateTime<Utc>) {
        if !self.config.enabled {
            return;
        }
        self.slots.insert(
            symbol.to_owned(),
            CacheSlot {
                document,
                fetched_at,
                stored: Instant::now(),
            },
        );
    }

    /// Drop the cached document for a symbol, if any.
    pub fn evict(&mut self, symbol: &str) {
        self.slots.remove(symbol);
    }

    /// Drop every cached document.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

/// A fetched document plus its provenance, for "last updated" display.
#[derive(Debug, Clone)]
pub struct ChainFetch {
    /// The chain document.
    pub document: OptionChainDocument,
    /// When the document was fetched from NSE (not when it was served).
    pub fetched_at: DateTime<Utc>,
    /// Whether this came out of the cache rather than a live request.
    pub from_cache: bool,
}

/// Combines an [`NseClient`] with a [`ChainCache`]: serve fresh cached
/// documents, fetch on miss or expiry.
///
/// Takes `&mut self` rather than locking — the whole pipeline is a
/// single-threaded request/response cycle, so there is nothing to share.
#[derive(Debug)]
pub struct CachedFetcher {
    client: NseClient,
    cache: ChainCache,
}

impl CachedFetcher {
    /// Wrap a client with the default cache configuration (300 s TTL).
    pub fn new(client: NseClient) -> Self {
        Self::with_config(client, CacheConfig::default())
    }

    /// Wrap a client with a custom cache configuration.
    pub fn with_config(client: NseClient, config: CacheConfig) -> Self {
        Self {
            client,
            cache: ChainCache::new(config),
        }
    }

    /// Returns a reference to the wrapped client.
    pub fn client(&self) -> &NseClient {
        &self.client
    }

    /// Get the option chain for a symbol, from cache when fresh.
    pub async fn option_chain(&mut self, symbol: &str) -> Result<ChainFetch> {
        if let Some((document, fetched_at)) = self.cache.get(symbol) {
            tracing::debug!(%symbol, "serving option chain from cache");
            return Ok(ChainFetch {
                document: document.clone(),
                fetched_at,
                from_cache: true,
            });
        }
        self.refresh(symbol).await
    }

    /// Fetch the option chain for a symbol, bypassing (and refilling) the
    /// cache.
    pub async fn refresh(&mut self, symbol: &str) -> Result<ChainFetch> {
        tracing::debug!(%symbol, "fetching fresh option chain");
        let document = self.client.option_chain(symbol).await?;
        let fetched_at = Utc::now();
        self.cache.insert(symbol, document.clone(), fetched_at);
        Ok(ChainFetch {
            document,
            fetched_at,
            from_cache: false,
        })
    }
}
