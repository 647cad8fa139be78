#![allow(missing_docs)]
//! Option Chain types — chain document, per-strike entries, per-side quotes.

use serde::Deserialize;

use crate::error::{NseError, Result};

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// The raw response of `GET /api/option-chain-equities`.
///
/// Only the `records` envelope is consumed; NSE also sends a pre-filtered
/// `filtered` section for the nearest expiry, but filtering is done locally
/// so it is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionChainDocument {
    pub records: ChainRecords,
}

impl OptionChainDocument {
    /// Type a raw JSON value as a chain document.
    ///
    /// This is where a payload missing the `records.data` structure (or with
    /// `data` not an array) is rejected — once a document exists, the chain
    /// is guaranteed to be present and extraction cannot fail.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|err| NseError::MalformedDocument {
            reason: err.to_string(),
        })
    }

    /// Selectable expiry dates, in source order.
    pub fn expiry_dates(&self) -> &[String] {
        &self.records.expiry_dates
    }
}

// ---------------------------------------------------------------------------
// Records envelope
// ---------------------------------------------------------------------------

/// The `records` envelope: all per-strike entries plus the expiry list.
///
/// `data` is the one structurally required field. Everything else defaults
/// when absent — the feed is noisy and older snapshots omit fields freely.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainRecords {
    /// Per-strike entries, one per (strike, expiry) pair, in source order.
    pub data: Vec<ChainEntry>,
    /// Expiry dates selectable for this underlying, in source order.
    #[serde(default)]
    pub expiry_dates: Vec<String>,
    /// Feed timestamp, e.g. `"07-Aug-2026 15:30:00"`.
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Last traded price of the underlying.
    #[serde(default)]
    pub underlying_value: Option<f64>,
}

// ---------------------------------------------------------------------------
// Per-strike entry
// ---------------------------------------------------------------------------

/// One element of `records.data`: a strike/expiry pair with optional call
/// and put sides.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainEntry {
    #[serde(rename = "strikePrice", default)]
    pub strike_price: f64,
    #[serde(rename = "expiryDate", default)]
    pub expiry_date: Option<String>,
    /// Call side (may be absent if no CE trades at this strike).
    #[serde(rename = "CE")]
    pub ce: Option<OptionQuote>,
    /// Put side (may be absent if no PE trades at this strike).
    #[serde(rename = "PE")]
    pub pe: Option<OptionQuote>,
}

// ---------------------------------------------------------------------------
// Per-side quote (CE/PE)
// ---------------------------------------------------------------------------

/// Quote for a single call or put at a given strike.
///
/// Every field is optional on the wire; absent fields project to zero in
/// [`ChainRow`](crate::chain::ChainRow).
#[derive(Debug, Clone, Deserialize)]
pub struct OptionQuote {
    #[serde(rename = "openInterest", default)]
    pub open_interest: Option<u64>,
    #[serde(rename = "changeinOpenInterest", default)]
    pub change_in_open_interest: Option<i64>,
    #[serde(rename = "impliedVolatility", default)]
    pub implied_volatility: Option<f64>,
    #[serde(rename = "lastPrice", default)]
    pub last_price: Option<f64>,
}
